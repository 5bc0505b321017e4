use tracing::debug;

use crate::{
    style::{BreakpointRange, StyleValue},
    theme::{BreakpointTable, SpacingScale},
};

/// Decides which values render differently in the mobile and desktop groups.
///
/// A value diverges when it is numeric and above `threshold`. The default
/// threshold of 3 matches the builtin spacing scale, whose first four
/// levels are identical in both groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceRule {
    threshold: f64,
}

impl DivergenceRule {
    pub const DEFAULT_THRESHOLD: f64 = 3.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Threshold at the last spacing level rendered the same on mobile and
    /// desktop.
    pub fn for_spacing(scale: &SpacingScale) -> Self {
        Self::new(scale.shared_levels() as f64 - 1.0)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn diverges<V: StyleValue>(&self, value: &V) -> bool {
        value
            .as_number()
            .is_some_and(|number| number > self.threshold)
    }
}

impl Default for DivergenceRule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

/// True if the range starts in the mobile group and reaches past the first
/// desktop breakpoint.
pub fn crosses_boundary<V>(range: &BreakpointRange<V>, table: &BreakpointTable) -> bool {
    table.is_mobile(range.from)
        && match range.until {
            None => true,
            Some(until) => table.is_desktop(until) && until != table.first_desktop(),
        }
}

/// Splits every range that crosses the mobile/desktop boundary while holding
/// a diverging value into `[from, first_desktop)` and `[first_desktop, until)`.
/// Both halves keep the same values.
pub fn split_boundary_crossings<V: StyleValue>(
    ranges: Vec<BreakpointRange<V>>,
    table: &BreakpointTable,
    rule: &DivergenceRule,
) -> Vec<BreakpointRange<V>> {
    let mut split = Vec::with_capacity(ranges.len() + 1);

    for range in ranges {
        let diverges = range.values.values().any(|value| rule.diverges(value));
        if !crosses_boundary(&range, table) || !diverges {
            split.push(range);
            continue;
        }

        let boundary = table.first_desktop();
        debug!(
            from = %range.from,
            until = ?range.until,
            at = %boundary,
            "splitting range at the desktop boundary"
        );

        split.push(BreakpointRange {
            from: range.from,
            until: Some(boundary),
            values: range.values.clone(),
        });
        split.push(BreakpointRange {
            from: boundary,
            until: range.until,
            values: range.values,
        });
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::{PropertyValues, Value},
        theme::{Breakpoint, BreakpointThresholds},
    };

    fn range(from: Breakpoint, until: Option<Breakpoint>, value: Value) -> BreakpointRange {
        let mut values = PropertyValues::new();
        values.insert("between".to_string(), value);

        BreakpointRange {
            from,
            until,
            values,
        }
    }

    #[test]
    fn test_divergence_rule() {
        let rule = DivergenceRule::default();

        assert!(!rule.diverges(&Value::from(2)));
        assert!(!rule.diverges(&Value::from(3)));
        assert!(rule.diverges(&Value::from(3.5)));
        assert!(rule.diverges(&Value::from(5)));
        assert!(!rule.diverges(&Value::from("8")));
        assert!(!rule.diverges(&Value::from(true)));
    }

    #[test]
    fn test_rule_for_spacing_scale() {
        let rule = DivergenceRule::for_spacing(&crate::theme::DEFAULT_THEME.spacing);
        assert_eq!(rule, DivergenceRule::default());
    }

    #[test]
    fn test_crosses_boundary() {
        let table = BreakpointTable::default();
        let value = Value::from(5);

        assert!(crosses_boundary(&range(Breakpoint::Xs, None, value.clone()), &table));
        assert!(crosses_boundary(
            &range(Breakpoint::Sm, Some(Breakpoint::Lg), value.clone()),
            &table
        ));
        assert!(!crosses_boundary(
            &range(Breakpoint::Xs, Some(Breakpoint::Md), value.clone()),
            &table
        ));
        assert!(!crosses_boundary(
            &range(Breakpoint::Xs, Some(Breakpoint::Sm), value.clone()),
            &table
        ));
        assert!(!crosses_boundary(&range(Breakpoint::Md, None, value), &table));
    }

    #[test]
    fn test_split_diverging_range() {
        let table = BreakpointTable::default();
        let ranges = vec![range(Breakpoint::Sm, Some(Breakpoint::Xl), Value::from(5))];

        let split = split_boundary_crossings(ranges, &table, &DivergenceRule::default());
        assert_eq!(
            split,
            vec![
                range(Breakpoint::Sm, Some(Breakpoint::Md), Value::from(5)),
                range(Breakpoint::Md, Some(Breakpoint::Xl), Value::from(5)),
            ]
        );
    }

    #[test]
    fn test_non_diverging_range_passes_through() {
        let table = BreakpointTable::default();
        let ranges = vec![
            range(Breakpoint::Xs, None, Value::from(2)),
            range(Breakpoint::Xs, None, Value::from("auto")),
        ];

        let split = split_boundary_crossings(ranges.clone(), &table, &DivergenceRule::default());
        assert_eq!(split, ranges);
    }

    #[test]
    fn test_split_follows_table_boundary() {
        let table = BreakpointTable::new(BreakpointThresholds::default(), Breakpoint::Lg).unwrap();
        let ranges = vec![range(Breakpoint::Xs, None, Value::from(4))];

        let split = split_boundary_crossings(ranges, &table, &DivergenceRule::default());
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].until, Some(Breakpoint::Lg));
        assert_eq!(split[1].from, Breakpoint::Lg);
    }

    #[test]
    fn test_custom_threshold() {
        let table = BreakpointTable::default();
        let ranges = vec![range(Breakpoint::Xs, None, Value::from(2))];

        let split = split_boundary_crossings(ranges, &table, &DivergenceRule::new(1.0));
        assert_eq!(split.len(), 2);
    }
}
