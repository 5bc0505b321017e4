use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::{
    style::{PropertyBag, PropertySpec, Value},
    theme::{Breakpoint, BreakpointTable},
};

/// Values in effect over a range, keyed by property name.
pub type PropertyValues<V = Value> = IndexMap<String, V>;

/// A half-open span of breakpoints `[from, until)` sharing one resolved set
/// of values. `until: None` means the range is unbounded above.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointRange<V = Value> {
    pub from: Breakpoint,
    pub until: Option<Breakpoint>,
    pub values: PropertyValues<V>,
}

/// Merges every property of `bag` into one ascending timeline of disjoint
/// ranges, one per breakpoint the bag references.
///
/// Values carry forward into later ranges until a later breakpoint sets them
/// again. Static values live in every range; when nothing in the bag is
/// responsive they get a single range starting at the smallest breakpoint.
pub fn build_ranges<V: Clone>(
    bag: &PropertyBag<V>,
    table: &BreakpointTable,
) -> Vec<BreakpointRange<V>> {
    let mut breakpoints: SmallVec<[Breakpoint; 5]> = bag
        .iter()
        .filter_map(|(_, spec)| match spec {
            PropertySpec::Responsive(responsive) => Some(responsive.breakpoints()),
            PropertySpec::Scalar(_) => None,
        })
        .flatten()
        .collect();

    breakpoints.sort_unstable_by_key(|breakpoint| table.index_of(*breakpoint));
    breakpoints.dedup();

    if breakpoints.is_empty() {
        breakpoints.push(table.first());
    }

    let mut ranges: Vec<BreakpointRange<V>> = Vec::with_capacity(breakpoints.len());

    for (i, breakpoint) in breakpoints.iter().enumerate() {
        let mut values = match ranges.last() {
            Some(previous) => previous.values.clone(),
            None => PropertyValues::new(),
        };

        for (name, spec) in bag.iter() {
            if let Some(value) = spec.value_at(*breakpoint) {
                values.insert(name.to_string(), value.clone());
            }
        }

        ranges.push(BreakpointRange {
            from: *breakpoint,
            until: breakpoints.get(i + 1).copied(),
            values,
        });
    }

    ranges.retain(|range| !range.values.is_empty());
    ranges
}
