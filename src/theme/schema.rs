use std::{ops::Deref, sync::LazyLock};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{
    Breakpoint, BreakpointGroup,
    deserializers::{de_pixel_list, de_pixels},
};
use crate::ThemeError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub breakpoints: BreakpointTable,
    pub spacing: SpacingScale,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path))
                    .expect(concat!("builtin theme `", $path, "` is invalid"))
            });
        )+
    };
}

generate_builtin_themes!(["../../themes/default.json", DEFAULT_THEME]);

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }
}

/// Pixel thresholds of every breakpoint above the smallest one, whose
/// threshold is always zero.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointThresholds {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: u32,
    #[serde(deserialize_with = "de_pixels")]
    pub md: u32,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: u32,
    #[serde(deserialize_with = "de_pixels")]
    pub xl: u32,
}

impl BreakpointThresholds {
    pub fn get(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

impl Default for BreakpointThresholds {
    fn default() -> Self {
        Self {
            sm: 576,
            md: 768,
            lg: 992,
            xl: 1200,
        }
    }
}

/// Ordered breakpoints with their pixel thresholds and the partition into
/// a mobile group and a desktop group.
///
/// The table is always valid: thresholds increase strictly and both groups
/// hold at least one breakpoint.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "BreakpointTableSchema", into = "BreakpointTableSchema")]
pub struct BreakpointTable {
    thresholds: BreakpointThresholds,
    first_desktop: Breakpoint,
}

impl BreakpointTable {
    pub fn new(
        thresholds: BreakpointThresholds,
        first_desktop: Breakpoint,
    ) -> Result<Self, ThemeError> {
        if first_desktop == Breakpoint::Xs {
            return Err(ThemeError::EmptyMobileGroup(first_desktop));
        }

        for pair in Breakpoint::ALL.windows(2) {
            let (previous, breakpoint) = (pair[0], pair[1]);
            let previous_pixels = thresholds.get(previous);
            let pixels = thresholds.get(breakpoint);

            if pixels <= previous_pixels {
                return Err(ThemeError::NonMonotonicThreshold {
                    breakpoint,
                    pixels,
                    previous,
                    previous_pixels,
                });
            }
        }

        Ok(Self {
            thresholds,
            first_desktop,
        })
    }

    pub fn thresholds(&self) -> &BreakpointThresholds {
        &self.thresholds
    }

    /// Position of `breakpoint` in ascending order, used for sorting.
    pub fn index_of(&self, breakpoint: Breakpoint) -> usize {
        breakpoint.index()
    }

    pub fn pixel_threshold(&self, breakpoint: Breakpoint) -> u32 {
        self.thresholds.get(breakpoint)
    }

    pub fn group(&self, breakpoint: Breakpoint) -> BreakpointGroup {
        if breakpoint < self.first_desktop {
            BreakpointGroup::Mobile
        } else {
            BreakpointGroup::Desktop
        }
    }

    pub fn is_mobile(&self, breakpoint: Breakpoint) -> bool {
        self.group(breakpoint) == BreakpointGroup::Mobile
    }

    pub fn is_desktop(&self, breakpoint: Breakpoint) -> bool {
        self.group(breakpoint) == BreakpointGroup::Desktop
    }

    pub fn first(&self) -> Breakpoint {
        Breakpoint::Xs
    }

    pub fn last(&self) -> Breakpoint {
        Breakpoint::Xl
    }

    /// The breakpoint where the desktop group starts.
    pub fn first_desktop(&self) -> Breakpoint {
        self.first_desktop
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            thresholds: BreakpointThresholds::default(),
            first_desktop: Breakpoint::Md,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct BreakpointTableSchema {
    thresholds: BreakpointThresholds,
    #[serde(default = "default_first_desktop")]
    first_desktop: Breakpoint,
}

fn default_first_desktop() -> Breakpoint {
    Breakpoint::Md
}

impl TryFrom<BreakpointTableSchema> for BreakpointTable {
    type Error = ThemeError;

    fn try_from(schema: BreakpointTableSchema) -> Result<Self, Self::Error> {
        Self::new(schema.thresholds, schema.first_desktop)
    }
}

impl From<BreakpointTable> for BreakpointTableSchema {
    fn from(table: BreakpointTable) -> Self {
        Self {
            thresholds: table.thresholds,
            first_desktop: table.first_desktop,
        }
    }
}

/// Pixel values of each spacing level, one list per breakpoint group.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpacingScale {
    #[serde(deserialize_with = "de_pixel_list")]
    pub mobile: SmallVec<[u32; 8]>,
    #[serde(deserialize_with = "de_pixel_list")]
    pub desktop: SmallVec<[u32; 8]>,
}

impl SpacingScale {
    pub fn resolve(&self, level: usize, group: BreakpointGroup) -> Option<u32> {
        match group {
            BreakpointGroup::Mobile => self.mobile.get(level).copied(),
            BreakpointGroup::Desktop => self.desktop.get(level).copied(),
        }
    }

    /// Number of leading levels that render the same in both groups.
    pub fn shared_levels(&self) -> usize {
        self.mobile
            .iter()
            .zip(self.desktop.iter())
            .take_while(|(mobile, desktop)| mobile == desktop)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses() {
        let theme: &Theme = &DEFAULT_THEME;
        assert!(!theme.name.is_empty(), "Theme should have a name");
        assert_eq!(theme.breakpoints, BreakpointTable::default());
    }

    #[test]
    fn test_default_groups() {
        let table = BreakpointTable::default();

        assert!(table.is_mobile(Breakpoint::Xs));
        assert!(table.is_mobile(Breakpoint::Sm));
        assert!(table.is_desktop(Breakpoint::Md));
        assert!(table.is_desktop(Breakpoint::Lg));
        assert!(table.is_desktop(Breakpoint::Xl));
        assert_eq!(table.first_desktop(), Breakpoint::Md);
    }

    #[test]
    fn test_threshold_ordering() {
        let table = BreakpointTable::default();

        assert_eq!(table.pixel_threshold(Breakpoint::Xs), 0);
        for pair in Breakpoint::ALL.windows(2) {
            assert!(
                table.pixel_threshold(pair[0]) < table.pixel_threshold(pair[1]),
                "{} should be narrower than {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_rejects_non_monotonic_thresholds() {
        let thresholds = BreakpointThresholds {
            sm: 600,
            md: 500,
            lg: 992,
            xl: 1200,
        };

        let err = BreakpointTable::new(thresholds, Breakpoint::Md).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::NonMonotonicThreshold {
                breakpoint: Breakpoint::Md,
                previous: Breakpoint::Sm,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_sm_threshold() {
        let thresholds = BreakpointThresholds {
            sm: 0,
            ..BreakpointThresholds::default()
        };

        assert!(BreakpointTable::new(thresholds, Breakpoint::Md).is_err());
    }

    #[test]
    fn test_rejects_empty_mobile_group() {
        let err = BreakpointTable::new(BreakpointThresholds::default(), Breakpoint::Xs).unwrap_err();
        assert!(matches!(err, ThemeError::EmptyMobileGroup(Breakpoint::Xs)));
    }

    #[test]
    fn test_table_from_json() {
        let table: BreakpointTable = serde_json::from_str(
            r#"{"thresholds": {"sm": "480px", "md": 640, "lg": "1024px", "xl": 1440}, "first_desktop": "lg"}"#,
        )
        .unwrap();

        assert_eq!(table.pixel_threshold(Breakpoint::Md), 640);
        assert_eq!(table.first_desktop(), Breakpoint::Lg);
        assert!(table.is_mobile(Breakpoint::Md));
    }

    #[test]
    fn test_invalid_table_json_is_rejected() {
        let result = serde_json::from_str::<BreakpointTable>(
            r#"{"thresholds": {"sm": 900, "md": 768, "lg": 992, "xl": 1200}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_theme_from_string_reports_parse_errors() {
        let err = Theme::from_string("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_spacing_scale() {
        let spacing = &DEFAULT_THEME.spacing;

        assert_eq!(spacing.shared_levels(), 4);
        assert_eq!(spacing.resolve(2, BreakpointGroup::Mobile), Some(8));
        assert_eq!(spacing.resolve(2, BreakpointGroup::Desktop), Some(8));
        assert_ne!(
            spacing.resolve(4, BreakpointGroup::Mobile),
            spacing.resolve(4, BreakpointGroup::Desktop)
        );
        assert_eq!(spacing.resolve(64, BreakpointGroup::Mobile), None);
    }
}
