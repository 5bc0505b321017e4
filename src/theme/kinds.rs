#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

/// Named viewport-width tiers, ordered from narrowest to widest.
///
/// Use a [`BreakpointTable`](super::BreakpointTable) to get the pixel
/// threshold and group of a breakpoint.
#[derive(
    Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn index(&self) -> usize)]
pub enum Breakpoint {
    /// Narrowest tier. Has no lower bound.
    #[assoc(name = "xs")]
    #[assoc(index = 0)]
    Xs,
    /// Small tier.
    #[assoc(name = "sm")]
    #[assoc(index = 1)]
    Sm,
    /// Medium tier.
    #[assoc(name = "md")]
    #[assoc(index = 2)]
    Md,
    /// Large tier.
    #[assoc(name = "lg")]
    #[assoc(index = 3)]
    Lg,
    /// Widest tier. Has no upper bound.
    #[assoc(name = "xl")]
    #[assoc(index = 4)]
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Looks up a breakpoint by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|breakpoint| breakpoint.name() == name)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two contiguous groups breakpoints are partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointGroup {
    Mobile,
    Desktop,
}

impl fmt::Display for BreakpointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("mobile"),
            Self::Desktop => f.write_str("desktop"),
        }
    }
}
