use thiserror::Error;

use crate::theme::Breakpoint;

/// Errors raised while building a theme or its breakpoint table.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A breakpoint's threshold is not above the one before it.
    #[error(
        "breakpoint `{breakpoint}` ({pixels}px) must be wider than `{previous}` ({previous_pixels}px)."
    )]
    NonMonotonicThreshold {
        breakpoint: Breakpoint,
        pixels: u32,
        previous: Breakpoint,
        previous_pixels: u32,
    },

    /// The desktop group would swallow every breakpoint.
    #[error("`{0}` can't start the desktop group, the mobile group would be empty.")]
    EmptyMobileGroup(Breakpoint),

    /// The theme source is not valid JSON or doesn't match the schema.
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}
