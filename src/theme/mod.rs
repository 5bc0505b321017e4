//! Theme system providing breakpoints and the spacing scale.
//!
//! A theme carries the [`BreakpointTable`] the style compiler is driven by,
//! and the per-group spacing values responsive components resolve levels
//! against.

mod schema;
pub use schema::*;

mod deserializers;

mod kinds;
pub use kinds::*;
