//! Responsive style compiler.
//!
//! Turns a [`PropertyBag`] (property name to scalar or per-breakpoint value)
//! into a [`StyleSheet`] with one fragment per viewport range:
//!
//! 1. [`build_ranges`] merges every property into disjoint breakpoint ranges,
//!    inheriting values forward.
//! 2. [`split_boundary_crossings`] splits ranges that cross into the desktop
//!    group while holding a value that renders differently there.
//! 3. [`emit`] calls the caller's `to_style` once per range and keys each
//!    fragment by its [`MediaQuery`] condition.
//!
//! [`StyleCompiler`] runs all three.

mod value;
pub use value::*;

mod property;
pub use property::*;

mod media;
pub use media::*;

mod range;
pub use range::*;

mod split;
pub use split::*;

mod sheet;
pub use sheet::*;

mod compiler;
pub use compiler::*;
