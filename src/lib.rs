pub mod style;

pub mod theme;

mod error;
pub use error::*;

pub use style::{
    BreakpointRange, ConditionKey, DivergenceRule, IntoPropertyBag, IntoPropertySpec, MediaQuery,
    PropertyBag, PropertySpec, PropertyValues, Responsive, StyleCompiler, StyleFragment,
    StyleSheet, StyleValue, Value, compile, compile_infallible,
};
pub use theme::{Breakpoint, BreakpointGroup, BreakpointTable, DEFAULT_THEME, Theme};

#[cfg(feature = "derive")]
pub use tesserae_responsive_macros::IntoPropertyBag;
