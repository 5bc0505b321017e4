use std::fmt;

use serde::{Serialize, Serializer};

use crate::theme::{Breakpoint, BreakpointTable};

/// Key a style fragment is emitted under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConditionKey {
    /// Applies at every viewport width, without a wrapping condition.
    Always,
    /// A full `@media ...` condition.
    Media(String),
}

impl ConditionKey {
    /// Text the unconditional key serializes to.
    pub const ALWAYS: &'static str = "*";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Always => Self::ALWAYS,
            Self::Media(query) => query,
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ConditionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Builds the condition for a half-open range of breakpoints.
///
/// Every method returns a new builder, so a builder can be shared and
/// extended freely.
#[derive(Debug, Clone, Copy)]
pub struct MediaQuery<'a> {
    table: &'a BreakpointTable,
    from: Option<Breakpoint>,
    until: Option<Breakpoint>,
    extra: Option<&'a str>,
}

impl<'a> MediaQuery<'a> {
    pub fn new(table: &'a BreakpointTable) -> Self {
        Self {
            table,
            from: None,
            until: None,
            extra: None,
        }
    }

    /// Inclusive lower breakpoint.
    pub fn from(self, from: impl Into<Option<Breakpoint>>) -> Self {
        Self {
            from: from.into(),
            ..self
        }
    }

    /// Exclusive upper breakpoint.
    pub fn until(self, until: impl Into<Option<Breakpoint>>) -> Self {
        Self {
            until: until.into(),
            ..self
        }
    }

    /// Conjoins a raw condition fragment such as `(orientation: landscape)`.
    pub fn and(self, extra: impl Into<Option<&'a str>>) -> Self {
        Self {
            extra: extra.into().filter(|extra| !extra.trim().is_empty()),
            ..self
        }
    }

    pub fn min_width(&self) -> Option<u32> {
        self.from
            .filter(|from| *from != self.table.first())
            .map(|from| self.table.pixel_threshold(from))
    }

    pub fn max_width(&self) -> Option<u32> {
        self.until
            .filter(|until| *until != self.table.last())
            .map(|until| self.table.pixel_threshold(until).saturating_sub(1))
    }

    pub fn build(&self) -> ConditionKey {
        let mut clauses = Vec::with_capacity(3);

        if let Some(min_width) = self.min_width() {
            clauses.push(format!("(min-width: {min_width}px)"));
        }
        if let Some(max_width) = self.max_width() {
            clauses.push(format!("(max-width: {max_width}px)"));
        }
        if let Some(extra) = self.extra {
            clauses.push(extra.trim().to_string());
        }

        if clauses.is_empty() {
            ConditionKey::Always
        } else {
            ConditionKey::Media(format!("@media {}", clauses.join(" and ")))
        }
    }
}

/// Shorthand for `MediaQuery::new(table).from(from).until(until).build()`.
pub fn condition(
    table: &BreakpointTable,
    from: impl Into<Option<Breakpoint>>,
    until: impl Into<Option<Breakpoint>>,
) -> ConditionKey {
    MediaQuery::new(table).from(from).until(until).build()
}
