use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

use crate::{
    style::{BreakpointRange, ConditionKey, MediaQuery, PropertyValues},
    theme::{Breakpoint, BreakpointTable},
};

/// Style declarations produced for one range, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleFragment(IndexMap<String, serde_json::Value>);

impl StyleFragment {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.0.insert(property.into(), value.into())
    }

    pub fn get(&self, property: &str) -> Option<&serde_json::Value> {
        self.0.get(property)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(property, value)| (property.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow merge: declarations in `other` replace ones with the same name.
    pub fn merge(&mut self, other: StyleFragment) {
        self.0.extend(other.0);
    }
}

impl<K: Into<String>, V: Into<serde_json::Value>> FromIterator<(K, V)> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(property, value)| (property.into(), value.into()))
                .collect(),
        )
    }
}

/// Compiled output: style fragments keyed by the condition they apply under.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleSheet(IndexMap<ConditionKey, StyleFragment>);

impl StyleSheet {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Shallow-merges `fragment` into whatever is already stored under `key`.
    pub fn merge_fragment(&mut self, key: ConditionKey, fragment: StyleFragment) {
        self.0.entry(key).or_default().merge(fragment);
    }

    pub fn get(&self, key: &ConditionKey) -> Option<&StyleFragment> {
        self.0.get(key)
    }

    /// The fragment applied at every width, if there is one.
    pub fn unconditional(&self) -> Option<&StyleFragment> {
        self.0.get(&ConditionKey::Always)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ConditionKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConditionKey, &StyleFragment)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders the sheet as CSS for `selector`. Media blocks keep the order
    /// they were emitted in, so wider ranges come later and win.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();

        for (key, fragment) in self.iter() {
            if fragment.is_empty() {
                continue;
            }

            match key {
                ConditionKey::Always => emit_rule(selector, fragment, "", &mut out),
                ConditionKey::Media(query) => {
                    out.push_str(query);
                    out.push_str(" {\n");
                    emit_rule(selector, fragment, "    ", &mut out);
                    out.push_str("}\n");
                }
            }
        }

        out
    }
}

fn emit_rule(selector: &str, fragment: &StyleFragment, indent: &str, out: &mut String) {
    out.push_str(indent);
    out.push_str(selector);
    out.push_str(" {\n");

    for (property, value) in fragment.iter() {
        out.push_str(indent);
        out.push_str("    ");
        out.push_str(property);
        out.push_str(": ");
        match value {
            serde_json::Value::String(text) => out.push_str(text),
            value => out.push_str(&value.to_string()),
        }
        out.push_str(";\n");
    }

    out.push_str(indent);
    out.push_str("}\n");
}

/// Calls `to_style` once per range, in order, and merges each fragment under
/// the range's condition key. The first error from `to_style` is returned
/// as is.
pub fn emit<V, E, F>(
    ranges: &[BreakpointRange<V>],
    table: &BreakpointTable,
    extra_condition: Option<&str>,
    mut to_style: F,
) -> Result<StyleSheet, E>
where
    F: FnMut(&PropertyValues<V>, Breakpoint, Option<Breakpoint>) -> Result<StyleFragment, E>,
{
    let mut sheet = StyleSheet::new();

    for range in ranges {
        let key = MediaQuery::new(table)
            .from(range.from)
            .until(range.until)
            .and(extra_condition)
            .build();

        trace!(from = %range.from, until = ?range.until, key = %key, "emitting range");

        let fragment = to_style(&range.values, range.from, range.until)?;
        sheet.merge_fragment(key, fragment);
    }

    Ok(sheet)
}
