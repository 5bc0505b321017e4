use std::convert::Infallible;

use tracing::{debug, instrument};

use crate::{
    style::{
        BreakpointRange, DivergenceRule, PropertyBag, PropertyValues, StyleFragment, StyleSheet,
        StyleValue, build_ranges, emit, split_boundary_crossings,
    },
    theme::{Breakpoint, BreakpointTable, DEFAULT_THEME},
};

/// Compiles property bags into style sheets against one breakpoint table.
///
/// The compiler holds only configuration, so one instance can be reused for
/// any number of bags, including from inside a `to_style` callback.
#[derive(Debug, Clone, Copy)]
pub struct StyleCompiler<'a> {
    table: &'a BreakpointTable,
    divergence: DivergenceRule,
    condition: Option<&'a str>,
}

impl<'a> StyleCompiler<'a> {
    pub fn new(table: &'a BreakpointTable) -> Self {
        Self {
            table,
            divergence: DivergenceRule::default(),
            condition: None,
        }
    }

    pub fn with_divergence(mut self, divergence: DivergenceRule) -> Self {
        self.divergence = divergence;
        self
    }

    /// Conjoins `condition` with the width condition of every emitted block.
    pub fn with_condition(mut self, condition: &'a str) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn table(&self) -> &'a BreakpointTable {
        self.table
    }

    pub fn divergence(&self) -> DivergenceRule {
        self.divergence
    }

    /// The final ranges `compile` hands to `to_style`, after boundary splits.
    pub fn ranges<V: StyleValue>(&self, bag: &PropertyBag<V>) -> Vec<BreakpointRange<V>> {
        let ranges = build_ranges(bag, self.table);
        split_boundary_crossings(ranges, self.table, &self.divergence)
    }

    #[instrument(skip_all, fields(properties = bag.len()))]
    pub fn compile<V, E, F>(&self, bag: &PropertyBag<V>, to_style: F) -> Result<StyleSheet, E>
    where
        V: StyleValue,
        F: FnMut(&PropertyValues<V>, Breakpoint, Option<Breakpoint>) -> Result<StyleFragment, E>,
    {
        let ranges = self.ranges(bag);
        debug!(ranges = ranges.len(), "compiling property bag");

        emit(&ranges, self.table, self.condition, to_style)
    }

    pub fn compile_infallible<V, F>(&self, bag: &PropertyBag<V>, mut to_style: F) -> StyleSheet
    where
        V: StyleValue,
        F: FnMut(&PropertyValues<V>, Breakpoint, Option<Breakpoint>) -> StyleFragment,
    {
        let result = self.compile(bag, |values, from, until| {
            Ok::<_, Infallible>(to_style(values, from, until))
        });

        match result {
            Ok(sheet) => sheet,
            Err(never) => match never {},
        }
    }
}

impl Default for StyleCompiler<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_THEME.breakpoints)
    }
}

/// Compiles `bag` with the builtin theme's breakpoints and the default
/// divergence rule.
pub fn compile<V, E, F>(bag: &PropertyBag<V>, to_style: F) -> Result<StyleSheet, E>
where
    V: StyleValue,
    F: FnMut(&PropertyValues<V>, Breakpoint, Option<Breakpoint>) -> Result<StyleFragment, E>,
{
    StyleCompiler::default().compile(bag, to_style)
}

/// [`compile`] for a `to_style` that can't fail.
pub fn compile_infallible<V, F>(bag: &PropertyBag<V>, to_style: F) -> StyleSheet
where
    V: StyleValue,
    F: FnMut(&PropertyValues<V>, Breakpoint, Option<Breakpoint>) -> StyleFragment,
{
    StyleCompiler::default().compile_infallible(bag, to_style)
}
