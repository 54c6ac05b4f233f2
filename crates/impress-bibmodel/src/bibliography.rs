//! The bibliography aggregate: entries, preambles, and `@string` variables

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::FormatConfig;
use crate::entry::Entry;
use crate::error::Result;
use crate::formatter::{self, OutputFormat};
use crate::macros;
use crate::value::StringValue;
use crate::variable::{VariableDefinition, VariableTable};

/// A BibTeX database
///
/// Entries and preambles render in the order they were added; variables in
/// the order their keys were first defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bibliography {
    preambles: Vec<StringValue>,
    entries: Vec<Entry>,
    variables: VariableTable,
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_preamble(&mut self, value: StringValue) {
        self.preambles.push(value);
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Define or redefine the `@string` variable `key`
    pub fn define_variable(&mut self, key: impl Into<String>, value: StringValue) {
        self.variables.define(key, value);
    }

    /// Register the standard month strings `jan` through `dec`
    pub fn define_month_macros(&mut self) {
        for (key, month) in macros::month_macros() {
            self.variables.define(key, StringValue::constant(month));
        }
    }

    /// Look up a variable definition
    ///
    /// Returns [`crate::BibError::UndefinedVariable`] for unknown keys.
    pub fn lookup_variable(&self, key: &str) -> Result<&VariableDefinition> {
        self.variables.lookup(key)
    }

    /// Resolve a value against this bibliography's variables
    pub fn resolve(&self, value: &StringValue) -> Result<String> {
        value.resolve(&self.variables)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Find an entry by cite key (first match)
    pub fn entry(&self, cite_key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.cite_key() == cite_key)
    }

    pub fn preambles(&self) -> &[StringValue] {
        &self.preambles
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Keys referenced anywhere in the database that have no definition
    ///
    /// Sorted and de-duplicated. Rendering fails if this is non-empty and a
    /// rendered value reaches one of these keys.
    pub fn undefined_variables(&self) -> Vec<String> {
        let field_values = self
            .entries
            .iter()
            .flat_map(|entry| entry.fields().map(|(_, value)| value));
        let definition_values = self.variables.iter().map(|d| d.value());

        field_values
            .chain(self.preambles.iter())
            .chain(definition_values)
            .flat_map(|value| value.variable_refs())
            .filter(|key| !self.variables.contains(key))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Simplified output: resolved values, integers bare, strings in braces
    pub fn render_simplified(&self) -> Result<String> {
        self.render_with(OutputFormat::Simplified, &FormatConfig::default())
    }

    /// Raw output: `@string` and `@preamble` blocks, then entries with raw values
    pub fn render_raw(&self) -> Result<String> {
        self.render_with(OutputFormat::Raw, &FormatConfig::default())
    }

    /// Pretty output: aligned field names and quote-style selection
    pub fn render_pretty(&self) -> Result<String> {
        self.render_with(OutputFormat::Pretty, &FormatConfig::default())
    }

    pub fn render_with(&self, format: OutputFormat, config: &FormatConfig) -> Result<String> {
        formatter::render(self, format, config)
    }
}
