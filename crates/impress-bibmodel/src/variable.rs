//! `@string` variable definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{BibError, Result};
use crate::value::StringValue;

/// A named `@string` binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    key: String,
    value: StringValue,
}

impl VariableDefinition {
    pub fn new(key: impl Into<String>, value: StringValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &StringValue {
        &self.value
    }

    /// Raw text of the bound value
    pub fn raw_text(&self) -> String {
        self.value.raw_text()
    }

    /// Resolved text of the bound value
    pub fn resolve(&self, variables: &VariableTable) -> Result<String> {
        self.value.resolve(variables)
    }
}

/// Variable definitions keyed by name, kept in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, StringValue>",
    into = "IndexMap<String, StringValue>"
)]
pub struct VariableTable {
    definitions: IndexMap<String, VariableDefinition>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `value`, replacing any earlier binding
    ///
    /// A redefined key keeps its original position. Returns the replaced
    /// definition, if any.
    pub fn define(
        &mut self,
        key: impl Into<String>,
        value: StringValue,
    ) -> Option<VariableDefinition> {
        let key = key.into();
        let previous = self
            .definitions
            .insert(key.clone(), VariableDefinition::new(key.clone(), value));
        if previous.is_some() {
            tracing::trace!(key = %key, "string variable redefined");
        }
        previous
    }

    /// Look up a definition, failing with [`BibError::UndefinedVariable`]
    pub fn lookup(&self, key: &str) -> Result<&VariableDefinition> {
        self.definitions
            .get(key)
            .ok_or_else(|| BibError::UndefinedVariable {
                key: key.to_string(),
            })
    }

    pub fn get(&self, key: &str) -> Option<&VariableDefinition> {
        self.definitions.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.definitions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Definitions in the order their keys were first defined
    pub fn iter(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.definitions.values()
    }
}

impl From<IndexMap<String, StringValue>> for VariableTable {
    fn from(map: IndexMap<String, StringValue>) -> Self {
        let mut table = Self::new();
        for (key, value) in map {
            table.define(key, value);
        }
        table
    }
}

impl From<VariableTable> for IndexMap<String, StringValue> {
    fn from(table: VariableTable) -> Self {
        table
            .definitions
            .into_iter()
            .map(|(key, definition)| (key, definition.value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_lookup() {
        let mut vars = VariableTable::new();
        assert!(vars.define("apj", StringValue::constant("Astrophysical Journal")).is_none());

        let definition = vars.lookup("apj").unwrap();
        assert_eq!(definition.key(), "apj");
        assert_eq!(definition.raw_text(), "{Astrophysical Journal}");
        assert_eq!(definition.resolve(&vars).unwrap(), "Astrophysical Journal");
    }

    #[test]
    fn test_lookup_missing_key() {
        let vars = VariableTable::new();
        assert_eq!(
            vars.lookup("mnras").unwrap_err(),
            BibError::UndefinedVariable {
                key: "mnras".to_string()
            }
        );
        assert!(vars.get("mnras").is_none());
    }

    #[test]
    fn test_redefinition_last_write_wins() {
        let mut vars = VariableTable::new();
        vars.define("a", StringValue::constant("first"));
        vars.define("b", StringValue::constant("other"));
        let previous = vars.define("a", StringValue::constant("second"));

        assert_eq!(previous.unwrap().value(), &StringValue::constant("first"));
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.lookup("a").unwrap().resolve(&vars).unwrap(), "second");
        let keys: Vec<_> = vars.iter().map(|d| d.key()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_reference_sees_current_binding() {
        let mut vars = VariableTable::new();
        let reference = StringValue::variable("month");
        vars.define("month", StringValue::constant("jan"));
        assert_eq!(reference.resolve(&vars).unwrap(), "jan");
        vars.define("month", StringValue::constant("feb"));
        assert_eq!(reference.resolve(&vars).unwrap(), "feb");
    }

    #[test]
    fn test_serde_as_object() {
        let mut vars = VariableTable::new();
        vars.define("z", StringValue::constant("last"));
        vars.define("a", StringValue::variable("z"));

        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r#"{"z":{"constant":"last"},"a":{"variable":"z"}}"#);
        let back: VariableTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vars);
    }
}
