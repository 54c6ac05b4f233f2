//! BibTeX field values
//!
//! A field value is a constant, a reference to an `@string` variable, or a
//! concatenation of those (`"a" # var # {b}` in BibTeX source). Every value has
//! two projections:
//!
//! - the **resolved** text, with variables substituted, which is what readers see
//! - the **raw** text, which reproduces the value's structure for a BibTeX parser:
//!   constants in braces, variables bare, parts joined by ` # `

use serde::{Deserialize, Serialize};

use crate::error::{BibError, Result};
use crate::variable::VariableTable;

/// BibTeX concatenation operator as written between raw parts
pub const CONCAT_OPERATOR: &str = " # ";

/// A BibTeX field, preamble, or `@string` value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringValue {
    /// Literal text
    Constant(String),
    /// Reference to a string variable by key
    Variable(String),
    /// Concatenation of parts, left to right
    Composite(Vec<StringValue>),
}

impl StringValue {
    /// Create a literal value
    pub fn constant(text: impl Into<String>) -> Self {
        Self::Constant(text.into())
    }

    /// Create a reference to the string variable `key`
    ///
    /// The key is looked up in the variable table each time the value is
    /// resolved, so redefining the variable changes what this value resolves to.
    pub fn variable(key: impl Into<String>) -> Self {
        Self::Variable(key.into())
    }

    /// Create a composite holding a single part
    pub fn composite(first: StringValue) -> Self {
        Self::Composite(vec![first])
    }

    /// Create a composite from parts in order
    pub fn concat(parts: impl IntoIterator<Item = StringValue>) -> Self {
        Self::Composite(parts.into_iter().collect())
    }

    /// Return a composite with `part` appended, leaving `self` untouched
    ///
    /// Appending to a constant or variable yields a two-part composite.
    pub fn append(&self, part: StringValue) -> Self {
        match self {
            Self::Composite(parts) => {
                let mut parts = parts.clone();
                parts.push(part);
                Self::Composite(parts)
            }
            other => Self::Composite(vec![other.clone(), part]),
        }
    }

    /// The parts of a composite, or the value itself as a single part
    pub fn parts(&self) -> &[StringValue] {
        match self {
            Self::Composite(parts) => parts,
            other => std::slice::from_ref(other),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Composite(_))
    }

    /// Raw BibTeX text: `{text}` for constants, the bare key for variables,
    /// and parts joined by ` # ` for composites
    pub fn raw_text(&self) -> String {
        let mut out = String::new();
        self.write_raw(&mut out);
        out
    }

    fn write_raw(&self, out: &mut String) {
        match self {
            Self::Constant(text) => {
                out.push('{');
                out.push_str(text);
                out.push('}');
            }
            Self::Variable(key) => out.push_str(key),
            Self::Composite(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push_str(CONCAT_OPERATOR);
                    }
                    part.write_raw(out);
                }
            }
        }
    }

    /// Resolved text, expanding variables through `variables`
    ///
    /// Fails with [`BibError::UndefinedVariable`] when a referenced key has no
    /// definition and with [`BibError::CyclicVariable`] when a variable expands
    /// back into itself.
    pub fn resolve(&self, variables: &VariableTable) -> Result<String> {
        let mut out = String::new();
        let mut expanding = Vec::new();
        self.resolve_into(variables, &mut out, &mut expanding)?;
        Ok(out)
    }

    fn resolve_into(
        &self,
        variables: &VariableTable,
        out: &mut String,
        expanding: &mut Vec<String>,
    ) -> Result<()> {
        match self {
            Self::Constant(text) => out.push_str(text),
            Self::Variable(key) => {
                if expanding.iter().any(|k| k == key) {
                    return Err(BibError::CyclicVariable { key: key.clone() });
                }
                let definition = variables.lookup(key)?;
                expanding.push(key.clone());
                definition.value().resolve_into(variables, out, expanding)?;
                expanding.pop();
            }
            Self::Composite(parts) => {
                for part in parts {
                    part.resolve_into(variables, out, expanding)?;
                }
            }
        }
        Ok(())
    }

    /// Every variable key this value mentions, depth-first, left to right
    pub fn variable_refs(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_refs(&mut keys);
        keys
    }

    fn collect_refs<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(key) => keys.push(key),
            Self::Composite(parts) => parts.iter().for_each(|p| p.collect_refs(keys)),
        }
    }
}

impl From<&str> for StringValue {
    fn from(text: &str) -> Self {
        Self::constant(text)
    }
}

impl From<String> for StringValue {
    fn from(text: String) -> Self {
        Self::Constant(text)
    }
}
