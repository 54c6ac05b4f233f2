//! BibTeX bibliography model and formatting
//!
//! This crate models a BibTeX database (entries, `@preamble`s, and `@string`
//! variables) whose field values keep their original structure: constants,
//! variable references, and `#` concatenations. The model renders back to
//! BibTeX text in three layouts.
//!
//! Features:
//! - Lossless field values with resolved and raw projections
//! - Recoverable errors for undefined and self-referential variables
//! - Simplified, raw, and pretty-printed output
//! - Insertion-ordered entries, fields, and variables
//! - JSON document form and TOML render configuration
//!
//! ```
//! use impress_bibmodel::{Bibliography, Entry, StringValue};
//!
//! let mut bib = Bibliography::new();
//! bib.define_variable("month", StringValue::constant("jan"));
//! bib.add_entry(
//!     Entry::new("article", "doe2020")
//!         .with_field("month", StringValue::variable("month")),
//! );
//!
//! assert_eq!(bib.render_simplified()?, "@article{doe2020,\n  month = {jan}\n}\n");
//! assert!(bib.render_raw()?.contains("  month = month\n"));
//! # Ok::<(), impress_bibmodel::BibError>(())
//! ```

mod bibliography;
mod config;
mod entry;
mod error;
mod formatter;
mod macros;
mod value;
mod variable;

pub use bibliography::Bibliography;
pub use config::FormatConfig;
pub use entry::Entry;
pub use error::{BibError, ConfigError, Result};
pub use formatter::{integer_literal, render, OutputFormat};
pub use value::{StringValue, CONCAT_OPERATOR};
pub use variable::{VariableDefinition, VariableTable};

pub use macros::month_macros;
