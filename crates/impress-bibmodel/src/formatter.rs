//! BibTeX formatting module
//!
//! Renders a [`Bibliography`] in one of three layouts:
//!
//! - **simplified**: resolved field text, integers bare, everything else in braces
//! - **raw**: `@string` and `@preamble` blocks followed by entries whose fields
//!   keep their variable references and ` # ` concatenations
//! - **pretty**: resolved text with aligned `=` signs and quote-style selection

use std::fmt;
use std::str::FromStr;

use crate::bibliography::Bibliography;
use crate::config::FormatConfig;
use crate::entry::Entry;
use crate::error::Result;

/// Characters that force brace quoting in pretty output
const BRACE_QUOTE_TRIGGERS: &[char] = &['"', '{', '}'];

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Simplified,
    Raw,
    Pretty,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simplified => "simplified",
            Self::Raw => "raw",
            Self::Pretty => "pretty",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simplified" | "simple" => Ok(Self::Simplified),
            "raw" => Ok(Self::Raw),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!(
                "unknown output format '{other}' (expected simplified, raw, or pretty)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a bibliography in the given layout
///
/// Fails on the first field, preamble, or definition that references an
/// undefined or self-referential variable. The bibliography is never modified.
pub fn render(bib: &Bibliography, format: OutputFormat, config: &FormatConfig) -> Result<String> {
    let output = match format {
        OutputFormat::Simplified => render_simplified(bib, config),
        OutputFormat::Raw => render_raw(bib, config),
        OutputFormat::Pretty => render_pretty(bib, config),
    }?;

    tracing::debug!(
        format = %format,
        entries = bib.entries().len(),
        bytes = output.len(),
        "rendered bibliography"
    );
    Ok(output)
}

/// Parse resolved field text as a base-10 integer, ignoring surrounding whitespace
pub fn integer_literal(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

fn render_simplified(bib: &Bibliography, config: &FormatConfig) -> Result<String> {
    let mut result = String::new();

    for (i, entry) in bib.entries().iter().enumerate() {
        if i > 0 && config.blank_line_between_entries {
            result.push('\n');
        }

        let mut lines = Vec::with_capacity(entry.len());
        for (name, value) in entry.fields() {
            let resolved = bib.resolve(value)?;
            let formatted = match integer_literal(&resolved) {
                Some(number) => number.to_string(),
                None => braced(resolved.trim()),
            };
            lines.push(field_line(config, name, &formatted));
        }
        write_entry(&mut result, entry, &lines);
    }

    Ok(result)
}

fn render_raw(bib: &Bibliography, config: &FormatConfig) -> Result<String> {
    let mut result = String::new();

    // String definitions first
    for definition in bib.variables().iter() {
        let resolved = definition.resolve(bib.variables())?;
        result.push_str(&format!(
            "@string{{{} = {}}}\n",
            definition.key(),
            braced(&resolved)
        ));
    }

    for preamble in bib.preambles() {
        result.push_str(&format!("@preamble{{{}}}\n", preamble.raw_text()));
    }

    for (i, entry) in bib.entries().iter().enumerate() {
        if i > 0 && config.blank_line_between_entries {
            result.push('\n');
        }

        let mut lines = Vec::with_capacity(entry.len());
        for (name, value) in entry.fields() {
            let resolved = bib.resolve(value)?;
            let formatted = match integer_literal(&resolved) {
                Some(number) => number.to_string(),
                None => value.raw_text(),
            };
            lines.push(field_line(config, name, &formatted));
        }
        write_entry(&mut result, entry, &lines);
    }

    Ok(result)
}

fn render_pretty(bib: &Bibliography, config: &FormatConfig) -> Result<String> {
    let mut result = String::new();

    for entry in bib.entries() {
        write_header(&mut result, entry);
        result.push_str(",\n");

        let width = entry.longest_field_name();
        for (name, value) in entry.fields() {
            let resolved = bib.resolve(value)?;
            let formatted = match integer_literal(&resolved) {
                Some(number) => number.to_string(),
                None if resolved.contains(BRACE_QUOTE_TRIGGERS) => braced(&resolved),
                None => format!("\"{}\"", resolved),
            };
            result.push_str(&format!(
                "{}{:<width$} = {},\n",
                config.indent,
                name,
                formatted,
                width = width
            ));
        }

        result.push_str("}\n");
    }

    Ok(result)
}

fn braced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('{');
    result.push_str(text);
    result.push('}');
    result
}

fn field_line(config: &FormatConfig, name: &str, value: &str) -> String {
    format!("{}{} = {}", config.indent, name, value)
}

fn write_header(result: &mut String, entry: &Entry) {
    result.push('@');
    result.push_str(entry.entry_type());
    result.push('{');
    result.push_str(entry.cite_key());
}

/// Write an entry whose last field carries no trailing comma
///
/// A fieldless entry loses the comma after its cite key instead.
fn write_entry(result: &mut String, entry: &Entry, lines: &[String]) {
    write_header(result, entry);
    if !lines.is_empty() {
        result.push_str(",\n");
        result.push_str(&lines.join(",\n"));
    }
    result.push_str("\n}\n");
}
