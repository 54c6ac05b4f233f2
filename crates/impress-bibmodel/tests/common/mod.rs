//! Shared bibliography builders for integration tests

use impress_bibmodel::{Bibliography, Entry, StringValue};

/// One article with a single constant title
pub fn hello_article() -> Bibliography {
    let mut bib = Bibliography::new();
    bib.add_entry(
        Entry::new("article", "doe2020").with_field("title", StringValue::constant("Hello")),
    );
    bib
}

/// A small database using a variable, a composite, and a preamble
#[allow(dead_code)]
pub fn journal_database() -> Bibliography {
    let mut bib = Bibliography::new();
    bib.define_variable("month", StringValue::constant("jan"));
    bib.define_variable("apj", StringValue::constant("Astrophysical Journal"));
    bib.add_preamble(StringValue::constant("\\newcommand{\\noop}[1]{}"));

    bib.add_entry(
        Entry::new("Article", "Smith2024")
            .with_field("author", StringValue::constant("John Smith"))
            .with_field("journal", StringValue::variable("apj"))
            .with_field(
                "month",
                StringValue::composite(StringValue::variable("month"))
                    .append(StringValue::constant("-supplement")),
            )
            .with_field("year", StringValue::constant("2024")),
    );
    bib.add_entry(
        Entry::new("book", "Knuth1997")
            .with_field("title", StringValue::constant("The Art of {Computer} Programming"))
            .with_field("edition", StringValue::constant("3rd")),
    );
    bib
}
