//! Predefined BibTeX month strings
//!
//! Standard `.bst` styles predefine `jan` through `dec`. A bibliography built
//! from source that relies on them needs the definitions registered explicitly.

use lazy_static::lazy_static;

lazy_static! {
    /// Month macro keys and their expansions, January first.
    static ref MONTHS: Vec<(&'static str, &'static str)> = vec![
        ("jan", "January"),
        ("feb", "February"),
        ("mar", "March"),
        ("apr", "April"),
        ("may", "May"),
        ("jun", "June"),
        ("jul", "July"),
        ("aug", "August"),
        ("sep", "September"),
        ("oct", "October"),
        ("nov", "November"),
        ("dec", "December"),
    ];
}

/// Month macros in calendar order
pub fn month_macros() -> impl Iterator<Item = (&'static str, &'static str)> {
    MONTHS.iter().copied()
}
