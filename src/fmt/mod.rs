// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Formatter functions returning formatted text without writing it anywhere.
//!
//! Each base name in [`FUNC_NAMES`] is backed by an `sprint_*` formatter
//! sharing the uniform [`Formatter`] signature, so the [`writer`] table can
//! pair every base name with a console-writing counterpart.
//!
//! [`writer`]: crate::writer

mod formatters;

pub use self::formatters::{
    sprint_dashes, sprint_error, sprint_error_report, sprint_executing,
    sprint_issuing, sprint_pgm_header, sprint_time, sprint_timen, sprint_varx,
    NAME_COL_WIDTH,
};

/// Function returning formatted text for the given arguments, writing
/// nothing.
pub type Formatter = fn(&[&str]) -> String;

/// Base names of all formatter functions eligible for console-writer
/// generation.
///
/// `print_var`/`print_vars` are deliberately absent: resolving the names of
/// caller-local variables is not possible across the engine boundary, and
/// the engine-visible case is covered by [`keywords::rpvars`].
///
/// [`keywords::rpvars`]: crate::keywords::rpvars
pub const FUNC_NAMES: &[&str] = &[
    "print_time",
    "print_timen",
    "print_error",
    "print_varx",
    "print_dashes",
    "print_executing",
    "print_issuing",
    "print_pgm_header",
    "print_error_report",
];

/// Returns the formatter backing the given base name, if any.
#[must_use]
pub fn formatter(base_name: &str) -> Option<Formatter> {
    Some(match base_name {
        "print_time" => sprint_time,
        "print_timen" => sprint_timen,
        "print_error" => sprint_error,
        "print_varx" => sprint_varx,
        "print_dashes" => sprint_dashes,
        "print_executing" => sprint_executing,
        "print_issuing" => sprint_issuing,
        "print_pgm_header" => sprint_pgm_header,
        "print_error_report" => sprint_error_report,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_base_name_has_a_formatter() {
        for base in FUNC_NAMES {
            assert!(
                formatter(base).is_some(),
                "`{base}` lacks a backing formatter",
            );
        }
    }

    #[test]
    fn unknown_base_name_has_no_formatter() {
        assert!(formatter("print_bogus").is_none());
        assert!(formatter("print_var").is_none());
    }
}
