// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `sprint_*` formatter implementations.

use std::time::SystemTime;

use itertools::Itertools as _;

/// Width of the `#[<timestamp>] - ` prefix produced by [`sprint_time`]:
/// `2` for `#[`, `27` for an RFC 3339 timestamp with microseconds, `4` for
/// `] - `.
///
/// [`sprint_varx`] pads its name column to this width, so variable values
/// line up with timestamped message text.
pub const NAME_COL_WIDTH: usize = 33;

/// Width of separator rules produced by [`sprint_dashes`] and
/// [`sprint_error_report`] when no explicit width is given.
const DEFAULT_RULE_WIDTH: usize = 80;

/// Current time as an RFC 3339 timestamp with microseconds.
fn timestamp() -> String {
    humantime::format_rfc3339_micros(SystemTime::now()).to_string()
}

/// Joins formatter arguments into a single message.
fn joined(args: &[&str]) -> String {
    args.iter().join(" ")
}

/// Formats a timestamped message, no trailing newline.
#[must_use]
pub fn sprint_time(args: &[&str]) -> String {
    format!("#[{}] - {}", timestamp(), joined(args))
}

/// Formats a timestamped message followed by one newline.
#[must_use]
pub fn sprint_timen(args: &[&str]) -> String {
    let mut line = sprint_time(args);
    line.push('\n');
    line
}

/// Formats a timestamped `**ERROR**` message, no trailing newline.
#[must_use]
pub fn sprint_error(args: &[&str]) -> String {
    format!("#[{}] - **ERROR** {}", timestamp(), joined(args))
}

/// Formats one `name: value` line, the name column padded to
/// [`NAME_COL_WIDTH`].
///
/// `args[0]` is the variable name, `args[1]` its value (empty when absent).
#[must_use]
pub fn sprint_varx(args: &[&str]) -> String {
    let name = args.first().copied().unwrap_or_default();
    let value = args.get(1).copied().unwrap_or_default();
    format!("{:<NAME_COL_WIDTH$}{value}\n", format!("{name}:"))
}

/// Formats a separator line of dashes followed by a newline.
///
/// The width is taken from `args[0]` when it parses as a number and is
/// [`DEFAULT_RULE_WIDTH`] otherwise.
#[must_use]
pub fn sprint_dashes(args: &[&str]) -> String {
    let width = args
        .first()
        .and_then(|w| w.parse().ok())
        .unwrap_or(DEFAULT_RULE_WIDTH);
    let mut line = "-".repeat(width);
    line.push('\n');
    line
}

/// Formats a timestamped `Executing: <command>` line.
#[must_use]
pub fn sprint_executing(args: &[&str]) -> String {
    let cmd = joined(args);
    sprint_timen(&[&format!("Executing: {cmd}")])
}

/// Formats a timestamped `Issuing: <command>` line.
#[must_use]
pub fn sprint_issuing(args: &[&str]) -> String {
    let cmd = joined(args);
    sprint_timen(&[&format!("Issuing: {cmd}")])
}

/// Formats a program header: a timestamped `Running <program>` line
/// bracketed by separator rules and blank lines.
#[must_use]
pub fn sprint_pgm_header(args: &[&str]) -> String {
    let title = if args.is_empty() {
        "Running".into()
    } else {
        format!("Running {}", joined(args))
    };
    let dashes = sprint_dashes(&[]);
    format!("\n{dashes}{}{dashes}\n", sprint_timen(&[&title]))
}

/// Formats a timestamped error message bracketed by full-width `#` rules.
#[must_use]
pub fn sprint_error_report(args: &[&str]) -> String {
    let rule = "#".repeat(DEFAULT_RULE_WIDTH);
    let mut message = sprint_error(args);
    if !message.ends_with('\n') {
        message.push('\n');
    }
    format!("{rule}\n{message}{rule}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_prefix_has_the_documented_width() {
        let out = sprint_time(&["hello"]);

        assert!(out.starts_with("#["));
        assert!(out.ends_with("hello"));
        assert_eq!(&out[NAME_COL_WIDTH - 4..NAME_COL_WIDTH], "] - ");
        assert_eq!(out.len(), NAME_COL_WIDTH + "hello".len());
    }

    #[test]
    fn timen_appends_exactly_one_newline() {
        let out = sprint_timen(&["hello"]);

        assert!(out.ends_with("hello\n"));
        assert!(!out.ends_with("hello\n\n"));
    }

    #[test]
    fn error_is_timestamped_and_tagged() {
        let out = sprint_error(&["boom"]);

        assert!(out.starts_with("#["));
        assert!(out.ends_with("**ERROR** boom"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn varx_aligns_value_to_the_message_column() {
        let out = sprint_varx(&["TEST_NAME", "Smoke"]);

        assert_eq!(out.find("Smoke"), Some(NAME_COL_WIDTH));
        assert!(out.starts_with("TEST_NAME:"));
        assert!(out.ends_with("Smoke\n"));
    }

    #[test]
    fn varx_renders_missing_value_as_empty() {
        let out = sprint_varx(&["TEST_NAME"]);

        assert_eq!(out, format!("{:<NAME_COL_WIDTH$}\n", "TEST_NAME:"));
    }

    #[test]
    fn varx_outgrows_the_column_for_long_names() {
        let name = "A".repeat(NAME_COL_WIDTH + 3);
        let out = sprint_varx(&[&name, "v"]);

        assert_eq!(out, format!("{name}:v\n"));
    }

    #[test]
    fn dashes_defaults_to_eighty_columns() {
        assert_eq!(sprint_dashes(&[]), format!("{}\n", "-".repeat(80)));
    }

    #[test]
    fn dashes_honors_a_numeric_width() {
        assert_eq!(sprint_dashes(&["40"]), format!("{}\n", "-".repeat(40)));
    }

    #[test]
    fn dashes_ignores_a_non_numeric_width() {
        assert_eq!(sprint_dashes(&["wide"]), sprint_dashes(&[]));
    }

    #[test]
    fn executing_and_issuing_tag_the_command() {
        assert!(sprint_executing(&["ls", "-l"]).contains("Executing: ls -l"));
        assert!(sprint_issuing(&["reboot"]).contains("Issuing: reboot"));
    }

    #[test]
    fn pgm_header_brackets_the_title() {
        let out = sprint_pgm_header(&["obmc_boot_test"]);
        let dashes = format!("{}\n", "-".repeat(80));

        assert!(out.starts_with(&format!("\n{dashes}")));
        assert!(out.ends_with(&format!("{dashes}\n")));
        assert!(out.contains("Running obmc_boot_test"));
    }

    #[test]
    fn error_report_brackets_the_message() {
        let out = sprint_error_report(&["boom"]);
        let rule = "#".repeat(80);

        assert!(out.starts_with(&format!("{rule}\n")));
        assert!(out.ends_with(&format!("{rule}\n")));
        assert!(out.contains("**ERROR** boom\n"));
    }
}
