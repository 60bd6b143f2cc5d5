// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Console writers generated from the formatter set.
//!
//! Instead of synthesizing functions at load time, every base name in
//! [`fmt::FUNC_NAMES`] maps to a [`ConsoleWriter`] record in a static table,
//! and invocation goes through [`find()`]/[`dispatch()`]. Each record pairs
//! the backing formatter with an output [`Stream`] and an abbreviated alias
//! (`rprint_varx` is also reachable as `rpvarx`).

pub mod out;

use std::str::FromStr;

use derive_more::with_trait::Display;
use once_cell::sync::Lazy;

use crate::{
    engine::Engine,
    error::{ConsoleError, Result},
    fmt,
};

#[doc(inline)]
pub use self::out::{Styles, WritableString, WriteStrExt};

/// Output channel of the engine console.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Stream {
    /// Standard output channel.
    #[default]
    #[display("STDOUT")]
    Stdout,

    /// Error output channel.
    #[display("STDERR")]
    Stderr,
}

impl FromStr for Stream {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "STDOUT" => Ok(Self::Stdout),
            "STDERR" => Ok(Self::Stderr),
            _ => Err(ConsoleError::unsupported_stream(s)),
        }
    }
}

/// Record of a single generated console writer.
///
/// Calling one is equivalent to calling its formatter and writing the result
/// verbatim to [`ConsoleWriter::stream`], with no newline appended.
#[derive(Clone, Debug)]
pub struct ConsoleWriter {
    /// Full name of this writer (base formatter name prefixed with `r`).
    pub name: String,

    /// Abbreviated alias (`print_` collapsed to `p`, e.g. `rptime` for
    /// `rprint_time`).
    pub alias: String,

    /// Formatter producing the text to write.
    pub formatter: fmt::Formatter,

    /// [`Stream`] this writer outputs to.
    pub stream: Stream,
}

impl ConsoleWriter {
    /// Calls the backing formatter with `args` and forwards its output to
    /// the engine console, no newline appended.
    ///
    /// # Errors
    ///
    /// Whatever [`Engine::log_to_console()`] raises.
    pub fn call<E: Engine + ?Sized>(
        &self,
        engine: &mut E,
        args: &[&str],
    ) -> Result<()> {
        engine.log_to_console(&(self.formatter)(args), self.stream, true)
    }
}

/// Prefix distinguishing generated console writers from their formatters.
const WRITER_PREFIX: &str = "r";

/// Base names routed to [`Stream::Stderr`].
const ERROR_BASE_PREFIX: &str = "print_error";

static WRITERS: Lazy<Vec<ConsoleWriter>> = Lazy::new(|| {
    fmt::FUNC_NAMES
        .iter()
        .map(|base| {
            // A base name without a backing formatter is an unrecoverable
            // startup condition, not a runtime-reported error.
            let formatter = fmt::formatter(base).unwrap_or_else(|| {
                panic!("no formatter is registered for `{base}`")
            });
            ConsoleWriter {
                name: format!("{WRITER_PREFIX}{base}"),
                alias: format!(
                    "{WRITER_PREFIX}{}",
                    base.replacen("print_", "p", 1),
                ),
                formatter,
                stream: if base.starts_with(ERROR_BASE_PREFIX) {
                    Stream::Stderr
                } else {
                    Stream::Stdout
                },
            }
        })
        .collect()
});

/// Returns the full set of generated [`ConsoleWriter`]s.
#[must_use]
pub fn writers() -> &'static [ConsoleWriter] {
    &WRITERS
}

/// Looks up a [`ConsoleWriter`] by its full name or abbreviated alias.
#[must_use]
pub fn find(name: &str) -> Option<&'static ConsoleWriter> {
    WRITERS.iter().find(|w| w.name == name || w.alias == name)
}

/// Resolves `name` and invokes the matching [`ConsoleWriter`] with `args`.
///
/// # Errors
///
/// [`ConsoleError::UnknownKeyword`] if no writer is registered under `name`,
/// otherwise whatever [`Engine::log_to_console()`] raises.
pub fn dispatch<E: Engine + ?Sized>(
    engine: &mut E,
    name: &str,
    args: &[&str],
) -> Result<()> {
    find(name)
        .ok_or_else(|| ConsoleError::unknown_keyword(name))?
        .call(engine, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_formatter_has_exactly_one_writer() {
        assert_eq!(writers().len(), fmt::FUNC_NAMES.len());

        for (base, writer) in fmt::FUNC_NAMES.iter().zip(writers()) {
            assert_eq!(writer.name, format!("r{base}"));
        }
    }

    #[test]
    fn aliases_collapse_the_print_prefix() {
        for writer in writers() {
            let expected = writer.name.replacen("rprint_", "rp", 1);
            assert_eq!(writer.alias, expected, "for `{}`", writer.name);
        }
    }

    #[test]
    fn error_printing_writers_route_to_stderr() {
        for writer in writers() {
            let expected = if writer.name.starts_with("rprint_error") {
                Stream::Stderr
            } else {
                Stream::Stdout
            };
            assert_eq!(writer.stream, expected, "for `{}`", writer.name);
        }
    }

    #[test]
    fn find_resolves_both_spellings() {
        let by_name = find("rprint_time").expect("full name resolves");
        let by_alias = find("rptime").expect("alias resolves");

        assert_eq!(by_name.name, by_alias.name);
        assert!(find("sprint_time").is_none());
        assert!(find("rpbogus").is_none());
    }

    #[test]
    fn stream_parses_case_insensitively() {
        assert_eq!("stdout".parse::<Stream>().unwrap(), Stream::Stdout);
        assert_eq!("STDERR".parse::<Stream>().unwrap(), Stream::Stderr);
        assert_eq!(Stream::Stdout.to_string(), "STDOUT");
    }

    #[test]
    fn stream_rejects_unsupported_names() {
        let err = "STDIN".parse::<Stream>().unwrap_err();

        assert!(matches!(err, ConsoleError::UnsupportedStream(s) if s == "STDIN"));
    }
}
