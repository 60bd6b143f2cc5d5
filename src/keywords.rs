// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hand-written console keywords: buffer printers and variable printers.

use crate::{
    engine::Engine,
    error::Result,
    fmt,
    writer::{self, Stream},
};

/// Engine-defined automatic variables dumped by [`rprint_auto_vars()`], in
/// output order.
///
/// Not all of them are guaranteed to exist in every execution context;
/// absent ones print with empty values.
pub const AUTO_VAR_NAMES: &[&str] = &[
    "TEST_NAME",
    "TEST_TAGS",
    "TEST_DOCUMENTATION",
    "TEST_STATUS",
    "TEST_MESSAGE",
    "PREV_TEST_NAME",
    "PREV_TEST_STATUS",
    "PREV_TEST_MESSAGE",
    "SUITE_NAME",
    "SUITE_SOURCE",
    "SUITE_DOCUMENTATION",
    "SUITE_METADATA",
    "SUITE_STATUS",
    "SUITE_MESSAGE",
    "KEYWORD_STATUS",
    "KEYWORD_MESSAGE",
    "LOG_LEVEL",
    "OUTPUT_FILE",
    "LOG_FILE",
    "REPORT_FILE",
    "DEBUG_FILE",
    "OUTPUT_DIR",
];

/// Label emitted before the automatic-variable dump when headers are
/// requested.
const AUTO_VARS_LABEL: &str = "Automatic Variables:";

/// "Robot print": writes `buffer` to the engine console without a trailing
/// newline.
///
/// Including a line feed, if desired, is the caller's responsibility.
///
/// # Errors
///
/// Whatever [`Engine::log_to_console()`] raises.
pub fn rprint<E: Engine + ?Sized>(
    engine: &mut E,
    buffer: &str,
    stream: Stream,
) -> Result<()> {
    engine.log_to_console(buffer, stream, true)
}

/// "Robot print with linefeed": writes `buffer` to the engine console
/// followed by exactly one line terminator.
///
/// # Errors
///
/// Whatever [`Engine::log_to_console()`] raises.
pub fn rprintn<E: Engine + ?Sized>(
    engine: &mut E,
    buffer: &str,
    stream: Stream,
) -> Result<()> {
    engine.log_to_console(buffer, stream, false)
}

/// Prints a single `name: value` pair, the value aligned to the same column
/// as messages printed with `rptime`.
///
/// # Errors
///
/// Whatever [`Engine::log_to_console()`] raises.
pub fn rpvarx<E: Engine + ?Sized>(
    engine: &mut E,
    name: &str,
    value: &str,
) -> Result<()> {
    writer::dispatch(engine, "rprint_varx", &[name, value])
}

/// "Robot print vars": resolves each named variable through the engine's
/// variable table at call time and prints one aligned `name: value` line per
/// name, in the order given.
///
/// Missing variables print with empty values and are not errors. Variables
/// local to the calling scope cannot be resolved, only ones visible to the
/// engine.
///
/// # Errors
///
/// Whatever [`Engine::log_to_console()`] raises.
pub fn rpvars<E: Engine + ?Sized>(
    engine: &mut E,
    var_names: &[&str],
) -> Result<()> {
    for name in var_names {
        let value = engine.variable_value(name).unwrap_or_default();
        rpvarx(engine, name, &value)?;
    }
    Ok(())
}

/// `rpvar` is just a special case of [`rpvars()`] where the list contains a
/// single name.
pub use self::rpvars as rpvar;

/// Prints all engine-defined automatic variables ([`AUTO_VAR_NAMES`]) via
/// [`rpvars()`].
///
/// The `headers` flag accepts `0`/`1`; with `1` the dump is bracketed by
/// separator lines and preceded by a header label.
///
/// # Errors
///
/// Whatever [`Engine::log_to_console()`] raises.
pub fn rprint_auto_vars<E: Engine + ?Sized>(
    engine: &mut E,
    headers: u8,
) -> Result<()> {
    if headers == 1 {
        engine.log_to_console(&fmt::sprint_dashes(&[]), Stream::Stdout, true)?;
        engine.log_to_console(AUTO_VARS_LABEL, Stream::Stdout, false)?;
    }

    rpvars(engine, AUTO_VAR_NAMES)?;

    if headers == 1 {
        engine.log_to_console(&fmt::sprint_dashes(&[]), Stream::Stdout, true)?;
    }
    Ok(())
}
