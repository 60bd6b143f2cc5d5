// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Execution-engine seam: console logging and variable lookup.

use std::{collections::HashMap, io};

use crate::{
    cli::{Cli, Colored as _, Coloring},
    error::Result,
    writer::{
        out::{Styles, WriteStrExt as _},
        Stream,
    },
};

/// Services a test-execution engine provides to console keywords.
pub trait Engine {
    /// Writes `message` to the engine console on the given [`Stream`].
    ///
    /// With `no_newline` set the message is written as is, otherwise one
    /// line terminator is appended.
    ///
    /// # Errors
    ///
    /// Whatever the underlying console facility raises. No recovery or
    /// translation layer is added here.
    fn log_to_console(
        &mut self,
        message: &str,
        stream: Stream,
        no_newline: bool,
    ) -> Result<()>;

    /// Current value of the engine variable `name`, or [`None`] when it's
    /// not set in the current execution context.
    ///
    /// Only variables visible to the engine's variable table can be
    /// resolved, never ones local to a calling scope.
    fn variable_value(&self, name: &str) -> Option<String>;
}

/// Default [`Engine`] implementation over a pair of plain output sinks
/// (process stdout/stderr unless overridden) and an in-memory variable
/// table.
///
/// Error-stream output is colored red if a terminal was detected and the
/// [`Coloring`] policy allows it; with [`Coloring::Never`] the output stays
/// byte-for-byte verbatim.
#[derive(Debug)]
pub struct BuiltIn<Out: io::Write = io::Stdout, ErrOut: io::Write = io::Stderr>
{
    /// Sink of the [`Stream::Stdout`] channel.
    stdout: Out,

    /// Sink of the [`Stream::Stderr`] channel.
    stderr: ErrOut,

    /// [`Styles`] applied to the error channel.
    styles: Styles,

    /// Engine variable table.
    variables: HashMap<String, String>,
}

impl BuiltIn {
    /// Creates a new [`BuiltIn`] engine over the process stdout/stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr(), Coloring::Auto)
    }
}

impl Default for BuiltIn {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<Out: io::Write, ErrOut: io::Write> BuiltIn<Out, ErrOut> {
    /// Creates a new [`BuiltIn`] engine over the given output sinks.
    #[must_use]
    pub fn new(stdout: Out, stderr: ErrOut, color: Coloring) -> Self {
        let mut styles = Styles::new();
        styles.apply_coloring(color);
        Self {
            stdout,
            stderr,
            styles,
            variables: HashMap::new(),
        }
    }

    /// Applies the given [`Cli`] options to this engine.
    pub fn apply_cli(&mut self, cli: Cli) {
        self.styles.apply_coloring(cli.coloring());
    }

    /// Sets the engine variable `name` to `value`, returning its previous
    /// value, if any.
    pub fn set_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.variables.insert(name.into(), value.into())
    }

    /// Removes the engine variable `name`, returning its value, if any.
    pub fn unset_variable(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    /// Releases the underlying output sinks.
    #[must_use]
    pub fn into_outputs(self) -> (Out, ErrOut) {
        (self.stdout, self.stderr)
    }
}

impl<Out: io::Write, ErrOut: io::Write> Engine for BuiltIn<Out, ErrOut> {
    fn log_to_console(
        &mut self,
        message: &str,
        stream: Stream,
        no_newline: bool,
    ) -> Result<()> {
        match stream {
            Stream::Stdout => {
                if no_newline {
                    self.stdout.write_str(message)?;
                } else {
                    self.stdout.write_line(message)?;
                }
                // Interleaving across the two streams follows call order
                // only if nothing stays buffered.
                self.stdout.flush()?;
            }
            Stream::Stderr => {
                let styled = self.styles.err(message);
                if no_newline {
                    self.stderr.write_str(styled.as_ref())?;
                } else {
                    self.stderr.write_line(styled.as_ref())?;
                }
                self.stderr.flush()?;
            }
        }
        Ok(())
    }

    fn variable_value(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}
