// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of console keyword operations.
//!
//! Missing engine variables are not errors: they render as absent values.
//! Everything surfacing here is either an I/O failure of the underlying
//! console facility or a name that failed to resolve.

use std::io;

use derive_more::with_trait::{Display, Error, From};

/// Errors of console keyword operations.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// I/O error raised by the underlying console facility.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// No console writer is registered under the requested name or alias.
    #[display("unknown console keyword: {_0}")]
    #[from(ignore)]
    UnknownKeyword(#[error(not(source))] String),

    /// The requested output stream is not supported by the engine console.
    #[display("unsupported output stream: {_0}")]
    #[from(ignore)]
    UnsupportedStream(#[error(not(source))] String),
}

impl ConsoleError {
    /// Creates a new [`ConsoleError::UnknownKeyword`].
    #[must_use]
    pub fn unknown_keyword(name: impl Into<String>) -> Self {
        Self::UnknownKeyword(name.into())
    }

    /// Creates a new [`ConsoleError::UnsupportedStream`].
    #[must_use]
    pub fn unsupported_stream(name: impl Into<String>) -> Self {
        Self::UnsupportedStream(name.into())
    }

    /// Indicates whether this is an I/O error.
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result type alias for console keyword operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_and_displays() {
        let err: ConsoleError =
            io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();

        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn unknown_keyword_displays_name() {
        let err = ConsoleError::unknown_keyword("rpbogus");

        assert!(!err.is_io_error());
        assert_eq!(err.to_string(), "unknown console keyword: rpbogus");
    }

    #[test]
    fn unsupported_stream_displays_name() {
        let err = ConsoleError::unsupported_stream("STDIN");

        assert_eq!(err.to_string(), "unsupported output stream: STDIN");
    }
}
