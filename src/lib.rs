// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Console-output keywords for Robot-Framework-style test-execution engines.
//!
//! The crate is a thin convenience layer between two collaborators:
//!
//! - the [`fmt`] module, supplying *formatter* functions that return
//!   formatted text without writing it anywhere;
//! - an [`Engine`] implementor, supplying console-logging and
//!   variable-lookup services.
//!
//! On top of those it provides a static table of generated
//! [`ConsoleWriter`]s (one per formatter, each with an abbreviated alias),
//! buffer-printer keywords ([`rprint`], [`rprintn`]) and variable-printer
//! keywords ([`rpvarx`], [`rpvars`], [`rprint_auto_vars`]).
//!
//! [`Engine`]: engine::Engine
//! [`ConsoleWriter`]: writer::ConsoleWriter
//! [`rprint`]: keywords::rprint
//! [`rprintn`]: keywords::rprintn
//! [`rpvarx`]: keywords::rpvarx
//! [`rpvars`]: keywords::rpvars
//! [`rprint_auto_vars`]: keywords::rprint_auto_vars

pub mod cli;
pub mod engine;
pub mod error;
pub mod fmt;
pub mod keywords;
pub mod writer;

#[doc(inline)]
pub use self::{
    cli::{Cli, Colored, Coloring},
    engine::{BuiltIn, Engine},
    error::{ConsoleError, Result},
    keywords::{rprint, rprint_auto_vars, rprintn, rpvar, rpvars, rpvarx},
    writer::{ConsoleWriter, Stream},
};
