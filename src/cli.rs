// Copyright (c) 2018-2021  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options for embedding the console keyword layer into host binaries.

use std::str::FromStr;

use smart_default::SmartDefault;

/// CLI options of the engine console output.
///
/// Host binaries compose these into their own [`clap`] definitions and hand
/// them to [`BuiltIn::apply_cli()`].
///
/// [`BuiltIn::apply_cli()`]: crate::engine::BuiltIn::apply_cli
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl Colored for Cli {
    fn coloring(&self) -> Coloring {
        self.color
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Letting the terminal detection decide, whether output should be
    /// colored.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

/// Indication whether CLI options support colored output.
pub trait Colored {
    /// Returns [`Coloring`] preferred by these CLI options.
    ///
    /// The default implementation returns [`Coloring::Never`], a safe choice
    /// for options without coloring requirements.
    #[must_use]
    fn coloring(&self) -> Coloring {
        Coloring::Never
    }
}
