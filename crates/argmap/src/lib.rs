//! Declaration-driven command-line option parsing with typed retrieval.
//!
//! The pipeline is small and explicit:
//! - declare each recognized option as an [`OptSpec`]
//! - [`parse`] appends the implicit `--help`/`-h` declaration, validates the
//!   set, scans `argv` through a getopt-style scanner ([`lexopt`]) and
//!   accumulates occurrences
//! - the returned [`Matches`] hands out one [`ParsedArg`] per declaration
//!   for presence tests and typed extraction
//!
//! Unknown command-line tokens are dropped, not reported. `required()` on a
//! declaration is advisory metadata for help output; the parser does not
//! reject argv that omits such an option.
//!
//! ```
//! use argmap::{Arity, OptSpec, parse};
//!
//! let opts = vec![
//!     OptSpec::new("verbose", 'v', Arity::None).help("Chatty output"),
//!     OptSpec::new("jobs", 'j', Arity::Required)
//!         .help("Worker count")
//!         .default_value("1"),
//! ];
//! let matches = parse(&opts, ["demo", "-v", "-j", "4"])?;
//! assert!(matches.is_present("verbose"));
//! assert_eq!(matches.get("jobs").unwrap().value::<u32>()?, 4);
//! # Ok::<(), argmap::Error>(())
//! ```

mod error;
mod help;
mod matches;
mod scan;
mod spec;

pub use error::{Error, Result};
pub use help::{HelpStyle, render, render_with};
pub use matches::{Matches, ParsedArg};
pub use spec::{Arity, Obligation, OptSpec, with_help};

use std::ffi::OsString;

/// Parse `argv` (program name first) against the declared options.
///
/// The caller's declarations are never mutated: the implicit help option is
/// appended to an owned copy, exactly once per invocation. Fails with
/// [`Error::DuplicateOption`] before consuming any argv token when the
/// augmented set collides. Every declared option has an entry in the
/// returned [`Matches`], present or not.
pub fn parse<I>(specs: &[OptSpec], argv: I) -> Result<Matches>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let full = spec::with_help(specs);
    spec::validate(&full)?;
    let events = scan::scan(&full, argv);
    Ok(Matches::collect(&full, events))
}
