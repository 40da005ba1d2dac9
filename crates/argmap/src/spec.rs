//! Option declarations and declaration-set validation.

use crate::error::{Error, Result};

/// Whether an occurrence of an option carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// A bare flag; occurrences never carry a value.
    None,
    /// Every occurrence consumes the next argv token as its value.
    Required,
    /// An occurrence may carry an attached value (`-o3`, `--opt=3`).
    Optional,
}

/// Whether the option itself is expected to appear on the command line.
///
/// Advisory: surfaced in help output, never enforced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Obligation {
    #[default]
    Optional,
    Required,
}

/// One recognized option, declared before parsing and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptSpec {
    /// Long name; the identity the result map is keyed by.
    pub long: String,
    /// Single-letter short name.
    pub short: char,
    pub obligation: Obligation,
    pub arity: Arity,
    /// Display text for help output; no parsing semantics.
    pub help: String,
    /// Substituted by the accessor layer when the option never appears.
    pub default_value: Option<String>,
}

impl OptSpec {
    pub fn new(long: impl Into<String>, short: char, arity: Arity) -> Self {
        Self {
            long: long.into(),
            short,
            obligation: Obligation::Optional,
            arity,
            help: String::new(),
            default_value: None,
        }
    }

    /// Mark the option as one the command line is expected to carry.
    pub fn required(mut self) -> Self {
        self.obligation = Obligation::Required;
        self
    }

    /// Set the description shown in help output.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = text.into();
        self
    }

    /// Set the value the accessors fall back to when the option never
    /// appears on the command line.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

pub(crate) const HELP_LONG: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';

/// Return a copy of `specs` with the implicit `--help`/`-h` declaration
/// appended. Idempotent: a set already carrying a `help` long name gains
/// nothing. The caller's slice is never mutated.
pub fn with_help(specs: &[OptSpec]) -> Vec<OptSpec> {
    let mut full = specs.to_vec();
    if !full.iter().any(|spec| spec.long == HELP_LONG) {
        full.push(OptSpec::new(HELP_LONG, HELP_SHORT, Arity::None).help("Print this message"));
    }
    full
}

/// Reject declaration sets where two options share a short or a long name.
///
/// Sorting copies keeps the adjacency check O(n log n) without disturbing
/// the caller's declaration order.
pub(crate) fn validate(specs: &[OptSpec]) -> Result<()> {
    let mut by_short: Vec<&OptSpec> = specs.iter().collect();
    by_short.sort_by_key(|spec| spec.short);
    for pair in by_short.windows(2) {
        if pair[0].short == pair[1].short {
            return Err(Error::DuplicateOption {
                name: pair[1].short.to_string(),
            });
        }
    }

    let mut by_long: Vec<&OptSpec> = specs.iter().collect();
    by_long.sort_by(|a, b| a.long.cmp(&b.long));
    for pair in by_long.windows(2) {
        if pair[0].long == pair[1].long {
            return Err(Error::DuplicateOption {
                name: pair[1].long.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_specs() -> Vec<OptSpec> {
        vec![
            OptSpec::new("flag", 'a', Arity::None),
            OptSpec::new("file", 'f', Arity::Required),
            OptSpec::new("opt", 'o', Arity::Optional),
        ]
    }

    #[test]
    fn with_help_appends_exactly_once() {
        let specs = demo_specs();
        let full = with_help(&specs);
        assert_eq!(full.len(), specs.len() + 1);
        assert_eq!(full.last().unwrap().long, "help");
        assert_eq!(full.last().unwrap().short, 'h');

        let again = with_help(&full);
        assert_eq!(again.len(), full.len());
        assert_eq!(
            again.iter().filter(|spec| spec.long == "help").count(),
            1
        );
    }

    #[test]
    fn with_help_leaves_caller_slice_alone() {
        let specs = demo_specs();
        let _ = with_help(&specs);
        assert_eq!(specs.len(), 3);
    }

    #[test]
    fn validate_accepts_distinct_names() {
        assert!(validate(&with_help(&demo_specs())).is_ok());
    }

    #[test]
    fn validate_rejects_shared_short_name() {
        let specs = vec![
            OptSpec::new("alpha", 'x', Arity::None),
            OptSpec::new("beta", 'x', Arity::Required),
        ];
        assert_eq!(
            validate(&specs),
            Err(Error::DuplicateOption {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn validate_rejects_shared_long_name() {
        let specs = vec![
            OptSpec::new("same", 'a', Arity::None),
            OptSpec::new("same", 'b', Arity::None),
        ];
        assert_eq!(
            validate(&specs),
            Err(Error::DuplicateOption {
                name: "same".to_string()
            })
        );
    }

    #[test]
    fn declaring_h_collides_with_implicit_help() {
        let specs = vec![OptSpec::new("hex", 'h', Arity::None)];
        assert!(validate(&with_help(&specs)).is_err());
    }
}
