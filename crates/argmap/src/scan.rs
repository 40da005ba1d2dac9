//! Adapter between the declaration set and the external argv scanner.
//!
//! [`lexopt`] owns the character-level work (bundled shorts, `--long=value`,
//! attached short values, `--` termination). This module compiles the
//! declarations into the lookup form the scanner loop consumes, drives the
//! scanner one event at a time and re-attaches each event to its
//! originating declaration.

use std::collections::HashMap;
use std::ffi::OsString;

use lexopt::Arg;

use crate::spec::{Arity, OptSpec};

/// One recognized occurrence: the matched declaration and the raw value it
/// carried. Absence is an explicit `None`, never a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchEvent {
    pub(crate) index: usize,
    pub(crate) value: Option<String>,
}

enum Hit {
    Decl(usize),
    UnknownLong,
    Dropped,
}

/// Scan `argv` (program name first) against the declaration set.
///
/// Unknown options and free-standing values are dropped from the event
/// stream, as is a trailing required-value option whose value is missing —
/// the same way a getopt `:`/`?` report matches no declaration.
pub(crate) fn scan<I>(specs: &[OptSpec], argv: I) -> Vec<MatchEvent>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut by_short: HashMap<char, usize> = HashMap::new();
    let mut by_long: HashMap<&str, usize> = HashMap::new();
    for (index, spec) in specs.iter().enumerate() {
        by_short.insert(spec.short, index);
        by_long.insert(spec.long.as_str(), index);
    }

    let mut parser = lexopt::Parser::from_iter(argv);
    let mut events = Vec::new();
    loop {
        let hit = match parser.next() {
            Ok(Some(Arg::Short(short))) => {
                by_short.get(&short).copied().map_or(Hit::Dropped, Hit::Decl)
            }
            Ok(Some(Arg::Long(long))) => {
                by_long.get(long).copied().map_or(Hit::UnknownLong, Hit::Decl)
            }
            Ok(Some(Arg::Value(_))) => Hit::Dropped,
            Ok(None) => break,
            Err(_) => Hit::Dropped,
        };
        match hit {
            Hit::Decl(index) => {
                let value = match specs[index].arity {
                    Arity::None => None,
                    Arity::Required => match parser.value() {
                        Ok(raw) => Some(raw.to_string_lossy().into_owned()),
                        // Trailing option with nothing left to consume.
                        Err(_) => continue,
                    },
                    Arity::Optional => parser
                        .optional_value()
                        .map(|raw| raw.to_string_lossy().into_owned()),
                };
                events.push(MatchEvent { index, value });
            }
            Hit::UnknownLong => {
                // Swallow a pending `=value` so the scanner can move past
                // the unrecognized option.
                let _ = parser.optional_value();
            }
            Hit::Dropped => {}
        }
    }
    events
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

    fn run(argv: &[&str]) -> Vec<MatchEvent> {
        scan(&demo_specs(), argv.iter().copied())
    }

    fn event(index: usize, value: Option<&str>) -> MatchEvent {
        MatchEvent {
            index,
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn matches_short_flags_and_values() {
        let events = run(&["prog", "-a", "-f", "x.txt"]);
        assert_eq!(events, vec![event(0, None), event(1, Some("x.txt"))]);
    }

    #[test]
    fn matches_long_spellings() {
        let events = run(&["prog", "--flag", "--file", "x.txt", "--file=y.txt"]);
        assert_eq!(
            events,
            vec![
                event(0, None),
                event(1, Some("x.txt")),
                event(1, Some("y.txt")),
            ]
        );
    }

    #[test]
    fn repeated_occurrences_stay_in_order() {
        let events = run(&["prog", "-f", "a", "-f", "b", "-f", "c"]);
        assert_eq!(
            events,
            vec![
                event(1, Some("a")),
                event(1, Some("b")),
                event(1, Some("c")),
            ]
        );
    }

    #[test]
    fn optional_value_only_captures_attached() {
        let events = run(&["prog", "-o3", "--opt=9", "-o", "7"]);
        // The detached `7` is a free token, not a value for `-o`.
        assert_eq!(
            events,
            vec![
                event(2, Some("3")),
                event(2, Some("9")),
                event(2, None),
            ]
        );
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let events = run(&["prog", "-z", "--nope", "--nope=v", "free", "-a"]);
        assert_eq!(events, vec![event(0, None)]);
    }

    #[test]
    fn missing_required_value_drops_the_occurrence() {
        let events = run(&["prog", "-a", "-f"]);
        assert_eq!(events, vec![event(0, None)]);
    }

    #[test]
    fn bundled_short_flags_each_match() {
        let events = run(&["prog", "-af", "x.txt"]);
        assert_eq!(events, vec![event(0, None), event(1, Some("x.txt"))]);
    }
}
