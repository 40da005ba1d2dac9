//! Accumulation of scanner events and typed per-option retrieval.

use std::fmt::Display;
use std::slice;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::scan::MatchEvent;
use crate::spec::OptSpec;

/// Accumulated result for one declared option.
///
/// Starts absent; every occurrence reported by the scanner marks it present
/// and appends the captured raw value, preserving command-line order.
/// Invariant: an absent entry holds no values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArg {
    long: String,
    short: char,
    present: bool,
    values: Vec<String>,
    default_value: Option<String>,
}

impl ParsedArg {
    fn absent(spec: &OptSpec) -> Self {
        Self {
            long: spec.long.clone(),
            short: spec.short,
            present: false,
            values: Vec::new(),
            default_value: spec.default_value.clone(),
        }
    }

    fn record(&mut self, value: Option<String>) {
        self.present = true;
        if let Some(value) = value {
            self.values.push(value);
        }
    }

    /// Whether the option appeared at least once. Never fails; extraction
    /// is expected to be gated behind this.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Long name of the owning declaration.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Short name, carried for diagnostics.
    pub fn short(&self) -> char {
        self.short
    }

    /// Raw captured values, one per occurrence that carried one.
    pub fn raw_values(&self) -> &[String] {
        &self.values
    }

    /// The values extraction operates on: the captured ones when the option
    /// appeared, the declared default when it never did.
    fn usable(&self) -> Result<&[String]> {
        if !self.present {
            match &self.default_value {
                Some(default) => Ok(slice::from_ref(default)),
                None => Err(Error::NotProvided {
                    name: self.long.clone(),
                }),
            }
        } else if self.values.is_empty() {
            Err(Error::NoValue {
                name: self.long.clone(),
            })
        } else {
            Ok(&self.values)
        }
    }

    fn convert<T>(&self, raw: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        raw.parse().map_err(|err: T::Err| Error::InvalidValue {
            name: self.long.clone(),
            value: raw.to_string(),
            reason: err.to_string(),
        })
    }

    /// First value, converted to `T`.
    pub fn value<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.convert(&self.usable()?[0])
    }

    /// First value as a borrowed string, no conversion.
    pub fn as_str(&self) -> Result<&str> {
        Ok(self.usable()?[0].as_str())
    }

    /// Value at `index`, converted to `T`.
    pub fn value_at<T>(&self, index: usize) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let values = self.usable()?;
        let raw = values.get(index).ok_or_else(|| Error::IndexOutOfRange {
            name: self.long.clone(),
            index,
            len: values.len(),
        })?;
        self.convert(raw)
    }

    /// Every value, converted, in command-line order.
    pub fn values<T>(&self) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.usable()?.iter().map(|raw| self.convert(raw)).collect()
    }

    /// The caller's fallback when the option never appeared. A present
    /// occurrence goes through the full extraction contract, so a bare or
    /// malformed occurrence still fails loudly instead of silently
    /// substituting the default.
    pub fn value_or<T>(&self, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        if !self.present {
            return Ok(default);
        }
        self.value()
    }
}

/// Map from long name to accumulated result, one entry per declared option
/// (the implicit `help` included), iterating in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches {
    args: IndexMap<String, ParsedArg>,
}

impl Matches {
    /// Seed one absent entry per declaration, then left-fold the event
    /// sequence from the scanner.
    pub(crate) fn collect(specs: &[OptSpec], events: Vec<MatchEvent>) -> Self {
        let mut args: IndexMap<String, ParsedArg> = specs
            .iter()
            .map(|spec| (spec.long.clone(), ParsedArg::absent(spec)))
            .collect();
        for event in events {
            let long = specs[event.index].long.as_str();
            if let Some(arg) = args.get_mut(long) {
                arg.record(event.value);
            }
        }
        Self { args }
    }

    /// Result for a declared option, by long name.
    pub fn get(&self, long: &str) -> Option<&ParsedArg> {
        self.args.get(long)
    }

    /// Whether a declared option appeared at least once.
    pub fn is_present(&self, long: &str) -> bool {
        self.args.get(long).is_some_and(ParsedArg::is_present)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParsedArg)> {
        self.args.iter().map(|(long, arg)| (long.as_str(), arg))
    }
}
