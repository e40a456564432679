//! Closed sets of named scalar values.

use crate::error::{Result, SetError};

/// An immutable table of `(name, value)` pairs forming a closed value set.
///
/// Declared once as a `static`, a `NamedSet` gives bidirectional
/// name↔value lookup: [`get`](NamedSet::get) validates a raw value,
/// [`from_name`](NamedSet::from_name) resolves a (leniently spelled) name,
/// and [`name_of`](NamedSet::name_of) is the exact reverse lookup.
#[derive(Debug, PartialEq, Eq)]
pub struct NamedSet {
    name: &'static str,
    entries: &'static [(&'static str, u64)],
}

impl NamedSet {
    /// Creates a set from its display name and declared entries.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, u64)]) -> Self {
        NamedSet { name, entries }
    }

    /// Returns the set's display name (used in error messages).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared `(name, value)` entries.
    pub fn entries(&self) -> &'static [(&'static str, u64)] {
        self.entries
    }

    /// Returns `true` if `value` is one of the declared values.
    pub fn contains(&self, value: u64) -> bool {
        self.entries.iter().any(|(_, v)| *v == value)
    }

    /// Validates `value` against the declared set.
    pub fn get(&self, value: u64) -> Result<Member<'_>> {
        match self.entries.iter().find(|(_, v)| *v == value) {
            Some((name, _)) => Ok(Member {
                set: self,
                name,
                value,
            }),
            None => Err(SetError::InvalidValue {
                set: self.name,
                value,
            }),
        }
    }

    /// Resolves a name to its declared value.
    ///
    /// Matching is lenient: `_`, `-` and spaces are stripped and case is
    /// ignored on both sides, so `"Slow_Start"`, `"slow-start"` and
    /// `"SLOW START"` all resolve the same entry.
    pub fn from_name(&self, name: &str) -> Result<Member<'_>> {
        let needle = normalize(name);
        match self
            .entries
            .iter()
            .find(|(declared, _)| normalize(declared) == needle)
        {
            Some((declared, value)) => Ok(Member {
                set: self,
                name: declared,
                value: *value,
            }),
            None => Err(SetError::UnknownName {
                set: self.name,
                name: name.to_string(),
            }),
        }
    }

    /// Exact reverse lookup: the declared name for `value`.
    pub fn name_of(&self, value: u64) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| *name)
            .ok_or(SetError::InvalidValue {
                set: self.name,
                value,
            })
    }
}

/// Strips `_`, `-` and spaces and lowercases, for lenient name matching.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A validated member of a [`NamedSet`]: a value known to be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member<'a> {
    set: &'a NamedSet,
    name: &'static str,
    value: u64,
}

impl Member<'_> {
    /// The member's scalar value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The member's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The set this member belongs to.
    pub fn set(&self) -> &NamedSet {
        self.set
    }
}

impl std::fmt::Display for Member<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
