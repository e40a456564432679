//! Flag sets: named values composable by bitwise OR.

use crate::error::{Result, SetError};
use crate::set::NamedSet;

/// A [`NamedSet`] whose values are flags, composable by bitwise OR.
///
/// Validity is permissive by design: any value below
/// `highest_declared_flag << 1` is accepted, not only exact combinations
/// of declared flags. A compound value renders back to the comma-joined
/// names of its declared single-bit flags, ascending by bit position.
#[derive(Debug, PartialEq, Eq)]
pub struct FlagSet {
    inner: NamedSet,
    highest: u64,
}

impl FlagSet {
    /// Creates a flag set from its display name and declared flags.
    pub const fn new(name: &'static str, entries: &'static [(&'static str, u64)]) -> Self {
        let mut highest = 0;
        let mut i = 0;
        while i < entries.len() {
            if entries[i].1 > highest {
                highest = entries[i].1;
            }
            i += 1;
        }
        FlagSet {
            inner: NamedSet::new(name, entries),
            highest,
        }
    }

    /// The set's display name.
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// The highest declared flag value.
    pub fn highest(&self) -> u64 {
        self.highest
    }

    /// One past the largest representable value: `highest << 1`.
    pub fn ceiling(&self) -> u64 {
        if self.highest > u64::MAX >> 1 {
            u64::MAX
        } else {
            self.highest << 1
        }
    }

    /// Returns `true` if `value` is representable: below the ceiling.
    pub fn is_representable(&self, value: u64) -> bool {
        value < self.ceiling()
    }

    /// Validates `value` under the ceiling rule.
    pub fn get(&self, value: u64) -> Result<FlagMember<'_>> {
        if self.is_representable(value) {
            Ok(FlagMember { set: self, value })
        } else {
            Err(SetError::InvalidValue {
                set: self.inner.name(),
                value,
            })
        }
    }

    /// Resolves a declared flag by (leniently spelled) name.
    pub fn from_name(&self, name: &str) -> Result<FlagMember<'_>> {
        let member = self.inner.from_name(name)?;
        Ok(FlagMember {
            set: self,
            value: member.value(),
        })
    }

    /// Exact reverse lookup among the declared flags.
    pub fn name_of(&self, value: u64) -> Result<&'static str> {
        self.inner.name_of(value)
    }
}

/// A validated value of a [`FlagSet`], possibly a composite of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagMember<'a> {
    set: &'a FlagSet,
    value: u64,
}

impl FlagMember<'_> {
    /// The member's raw bits.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The set this member belongs to.
    pub fn set(&self) -> &FlagSet {
        self.set
    }

    /// Tests whether any bit of `flag` is set in this value.
    ///
    /// `flag` must itself be a representable value of the set.
    pub fn has_flag(&self, flag: u64) -> Result<bool> {
        if !self.set.is_representable(flag) {
            return Err(SetError::InvalidValue {
                set: self.set.name(),
                value: flag,
            });
        }
        Ok(self.value & flag != 0)
    }

    /// Renders the value back to declared names.
    ///
    /// An exactly-declared value uses its own name; otherwise the value is
    /// decomposed bit by bit, from bit 0 through the highest declared
    /// flag, and the names of the declared single-bit flags found are
    /// joined with `", "`.
    pub fn name(&self) -> String {
        if let Ok(name) = self.set.name_of(self.value) {
            return name.to_string();
        }
        let mut parts = Vec::new();
        let mut flag = 1u64;
        while flag != 0 && flag <= self.set.highest() {
            if self.value & flag != 0 {
                if let Ok(name) = self.set.name_of(flag) {
                    parts.push(name);
                }
            }
            flag <<= 1;
        }
        parts.join(", ")
    }
}

impl std::fmt::Display for FlagMember<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PERMS: FlagSet = FlagSet::new(
        "permissions",
        &[("read", 1), ("write", 2), ("exec", 4), ("admin", 8)],
    );

    #[test]
    fn declared_flags_validate() {
        for (_, value) in [("read", 1u64), ("write", 2), ("exec", 4), ("admin", 8)] {
            assert_eq!(PERMS.get(value).unwrap().value(), value);
        }
    }

    #[test]
    fn ceiling_is_permissive() {
        // highest is 8, so anything below 16 passes, declared or not.
        assert_eq!(PERMS.ceiling(), 16);
        assert!(PERMS.get(15).is_ok());
        assert!(PERMS.get(0).is_ok());
        assert_eq!(
            PERMS.get(16),
            Err(SetError::InvalidValue {
                set: "permissions",
                value: 16
            })
        );
    }

    #[test]
    fn has_flag_tests_bits() {
        let rw = PERMS.get(1 | 2).unwrap();
        assert!(rw.has_flag(1).unwrap());
        assert!(rw.has_flag(2).unwrap());
        assert!(!rw.has_flag(4).unwrap());
    }

    #[test]
    fn has_flag_rejects_unrepresentable_flags() {
        let rw = PERMS.get(3).unwrap();
        assert_eq!(
            rw.has_flag(32),
            Err(SetError::InvalidValue {
                set: "permissions",
                value: 32
            })
        );
    }

    #[test]
    fn exact_values_use_their_own_name() {
        assert_eq!(PERMS.get(4).unwrap().name(), "exec");
    }

    #[test]
    fn compound_values_decompose_ascending() {
        assert_eq!(PERMS.get(2 | 8).unwrap().name(), "write, admin");
        assert_eq!(PERMS.get(1 | 2 | 4 | 8).unwrap().name(), "read, write, exec, admin");
    }

    #[test]
    fn from_name_is_lenient() {
        assert_eq!(PERMS.from_name("READ").unwrap().value(), 1);
        assert_eq!(PERMS.from_name(" ad-min ").unwrap().value(), 8);
    }

    #[test]
    fn zero_has_no_name() {
        assert_eq!(PERMS.get(0).unwrap().name(), "");
    }
}
