//! Ordered sets of criteria and their aggregation.

use std::fmt;

use crate::criterion::Criterion;
use crate::error::CompareError;
use crate::mode::SearchMode;

/// Rejects every custom criterion.
///
/// Pass this as the custom hook when no custom operators are declared;
/// managers with custom operators supply their own comparison instead.
pub fn deny_custom<T>(_item: &T, criterion: &Criterion<T>) -> Result<bool, CompareError> {
    Err(CompareError::UnsupportedOperator {
        token: criterion.operator().token(),
    })
}

/// An ordered, homogeneous set of [`Criterion`] values.
///
/// Criteria are evaluated in insertion order and aggregated under a
/// [`SearchMode`]. The element type parameter ties every criterion in the
/// set to the same managed type.
pub struct Criteria<T> {
    items: Vec<Criterion<T>>,
}

impl<T> Criteria<T> {
    /// Creates an empty criteria set.
    pub fn new() -> Self {
        Criteria { items: Vec::new() }
    }

    /// Appends a criterion.
    pub fn push(&mut self, criterion: Criterion<T>) {
        self.items.push(criterion);
    }

    /// Appends a criterion, builder style.
    pub fn with(mut self, criterion: Criterion<T>) -> Self {
        self.items.push(criterion);
        self
    }

    /// Number of criteria in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no criteria.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the criteria in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Criterion<T>> {
        self.items.iter()
    }

    /// Evaluates every criterion against `item` and aggregates under
    /// `mode`.
    ///
    /// Standard criteria evaluate through [`Criterion::matches`]; custom
    /// criteria are routed to `custom`, whose raw verdict still has the
    /// criterion's inverse flag applied. All criteria are evaluated - no
    /// short-circuiting - so errors are deterministic regardless of mode.
    pub fn satisfied_by<F>(
        &self,
        item: &T,
        mode: SearchMode,
        custom: F,
    ) -> Result<bool, CompareError>
    where
        F: Fn(&T, &Criterion<T>) -> Result<bool, CompareError>,
    {
        let mut matched = 0;
        for criterion in &self.items {
            let hit = if criterion.operator().is_custom() {
                criterion.is_inverse() != custom(item, criterion)?
            } else {
                criterion.matches(item)?
            };
            if hit {
                matched += 1;
            }
        }
        Ok(mode.accepts(matched, self.items.len()))
    }
}

impl<T> Default for Criteria<T> {
    fn default() -> Self {
        Criteria::new()
    }
}

impl<T> Clone for Criteria<T> {
    fn clone(&self) -> Self {
        Criteria {
            items: self.items.clone(),
        }
    }
}

impl<T> fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T> From<Vec<Criterion<T>>> for Criteria<T> {
    fn from(items: Vec<Criterion<T>>) -> Self {
        Criteria { items }
    }
}

impl<T> FromIterator<Criterion<T>> for Criteria<T> {
    fn from_iter<I: IntoIterator<Item = Criterion<T>>>(iter: I) -> Self {
        Criteria {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Criterion<T>> for Criteria<T> {
    fn extend<I: IntoIterator<Item = Criterion<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Criteria<T> {
    type Item = Criterion<T>;
    type IntoIter = std::vec::IntoIter<Criterion<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Criteria<T> {
    type Item = &'a Criterion<T>;
    type IntoIter = std::slice::Iter<'a, Criterion<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
