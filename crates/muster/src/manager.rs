//! The manager trait: collection ownership plus search orchestration.

use std::cmp::Ordering;

use muster_fuzzy::jaro_winkler;
use muster_query::{
    CompareError, Criteria, Criterion, FieldTable, Operand, Operator, SearchMode,
};

use crate::collection::Collection;
use crate::error::ManagerError;
use crate::filter::{AdvancedFilter, BasicFilter};
use crate::traits::Manageable;

/// Owns a collection of one managed type and orchestrates add, remove,
/// and search over it.
///
/// Implementations supply the collection accessors, a [`load`]
/// implementation that populates the collection from their external
/// source, and a [`fields`] table declaring which fields are searchable.
/// Everything else - indexing, basic and advanced search, criterion
/// construction, fuzzy suggestions - is provided.
///
/// Managers that declare [`OperatorClass::Custom`] fields also override
/// [`custom_comparison`] to give those operators meaning.
///
/// [`load`]: Manager::load
/// [`fields`]: Manager::fields
/// [`custom_comparison`]: Manager::custom_comparison
/// [`OperatorClass::Custom`]: muster_query::OperatorClass::Custom
pub trait Manager {
    /// The managed item type.
    type Item: Manageable;

    /// The managed collection.
    fn collection(&self) -> &Collection<Self::Item>;

    /// The managed collection, mutably.
    fn collection_mut(&mut self) -> &mut Collection<Self::Item>;

    /// Populates the collection from the manager's external source.
    fn load(&mut self) -> Result<(), ManagerError>;

    /// The searchable fields of the managed type.
    fn fields(&self) -> &FieldTable<Self::Item>;

    /// Evaluates a custom-operator criterion against an item.
    ///
    /// The returned verdict is the raw comparison; the criterion's
    /// inverse flag is applied by the caller. The default implementation
    /// rejects every custom operator.
    fn custom_comparison(
        &self,
        _item: &Self::Item,
        criterion: &Criterion<Self::Item>,
    ) -> Result<bool, CompareError> {
        Err(CompareError::UnsupportedOperator {
            token: criterion.operator().token(),
        })
    }

    /// Appends an item and returns its index.
    ///
    /// With `unique` set, an identical item already in the collection
    /// (found by a linear equality scan) makes this a no-op returning
    /// `None`.
    fn add_item(&mut self, item: Self::Item, unique: bool) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        if unique && self.collection().contains(&item) {
            return None;
        }
        Some(self.collection_mut().insert(item))
    }

    /// Places an item at a caller-chosen index, possibly overwriting.
    ///
    /// The same `unique` check as [`add_item`](Manager::add_item)
    /// applies.
    fn set_index(&mut self, item: Self::Item, index: usize, unique: bool) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        if unique && self.collection().contains(&item) {
            return None;
        }
        self.collection_mut().set(index, item);
        Some(index)
    }

    /// Removes the first identical item and returns its index.
    fn remove_item(&mut self, item: &Self::Item) -> Result<usize, ManagerError>
    where
        Self::Item: PartialEq,
    {
        self.collection_mut()
            .remove_first(item)
            .ok_or(ManagerError::ItemNotFound)
    }

    /// Reindexes the collection to dense `0..n-1`.
    fn normalize(&mut self) {
        self.collection_mut().normalize();
    }

    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Result<&Self::Item, ManagerError> {
        self.collection()
            .get(index)
            .ok_or(ManagerError::NotFound(index))
    }

    /// Returns the first item whose own predicate matches `terms`.
    fn find_first(&self, terms: &str) -> Result<&Self::Item, ManagerError> {
        BasicFilter::new(self.collection().iter(), terms)
            .map(|(_, item)| item)
            .next()
            .ok_or(ManagerError::NoResults)
    }

    /// Returns every item whose own predicate matches `terms`, in
    /// collection order.
    fn basic_search(&self, terms: &str) -> Result<Vec<&Self::Item>, ManagerError> {
        let hits: Vec<&Self::Item> = BasicFilter::new(self.collection().iter(), terms)
            .map(|(_, item)| item)
            .collect();
        if hits.is_empty() {
            Err(ManagerError::NoResults)
        } else {
            Ok(hits)
        }
    }

    /// Returns the items satisfying `criteria` under `mode`, in
    /// collection order.
    ///
    /// Collection stops early once `limit` results are gathered;
    /// `limit == 0` means unlimited. An empty result set fails
    /// [`ManagerError::NoResults`].
    fn advanced_search(
        &self,
        criteria: &Criteria<Self::Item>,
        mode: SearchMode,
        limit: usize,
    ) -> Result<Vec<&Self::Item>, ManagerError> {
        let filter =
            AdvancedFilter::new(self.collection().iter(), criteria, mode, |item, criterion| {
                self.custom_comparison(item, criterion)
            });

        let mut hits = Vec::new();
        for result in filter {
            let (_, item) = result?;
            hits.push(item);
            if limit != 0 && hits.len() == limit {
                break;
            }
        }
        if hits.is_empty() {
            Err(ManagerError::NoResults)
        } else {
            Ok(hits)
        }
    }

    /// Builds a validated criterion against this manager's field table.
    fn criterion(
        &self,
        field: &str,
        op: Operator,
        operand: Operand,
    ) -> Result<Criterion<Self::Item>, ManagerError> {
        Ok(self.fields().criterion(field, op, operand)?)
    }

    /// Ranks the collection against `query` by Jaro-Winkler similarity
    /// of each item's key string.
    ///
    /// Items scoring below `floor` are dropped; the rest come back
    /// descending by score, ties keeping collection order. This is the
    /// "did you mean" fallback for when exact search fails.
    fn suggestions<'a, K>(&'a self, query: &str, key: K, floor: f64) -> Vec<(&'a Self::Item, f64)>
    where
        K: Fn(&Self::Item) -> &str,
    {
        let mut scored: Vec<(&Self::Item, f64)> = self
            .collection()
            .values()
            .map(|item| (item, jaro_winkler(query, key(item))))
            .filter(|(_, score)| *score >= floor)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored
    }
}
