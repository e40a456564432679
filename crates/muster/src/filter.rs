//! Filter strategies over collection iterators.
//!
//! Both filters wrap any `(index, &item)` iterator - the shape
//! [`Collection::iter`](crate::Collection::iter) produces - and yield
//! only accepted elements. [`BasicFilter`] defers to each item's own
//! [`Manageable::search`] predicate; [`AdvancedFilter`] evaluates a bound
//! criteria set under a search mode.

use muster_query::{CompareError, Criteria, Criterion, SearchMode};

use crate::traits::Manageable;

/// Accepts elements whose own `search` predicate matches the terms.
pub struct BasicFilter<'t, I> {
    iter: I,
    terms: &'t str,
}

impl<'t, I> BasicFilter<'t, I> {
    /// Wraps an `(index, &item)` iterator with a search-term predicate.
    pub fn new(iter: I, terms: &'t str) -> Self {
        BasicFilter { iter, terms }
    }
}

impl<'a, 't, I, T> Iterator for BasicFilter<'t, I>
where
    T: Manageable + 'a,
    I: Iterator<Item = (usize, &'a T)>,
{
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let terms = self.terms;
        self.iter.by_ref().find(|(_, item)| item.search(terms))
    }
}

/// Accepts elements satisfying a criteria set under a search mode.
///
/// Criterion evaluation can fail, so the filter yields
/// `Result<(index, &item), CompareError>`; the first error is surfaced in
/// place of a match and iteration may be stopped by the caller.
pub struct AdvancedFilter<'c, I, T, F> {
    iter: I,
    criteria: &'c Criteria<T>,
    mode: SearchMode,
    custom: F,
}

impl<'c, I, T, F> AdvancedFilter<'c, I, T, F>
where
    F: Fn(&T, &Criterion<T>) -> Result<bool, CompareError>,
{
    /// Wraps an `(index, &item)` iterator with a criteria set.
    ///
    /// `custom` evaluates criteria carrying
    /// [`Operator::Custom`](muster_query::Operator::Custom); pass
    /// [`deny_custom`](muster_query::deny_custom) when none are declared.
    pub fn new(iter: I, criteria: &'c Criteria<T>, mode: SearchMode, custom: F) -> Self {
        AdvancedFilter {
            iter,
            criteria,
            mode,
            custom,
        }
    }
}

impl<'a, 'c, I, T, F> Iterator for AdvancedFilter<'c, I, T, F>
where
    T: 'a,
    I: Iterator<Item = (usize, &'a T)>,
    F: Fn(&T, &Criterion<T>) -> Result<bool, CompareError>,
{
    type Item = Result<(usize, &'a T), CompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, item) = self.iter.next()?;
            match self.criteria.satisfied_by(item, self.mode, &self.custom) {
                Ok(true) => return Some(Ok((index, item))),
                Ok(false) => continue,
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use muster_query::{deny_custom, Criterion, Operator, Value};

    use super::*;
    use crate::collection::Collection;

    #[derive(Debug, PartialEq)]
    struct Critter {
        name: String,
    }

    impl Manageable for Critter {
        fn search(&self, terms: &str) -> bool {
            self.name.eq_ignore_ascii_case(terms)
        }
    }

    fn name(c: &Critter) -> Value<'_> {
        Value::Text(&c.name)
    }

    fn dex() -> Collection<Critter> {
        ["Pikachu", "Raichu", "Pichu"]
            .into_iter()
            .map(|name| Critter {
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn basic_filter_defers_to_the_item() {
        let dex = dex();
        let hits: Vec<(usize, &Critter)> = BasicFilter::new(dex.iter(), "raichu").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 1);
        assert_eq!(hits[0].1.name, "Raichu");
    }

    #[test]
    fn basic_filter_can_be_empty() {
        let dex = dex();
        assert_eq!(BasicFilter::new(dex.iter(), "mew").count(), 0);
    }

    #[test]
    fn advanced_filter_applies_criteria_in_order() {
        let dex = dex();
        let criteria = Criteria::new()
            .with(Criterion::new("name", name, Operator::Like, "chu".into()).unwrap());

        let hits: Result<Vec<(usize, &Critter)>, CompareError> =
            AdvancedFilter::new(dex.iter(), &criteria, SearchMode::Any, deny_custom).collect();
        let hits = hits.unwrap();
        let names: Vec<&str> = hits.iter().map(|(_, c)| c.name.as_str()).collect();
        assert_eq!(names, ["Pikachu", "Raichu", "Pichu"]);
    }

    #[test]
    fn advanced_filter_surfaces_errors() {
        let dex = dex();
        let criteria = Criteria::new()
            .with(Criterion::new("name", name, Operator::Gt, 5i64.into()).unwrap());

        let mut filter = AdvancedFilter::new(dex.iter(), &criteria, SearchMode::Any, deny_custom);
        assert!(matches!(filter.next(), Some(Err(_))));
    }
}
