//! # Muster - Typed Collection Managers with Composable Search
//!
//! Muster is an in-memory query engine for collections of domain objects.
//! A manager owns a typed, integer-keyed [`Collection`], and searches it
//! two ways:
//!
//! - **Basic search** defers to each item's own
//!   [`Manageable::search`] predicate - cheap, domain-defined matching.
//! - **Advanced search** evaluates composable [`Criteria`] - per-field
//!   operators validated against a declared [`FieldTable`], aggregated
//!   under an ANY/ALL [`SearchMode`], with an optional result limit.
//!
//! When exact search comes up empty, the [`suggestions`](Manager::suggestions)
//! fallback ranks the collection by Jaro-Winkler similarity to produce
//! "did you mean" candidates.
//!
//! The crate re-exports its satellites: [`query`] (criteria, operators,
//! field registries), [`fuzzy`] (similarity metrics and ranking), and
//! [`flags`] (closed named-value sets and flag sets).
//!
//! ## Core Concepts
//!
//! - [`Manageable`]: capability trait items implement - one `search`
//!   predicate
//! - [`Collection`]: insertion-ordered, integer-keyed container with
//!   never-reused indices and [`normalize`](Collection::normalize)
//! - [`Manager`]: trait owning a collection; add/remove/search provided,
//!   `load` and the field table supplied by the implementation
//! - [`BasicFilter`] / [`AdvancedFilter`]: iterator adapters the searches
//!   are built from
//!
//! ## Quick Start
//!
//! ```rust
//! use muster::{
//!     Collection, FieldSpec, FieldTable, Manageable, Manager, ManagerError,
//!     Operator, OperatorClass, SearchMode, Value,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Critter {
//!     name: String,
//!     number: i64,
//! }
//!
//! impl Manageable for Critter {
//!     fn search(&self, terms: &str) -> bool {
//!         self.name.eq_ignore_ascii_case(terms)
//!     }
//! }
//!
//! fn name(c: &Critter) -> Value<'_> {
//!     Value::Text(&c.name)
//! }
//! fn number(c: &Critter) -> Value<'_> {
//!     Value::Number(c.number.into())
//! }
//!
//! struct CritterDex {
//!     collection: Collection<Critter>,
//!     fields: FieldTable<Critter>,
//! }
//!
//! impl CritterDex {
//!     fn new() -> Self {
//!         CritterDex {
//!             collection: Collection::new(),
//!             fields: FieldTable::new([
//!                 FieldSpec { name: "name", accessor: name, class: OperatorClass::Text },
//!                 FieldSpec { name: "number", accessor: number, class: OperatorClass::Numeric },
//!             ]),
//!         }
//!     }
//! }
//!
//! impl Manager for CritterDex {
//!     type Item = Critter;
//!
//!     fn collection(&self) -> &Collection<Critter> {
//!         &self.collection
//!     }
//!     fn collection_mut(&mut self) -> &mut Collection<Critter> {
//!         &mut self.collection
//!     }
//!     fn fields(&self) -> &FieldTable<Critter> {
//!         &self.fields
//!     }
//!     fn load(&mut self) -> Result<(), ManagerError> {
//!         self.collection.extend([
//!             Critter { name: "Pikachu".into(), number: 25 },
//!             Critter { name: "Raichu".into(), number: 26 },
//!             Critter { name: "Pichu".into(), number: 172 },
//!         ]);
//!         Ok(())
//!     }
//! }
//!
//! let mut dex = CritterDex::new();
//! dex.load().unwrap();
//!
//! // Advanced search: name *= "chu", ANY mode, unlimited.
//! let criteria = [dex.criterion("name", Operator::Like, "chu".into()).unwrap()]
//!     .into_iter()
//!     .collect();
//! let hits = dex.advanced_search(&criteria, SearchMode::Any, 0).unwrap();
//! assert_eq!(hits.len(), 3);
//!
//! // Exact search misses; fuzzy fallback suggests the fix.
//! assert!(dex.basic_search("Pikachuu").is_err());
//! let suggestions = dex.suggestions("Pikachuu", |c| &c.name, 0.80);
//! assert_eq!(suggestions[0].0.name, "Pikachu");
//! ```

mod collection;
mod error;
mod filter;
mod manager;
mod traits;

pub use collection::Collection;
pub use error::ManagerError;
pub use filter::{AdvancedFilter, BasicFilter};
pub use manager::Manager;
pub use traits::Manageable;

// Satellite crates, re-exported whole...
pub use muster_flags as flags;
pub use muster_fuzzy as fuzzy;
pub use muster_query as query;

// ...and their everyday names at the crate root.
pub use muster_fuzzy::{jaro, jaro_winkler, Suggestion, DEFAULT_FLOOR};
pub use muster_query::{
    deny_custom, CompareError, Criteria, Criterion, CriterionError, FieldSpec, FieldTable,
    Number, Operand, Operator, OperatorClass, SearchMode, Value,
};
