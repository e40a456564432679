//! Composable, operator-typed search criteria for in-memory collections.
//!
//! This crate supplies the predicate layer of the muster engine. A
//! [`Criterion`] pairs a field accessor with an operator and a comparison
//! operand; a [`Criteria`] set aggregates several criteria under a
//! [`SearchMode`] (ANY/ALL). Which operators and operand kinds a field
//! accepts is declared once, in a [`FieldTable`] of [`FieldSpec`] entries,
//! and every criterion built through the table is validated against that
//! declaration.
//!
//! # Quick Start
//!
//! ```rust
//! use muster_query::{
//!     deny_custom, Criteria, FieldSpec, FieldTable, Operator, OperatorClass,
//!     SearchMode, Value,
//! };
//!
//! struct Critter {
//!     name: String,
//!     number: i64,
//! }
//!
//! fn name(c: &Critter) -> Value<'_> {
//!     Value::Text(&c.name)
//! }
//! fn number(c: &Critter) -> Value<'_> {
//!     Value::Number(c.number.into())
//! }
//!
//! let fields = FieldTable::new([
//!     FieldSpec { name: "name", accessor: name, class: OperatorClass::Text },
//!     FieldSpec { name: "number", accessor: number, class: OperatorClass::Numeric },
//! ]);
//!
//! let criteria: Criteria<Critter> = [
//!     fields.criterion("name", Operator::Like, "chu".into()).unwrap(),
//!     fields.criterion("number", Operator::Lt, 100i64.into()).unwrap(),
//! ]
//! .into_iter()
//! .collect();
//!
//! let pikachu = Critter { name: "Pikachu".into(), number: 25 };
//! assert!(criteria.satisfied_by(&pikachu, SearchMode::All, deny_custom).unwrap());
//! ```
//!
//! # Operator Classes
//!
//! Each field belongs to one of four operator-set classes, which fixes
//! both its permitted operators and the operand kind it compares against:
//!
//! | Class | Operators | Operand |
//! |-------|-----------|---------|
//! | Text | `=`, `===`, `!=`, `!==`, `*=` | text |
//! | Numeric | `=`, `===`, `!=`, `!==`, `>`, `>=`, `<`, `<=` | number |
//! | Set | `=`, `!=` | list |
//! | Custom | manager-declared tokens | any |
//!
//! Loose equality (`=`) compares text case-insensitively; strict equality
//! (`===`) demands the same kind and exact representation. The wildcard
//! operator (`*=`) uses shell-glob syntax (`?`, `*`, `[...]`); a bare
//! operand with no glob metacharacter gains implicit `*...*` substring
//! semantics. Patterns are compiled once, when the criterion is built.

mod criteria;
mod criterion;
mod error;
mod field;
mod mode;
mod op;
mod value;

pub use criteria::{deny_custom, Criteria};
pub use criterion::{Accessor, Criterion, Operand};
pub use error::{CompareError, CriterionError};
pub use field::{FieldSpec, FieldTable, OperatorClass};
pub use mode::SearchMode;
pub use op::Operator;
pub use value::{Number, Value};
