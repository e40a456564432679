//! Closed named-value sets with name↔value lookup, plus flag sets that
//! compose values by bitwise OR.
//!
//! A [`NamedSet`] is an immutable, const-constructible table of
//! `(name, value)` pairs. Values outside the table are rejected at
//! construction, names are matched leniently (case and `_`/`-`/space
//! insensitive), and every accepted value can be rendered back to its
//! declared name.
//!
//! A [`FlagSet`] layers bitmask semantics on top: any value below
//! `highest_declared_flag << 1` is accepted, single flags can be tested
//! with [`FlagMember::has_flag`], and compound values render as the
//! comma-joined names of their set bits.
//!
//! Tables are plain `static` items, so the name↔value mapping is built
//! exactly once, at compile time:
//!
//! ```rust
//! use muster_flags::{FlagSet, NamedSet};
//!
//! static COLORS: NamedSet = NamedSet::new("colors", &[
//!     ("red", 0),
//!     ("green", 1),
//!     ("blue", 2),
//! ]);
//!
//! static MODES: FlagSet = FlagSet::new("modes", &[
//!     ("read", 1),
//!     ("write", 2),
//!     ("exec", 4),
//! ]);
//!
//! let green = COLORS.from_name("Green").unwrap();
//! assert_eq!(green.value(), 1);
//! assert_eq!(COLORS.get(1).unwrap().name(), "green");
//!
//! let rw = MODES.get(1 | 2).unwrap();
//! assert!(rw.has_flag(1).unwrap());
//! assert!(rw.has_flag(2).unwrap());
//! assert_eq!(rw.name(), "read, write");
//! ```

mod error;
mod flags;
mod set;

pub use error::{Result, SetError};
pub use flags::{FlagMember, FlagSet};
pub use set::{Member, NamedSet};
