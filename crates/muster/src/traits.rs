//! The capability trait managed items implement.

/// An item that can live in a managed collection.
///
/// The single capability is a domain-supplied match predicate: given the
/// user's search terms, decide whether this item is a hit. Implementations
/// choose their own semantics - exact name equality, substring match,
/// alias lookup - and basic search simply defers to them.
///
/// # Example
///
/// ```
/// use muster::Manageable;
///
/// struct Critter {
///     name: String,
/// }
///
/// impl Manageable for Critter {
///     fn search(&self, terms: &str) -> bool {
///         self.name.eq_ignore_ascii_case(terms)
///     }
/// }
///
/// let pikachu = Critter { name: "Pikachu".into() };
/// assert!(pikachu.search("pikachu"));
/// assert!(!pikachu.search("raichu"));
/// ```
pub trait Manageable {
    /// Returns `true` if this item matches the search terms.
    fn search(&self, terms: &str) -> bool;
}
