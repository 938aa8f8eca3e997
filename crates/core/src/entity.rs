//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are "the same record" when their ids are equal, regardless of
/// the values of their other fields.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Identity comparison (by id, not by value).
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
