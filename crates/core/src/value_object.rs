//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`StockLevels { stock: 5, min: 1, max: 10 }`)
/// - **Entity**: has identity (a part with id `1001`)
///
/// Value objects are immutable; to "modify" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
