//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. Derived artifacts such
/// as alerts and recommendations are value objects: they carry no identity
/// beyond the product they describe, and recomputation replaces them
/// wholesale.
///
/// To "modify" a value object, build a new one with the new values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
