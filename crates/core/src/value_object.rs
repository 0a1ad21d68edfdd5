//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two records with
/// the same attribute values are interchangeable. The catalog's record kinds
/// (a book, a movie) are value objects — there is no identity to preserve, so
/// "modifying" one means constructing a new value.
///
/// The supertraits keep value objects cheap to copy, comparable by their
/// attributes, and debuggable. Note that `Eq` is intentionally not required:
/// records carrying `f64` prices can only offer `PartialEq`.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Book { title: String, unit_price: f64, quantity: u64 }
///
/// impl ValueObject for Book {}
///
/// let a = Book { title: "Book1".into(), unit_price: 10.0, quantity: 5 };
/// let b = Book { title: "Book1".into(), unit_price: 10.0, quantity: 5 };
/// assert_eq!(a, b); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
