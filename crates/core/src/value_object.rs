//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new instance; `Money::add` returns a fresh `Money`
/// rather than changing either operand.
///
/// ```
/// use procurement_core::{Currency, Money};
///
/// let a = Money::new(100.0, Currency::Usd).unwrap();
/// let b = Money::new(100.0, Currency::Usd).unwrap();
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
