//! `procurement-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod date;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use date::OrderDate;
pub use error::{DomainResult, ValidationError};
pub use id::{ProductId, PurchaseOrderId, SupplierId};
pub use money::{Currency, Money};
pub use value_object::ValueObject;
