//! Purchasing domain module (purchase orders).
//!
//! This crate contains business rules for purchase orders, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod order;
pub mod state;

pub use item::{MAX_QUANTITY, MIN_QUANTITY, PurchaseOrderItem};
pub use order::{MAX_ITEMS, PurchaseOrder};
pub use state::{LifecycleAction, PurchaseOrderState};
