//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// All invariant-preserving changes to an aggregate and the entities it owns go
/// through the root's own operations.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Number of successful mutations applied since creation.
    fn version(&self) -> u64;
}
