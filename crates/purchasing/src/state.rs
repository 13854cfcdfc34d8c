//! Purchase order lifecycle.
//!
//! ```text
//! Draft -> Submitted -> Approved -> Shipped -> Completed
//!   \________\____________\___________\______> Canceled
//! ```
//!
//! Completed and Canceled are terminal. Every edge goes through
//! [`PurchaseOrderState::transition`].

use serde::{Deserialize, Serialize};

use procurement_core::{DomainResult, ValidationError, ValueObject};

/// Purchase order lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderState {
    #[default]
    Draft,
    Submitted,
    Approved,
    Shipped,
    Completed,
    Canceled,
}

/// Operation requested against the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Submit,
    Approve,
    Ship,
    Complete,
    Cancel,
}

impl LifecycleAction {
    pub const ALL: [LifecycleAction; 5] = [
        LifecycleAction::Submit,
        LifecycleAction::Approve,
        LifecycleAction::Ship,
        LifecycleAction::Complete,
        LifecycleAction::Cancel,
    ];
}

impl core::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            LifecycleAction::Submit => "submit",
            LifecycleAction::Approve => "approve",
            LifecycleAction::Ship => "ship",
            LifecycleAction::Complete => "complete",
            LifecycleAction::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

impl PurchaseOrderState {
    pub const ALL: [PurchaseOrderState; 6] = [
        PurchaseOrderState::Draft,
        PurchaseOrderState::Submitted,
        PurchaseOrderState::Approved,
        PurchaseOrderState::Shipped,
        PurchaseOrderState::Completed,
        PurchaseOrderState::Canceled,
    ];

    /// The transition table.
    pub fn transition(self, action: LifecycleAction) -> DomainResult<Self> {
        use LifecycleAction as A;
        use PurchaseOrderState as S;

        match (self, action) {
            (S::Draft, A::Submit) => Ok(S::Submitted),
            (S::Submitted, A::Approve) => Ok(S::Approved),
            (S::Approved, A::Ship) => Ok(S::Shipped),
            (S::Shipped, A::Complete) => Ok(S::Completed),
            (S::Completed, A::Cancel) => Err(ValidationError::new(
                "Completed PurchaseOrder cannot be canceled",
            )),
            (S::Canceled, A::Cancel) => {
                Err(ValidationError::new("PurchaseOrder is already canceled"))
            }
            (_, A::Cancel) => Ok(S::Canceled),
            (_, A::Submit) => Err(ValidationError::new(
                "PurchaseOrder can only be submitted from Draft state",
            )),
            (_, A::Approve) => Err(ValidationError::new(
                "PurchaseOrder can only be approved from Submitted state",
            )),
            (_, A::Ship) => Err(ValidationError::new(
                "PurchaseOrder can only be shipped from Approved state",
            )),
            (_, A::Complete) => Err(ValidationError::new(
                "PurchaseOrder can only be completed from Shipped state",
            )),
        }
    }

    pub fn to_submitted_from(current: Self) -> DomainResult<Self> {
        current.transition(LifecycleAction::Submit)
    }

    pub fn to_approved_from(current: Self) -> DomainResult<Self> {
        current.transition(LifecycleAction::Approve)
    }

    pub fn to_shipped_from(current: Self) -> DomainResult<Self> {
        current.transition(LifecycleAction::Ship)
    }

    pub fn to_completed_from(current: Self) -> DomainResult<Self> {
        current.transition(LifecycleAction::Complete)
    }

    pub fn to_canceled_from(current: Self) -> DomainResult<Self> {
        current.transition(LifecycleAction::Cancel)
    }

    /// Items may only be added while the order is a draft.
    pub fn is_draft(&self) -> bool {
        *self == PurchaseOrderState::Draft
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PurchaseOrderState::Completed | PurchaseOrderState::Canceled
        )
    }

    pub fn can_apply(&self, action: LifecycleAction) -> bool {
        self.transition(action).is_ok()
    }

    pub fn allowed_actions(&self) -> Vec<LifecycleAction> {
        LifecycleAction::ALL
            .into_iter()
            .filter(|a| self.can_apply(*a))
            .collect()
    }
}

impl ValueObject for PurchaseOrderState {}

impl core::fmt::Display for PurchaseOrderState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PurchaseOrderState as S;

    #[test]
    fn happy_path_walks_every_forward_edge() {
        let state = S::Draft;
        let state = S::to_submitted_from(state).unwrap();
        assert_eq!(state, S::Submitted);
        let state = S::to_approved_from(state).unwrap();
        assert_eq!(state, S::Approved);
        let state = S::to_shipped_from(state).unwrap();
        assert_eq!(state, S::Shipped);
        let state = S::to_completed_from(state).unwrap();
        assert_eq!(state, S::Completed);
        assert!(state.is_terminal());
    }

    #[test]
    fn cannot_skip_submission() {
        let err = S::to_approved_from(S::Draft).unwrap_err();
        assert_eq!(
            err.message(),
            "PurchaseOrder can only be approved from Submitted state"
        );
    }

    #[test]
    fn every_non_terminal_state_can_be_canceled() {
        for state in [S::Draft, S::Submitted, S::Approved, S::Shipped] {
            assert_eq!(S::to_canceled_from(state).unwrap(), S::Canceled);
        }
    }

    #[test]
    fn completed_cannot_be_canceled() {
        let err = S::to_canceled_from(S::Completed).unwrap_err();
        assert_eq!(err.message(), "Completed PurchaseOrder cannot be canceled");
    }

    #[test]
    fn canceling_twice_fails() {
        let err = S::to_canceled_from(S::Canceled).unwrap_err();
        assert_eq!(err.message(), "PurchaseOrder is already canceled");
    }

    #[test]
    fn terminal_states_allow_nothing() {
        assert!(S::Completed.allowed_actions().is_empty());
        assert!(S::Canceled.allowed_actions().is_empty());
        assert_eq!(
            S::Draft.allowed_actions(),
            vec![LifecycleAction::Submit, LifecycleAction::Cancel]
        );
    }

    #[test]
    fn only_draft_is_draft() {
        for state in S::ALL {
            assert_eq!(state.is_draft(), state == S::Draft);
        }
        assert_eq!(S::default(), S::Draft);
    }

    #[test]
    fn exactly_the_documented_edges_exist() {
        let mut edges = Vec::new();
        for state in S::ALL {
            for action in LifecycleAction::ALL {
                if let Ok(next) = state.transition(action) {
                    edges.push((state, next));
                }
            }
        }
        assert_eq!(
            edges,
            vec![
                (S::Draft, S::Submitted),
                (S::Draft, S::Canceled),
                (S::Submitted, S::Approved),
                (S::Submitted, S::Canceled),
                (S::Approved, S::Shipped),
                (S::Approved, S::Canceled),
                (S::Shipped, S::Completed),
                (S::Shipped, S::Canceled),
            ]
        );
    }
}
