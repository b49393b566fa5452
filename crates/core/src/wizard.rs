//! Valuation wizard step contract.
//!
//! The interactive flow driving this engine is a four-step wizard:
//! `Selection → Form → Processing → Result`. A failure while processing
//! returns the caller to the form with its data preserved; an explicit
//! reset from the result screen returns to the selection step with data
//! cleared. This is the only state machine in the engine's operating
//! contract; admin/session screens are outside it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Selection,
    Form,
    Processing,
    Result,
}

/// Total number of wizard steps.
pub const TOTAL_STEPS: u8 = 4;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Selection),
            2 => Ok(Self::Form),
            3 => Ok(Self::Processing),
            4 => Ok(Self::Result),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between 1 and {TOTAL_STEPS}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Selection => 1,
            Self::Form => 2,
            Self::Processing => 3,
            Self::Result => 4,
        }
    }

    /// Next step along the happy path, if any.
    pub fn advance(self) -> Option<Self> {
        match self {
            Self::Selection => Some(Self::Form),
            Self::Form => Some(Self::Processing),
            Self::Processing => Some(Self::Result),
            Self::Result => None,
        }
    }

    /// Whether the transition `self → to` is allowed.
    ///
    /// Allowed edges: the happy path, `Processing → Form` (failure, form
    /// data preserved by the caller) and `Result → Selection` (reset,
    /// data cleared).
    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Selection, Self::Form)
                | (Self::Form, Self::Processing)
                | (Self::Processing, Self::Result)
                | (Self::Processing, Self::Form)
                | (Self::Result, Self::Selection)
        )
    }

    /// Validate a transition, yielding a `Validation` error on an
    /// illegal edge.
    pub fn validate_transition(self, to: Self) -> Result<(), CoreError> {
        if self.can_transition(to) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Invalid wizard transition: {} -> {}",
                self.to_number(),
                to.to_number()
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
