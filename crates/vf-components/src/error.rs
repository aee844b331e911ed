//! Error types for component construction.

use crate::kind::ComponentKind;
use thiserror::Error;

/// Errors produced while validating a single component record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Component '{id}' has non-finite value {value}")]
    NonFinite { id: String, value: f64 },

    #[error("Passive component '{id}' ({kind}) must have value > 0, got {value}")]
    NonPositivePassive {
        id: String,
        kind: ComponentKind,
        value: f64,
    },
}

pub type ComponentResult<T> = Result<T, ComponentError>;
