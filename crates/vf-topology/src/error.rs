//! Error types for topology resolution.

use thiserror::Error;

/// Errors that can occur while classifying a component ensemble.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Circuit has no passive elements")]
    EmptyCircuit,

    #[error("Circuit has no voltage or current source")]
    NoSource,

    #[error("Circuit has more than one source: '{first}' and '{second}'")]
    MultipleSources { first: String, second: String },

    #[error("Duplicate component id: '{id}'")]
    DuplicateId { id: String },

    #[error("Unsupported topology tag: '{tag}' (expected 'series' or 'parallel')")]
    UnsupportedTopology { tag: String },
}

pub type TopologyResult<T> = Result<T, TopologyError>;
