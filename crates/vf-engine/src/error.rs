//! Error types for the engine facade.

use thiserror::Error;
use vf_components::ComponentError;
use vf_solver::SolverError;
use vf_topology::TopologyError;

/// Everything that can go wrong across one analysis call or circuit load.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
