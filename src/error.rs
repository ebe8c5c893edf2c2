//! Crate error taxonomy.
//!
//! The simulator has exactly one failure mode: invalid input, detected
//! before the loop starts. Given valid input the simulation always
//! terminates with a fully completed process set.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulator.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The request failed pre-simulation validation. No partial results
    /// are produced.
    #[error("invalid input: {}", format_validation_errors(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The underlying validation report, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
