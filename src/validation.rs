//! Input validation for simulation requests.
//!
//! Checks integrity of processes and quantum before the simulation loop
//! runs. Detects:
//! - Non-positive quantum
//! - Non-positive burst times
//! - Negative arrival times
//!
//! All violations are collected and reported together rather than
//! fail-fast, so a caller can surface every problem at once. Duplicate
//! pids are permitted: pids are opaque labels, not keys.

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The quantum is zero or negative.
    NonPositiveQuantum,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request.
///
/// Checks:
/// 1. `quantum >= 1`
/// 2. Every process has `burst >= 1`
/// 3. Every process has `arrival >= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], quantum: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if quantum <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Quantum must be >= 1, got {quantum}"),
        ));
    }

    for p in processes {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.pid, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.pid, p.arrival),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
