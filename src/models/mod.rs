//! Simulation domain models.
//!
//! Core data types for describing processes and execution traces.
//!
//! | Type | Role |
//! |------|------|
//! | [`Process`] | Input: a schedulable unit (pid, arrival, burst) |
//! | [`CompletedProcess`] | Output: per-process completion statistics |
//! | [`Slice`] / [`Timeline`] | Output: machine-readable execution trace |

mod process;
mod timeline;

pub use process::{CompletedProcess, Process};
pub use timeline::{Slice, Timeline};
