//! Round-Robin CPU scheduling simulator.
//!
//! Given a set of processes (pid, arrival, burst) and a fixed time quantum,
//! computes per-process completion statistics and a deterministic execution
//! timeline under the Round-Robin policy.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `CompletedProcess`, `Slice`,
//!   `Timeline`
//! - **`validation`**: Input integrity checks (quantum, bursts, arrivals)
//! - **`scheduler`**: The simulator (`RoundRobin`) and aggregate metrics
//!   (`SimulationMetrics`)
//! - **`error`**: Crate error taxonomy (`SimulationError`)
//!
//! # Example
//!
//! ```
//! use rr_sim::models::Process;
//! use rr_sim::scheduler::RoundRobin;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let result = RoundRobin::new(2).simulate(&processes).unwrap();
//!
//! assert_eq!(result.completed.len(), 2);
//! assert_eq!(result.timeline.makespan(), 8);
//! ```
//!
//! # Architecture
//!
//! The crate is a pure library: one `simulate` call runs to completion with
//! no shared state between calls, so a service layer may run simulations
//! concurrently by constructing an independent process set per request.
//! Request/response (de)serialization is covered by the serde derives on
//! `SimulationRequest`, `SimulationResult`, and the model types.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::SimulationError;
pub use models::{CompletedProcess, Process, Slice, Timeline};
pub use scheduler::{RoundRobin, SimulationMetrics, SimulationRequest, SimulationResult};
pub use validation::{validate_input, ValidationError, ValidationErrorKind};
