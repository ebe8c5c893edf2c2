//! Round-Robin simulation and metrics.
//!
//! # Algorithm
//!
//! [`RoundRobin`] dispatches a strict-FIFO ready queue, granting each
//! process at most one quantum per turn. The output is deterministic: a
//! completed set, an event log, and a timeline.
//!
//! # Metrics
//!
//! [`SimulationMetrics`] aggregates the result into standard indicators:
//! average turnaround/waiting, makespan, idle time, CPU utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod round_robin;

pub use metrics::SimulationMetrics;
pub use round_robin::{RoundRobin, SimulationRequest, SimulationResult};
