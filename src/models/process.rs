//! Process model.
//!
//! A process is the unit of scheduling: it becomes eligible at its arrival
//! time and needs `burst` units of CPU time to finish. Once the simulator
//! completes it, the derived statistics are reported as a [`CompletedProcess`].
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process submitted for simulation.
///
/// Pids are opaque, caller-supplied identifiers. They are not required to be
/// unique, but reports treat them as such.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// The consumer defines what one unit means (e.g., a millisecond, a tick).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: String,
    /// Time at which the process becomes eligible to run (>= 0).
    pub arrival: i64,
    /// Total CPU time required (>= 1).
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(pid: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival,
            burst,
        }
    }
}

/// Completion statistics for a finished process.
///
/// Produced by the simulator exactly once per input process; immutable
/// afterwards. `remaining` is always zero on output and is kept so the
/// serialized record carries the full simulation state of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub pid: String,
    /// Arrival time, copied from the input.
    pub arrival: i64,
    /// Burst time, copied from the input.
    pub burst: i64,
    /// CPU time still required. Always 0 for a completed process.
    pub remaining: i64,
    /// Time at which the final run slice ended.
    pub completion: i64,
    /// `completion - arrival`. Always >= `burst`.
    pub turnaround: i64,
    /// `turnaround - burst` (time spent ready but not running). Always >= 0.
    pub waiting: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("P1", 3, 7);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
    }

    #[test]
    fn test_process_serde_field_names() {
        let p = Process::new("P1", 0, 4);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["pid"], "P1");
        assert_eq!(json["arrival"], 0);
        assert_eq!(json["burst"], 4);
    }

    #[test]
    fn test_completed_process_serde_round_trip() {
        let c = CompletedProcess {
            pid: "P2".into(),
            arrival: 1,
            burst: 3,
            remaining: 0,
            completion: 5,
            turnaround: 4,
            waiting: 1,
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: CompletedProcess = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pid, "P2");
        assert_eq!(back.completion, 5);
        assert_eq!(back.turnaround, 4);
        assert_eq!(back.waiting, 1);
    }
}
