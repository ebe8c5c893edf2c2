//! Simulation quality metrics.
//!
//! Aggregate performance indicators derived from a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Max Waiting | Largest single wait |
//! | Makespan | Latest completion time |
//! | Total Idle | Time the CPU spent waiting for arrivals |
//! | CPU Utilization | busy_time / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::SimulationResult;

/// Aggregate performance indicators for one simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean turnaround time across completed processes.
    pub avg_turnaround: f64,
    /// Mean waiting time across completed processes.
    pub avg_waiting: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total CPU idle time within the makespan.
    pub total_idle: i64,
    /// Fraction of the makespan spent running processes (0.0..1.0).
    pub cpu_utilization: f64,
}

impl SimulationMetrics {
    /// Computes metrics from a simulation result.
    ///
    /// An empty result yields all-zero metrics.
    pub fn calculate(result: &SimulationResult) -> Self {
        let makespan = result.timeline.makespan();
        let busy = result.timeline.busy_time();

        let count = result.completed.len();
        let (mut total_turnaround, mut total_waiting, mut max_waiting) = (0i64, 0i64, 0i64);
        for c in &result.completed {
            total_turnaround += c.turnaround;
            total_waiting += c.waiting;
            max_waiting = max_waiting.max(c.waiting);
        }

        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / count as f64,
                total_waiting as f64 / count as f64,
            )
        };

        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            busy as f64 / makespan as f64
        };

        Self {
            avg_turnaround,
            avg_waiting,
            max_waiting,
            makespan,
            total_idle: makespan - busy,
            cpu_utilization,
        }
    }

    /// Whether the simulation meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::RoundRobin;

    fn run(processes: Vec<Process>, quantum: i64) -> SimulationResult {
        RoundRobin::new(quantum).simulate(&processes).unwrap()
    }

    #[test]
    fn test_metrics_two_process_workload() {
        // Trace: P1 [0,2) [4,6) [7,8), P2 [2,4) [6,7).
        // P2: turnaround 6, waiting 3. P1: turnaround 8, waiting 3.
        let result = run(
            vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)],
            2,
        );
        let m = SimulationMetrics::calculate(&result);

        assert_eq!(m.makespan, 8);
        assert_eq!(m.total_idle, 0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.avg_turnaround - 7.0).abs() < 1e-10);
        assert!((m.avg_waiting - 3.0).abs() < 1e-10);
        assert_eq!(m.max_waiting, 3);
    }

    #[test]
    fn test_metrics_with_idle_gap() {
        // P1 [0,2), idle [2,10), P2 [10,13).
        let result = run(
            vec![Process::new("P1", 0, 2), Process::new("P2", 10, 3)],
            5,
        );
        let m = SimulationMetrics::calculate(&result);

        assert_eq!(m.makespan, 13);
        assert_eq!(m.total_idle, 8);
        assert!((m.cpu_utilization - 5.0 / 13.0).abs() < 1e-10);
        assert_eq!(m.max_waiting, 0);
    }

    #[test]
    fn test_metrics_empty() {
        let result = run(vec![], 2);
        let m = SimulationMetrics::calculate(&result);
        assert_eq!(m.makespan, 0);
        assert_eq!(m.total_idle, 0);
        assert!((m.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let result = run(
            vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)],
            2,
        );
        let m = SimulationMetrics::calculate(&result);
        assert!(m.meets_thresholds(3.0, 1.0));
        assert!(!m.meets_thresholds(2.9, 0.0));
        assert!(!m.meets_thresholds(10.0, 1.1));
    }
}
