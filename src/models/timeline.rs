//! Execution timeline model.
//!
//! A timeline is the machine-readable record of what the CPU did: one
//! [`Slice`] per dispatch, in execution order. Gaps between consecutive
//! slices are CPU idle time (no process had arrived yet).
//!
//! The same information the simulator renders as a human-readable log is
//! available here in structured form.

use serde::{Deserialize, Serialize};

/// One contiguous run of a process on the CPU.
///
/// Covers the half-open interval `[start, end)`. A process preempted by
/// quantum expiry produces multiple slices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Pid of the process that ran.
    pub pid: String,
    /// Slice start time.
    pub start: i64,
    /// Slice end time. Always > `start`.
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Slice duration (`end - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An execution timeline: dispatch slices in execution order.
///
/// Serializes transparently as a JSON array of slices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    /// Run slices, ordered by start time.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Latest end time across all slices (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// All slices for a given pid, in execution order.
    pub fn slices_for(&self, pid: &str) -> Vec<&Slice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// End of the final slice for a given pid (its completion time).
    pub fn completion_time_of(&self, pid: &str) -> Option<i64> {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// Total CPU time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration()).sum()
    }

    /// Intervals during which the CPU sat idle waiting for an arrival.
    ///
    /// Returns `(start, end)` pairs for every gap between consecutive
    /// slices, including a leading gap before the first slice when no
    /// process arrived at t=0.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for s in &self.slices {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = s.end;
        }
        gaps
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
