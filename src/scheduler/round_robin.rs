//! Round-Robin simulator.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (ties keep input order).
//! 2. Admit every arrived process into a FIFO ready queue; each process is
//!    admitted exactly once.
//! 3. Dispatch the queue front for `min(quantum, remaining)` time units.
//! 4. After the clock advances, admit new arrivals *before* re-enqueueing
//!    the preempted process — a process arriving exactly as a quantum
//!    expires is placed ahead of the process that just ran.
//! 5. If the queue is empty but processes are still unadmitted, jump the
//!    clock to the next arrival.
//!
//! The simulation is deterministic and single-threaded; all state (clock,
//! queue, completed set) is local to one `simulate` call.
//!
//! # Complexity
//! O(total_burst / quantum) dispatch steps; admission is O(n) overall via a
//! cursor into the arrival-sorted order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SimulationError;
use crate::models::{CompletedProcess, Process, Slice, Timeline};
use crate::validation::validate_input;

/// Input container for a simulation.
///
/// Deserializes from the wire shape `{"processes": [...], "quantum": 2}`.
/// Both fields are optional on the wire: an absent process list is empty
/// and an absent quantum defaults to 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    #[serde(default)]
    pub processes: Vec<Process>,
    /// Time quantum (>= 1).
    #[serde(default = "default_quantum")]
    pub quantum: i64,
}

fn default_quantum() -> i64 {
    2
}

impl SimulationRequest {
    /// Creates a new simulation request.
    pub fn new(processes: Vec<Process>, quantum: i64) -> Self {
        Self { processes, quantum }
    }
}

/// Outcome of a simulation.
///
/// Carries the same information twice: `log` as human-readable lines and
/// `timeline` as structured slices. `completed` is ordered by completion
/// time and contains every input process exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-process completion statistics, ordered by completion time.
    pub completed: Vec<CompletedProcess>,
    /// Human-readable event log (run slices and completions).
    pub log: Vec<String>,
    /// Machine-readable execution trace.
    pub timeline: Timeline,
}

/// Round-Robin scheduler.
///
/// Grants each ready process at most `quantum` time units per dispatch,
/// cycling through the ready queue in strict FIFO order.
///
/// # Example
///
/// ```
/// use rr_sim::scheduler::RoundRobin;
/// use rr_sim::models::Process;
///
/// let processes = vec![Process::new("P1", 0, 4)];
/// let result = RoundRobin::new(10).simulate(&processes).unwrap();
/// assert_eq!(result.completed[0].completion, 4);
/// assert_eq!(result.completed[0].waiting, 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a scheduler with the given time quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The configured time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Runs a simulation from a request.
    pub fn simulate_request(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        Self::new(request.quantum).simulate(&request.processes)
    }

    /// Simulates the given processes under this scheduler's quantum.
    ///
    /// Validates input first; on failure returns
    /// [`SimulationError::InvalidInput`] with every violation and produces
    /// no partial results. The caller's process list is not mutated; all
    /// simulation state is local to this call.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        validate_input(processes, self.quantum).map_err(SimulationError::InvalidInput)?;

        debug!(
            count = processes.len(),
            quantum = self.quantum,
            "starting round-robin simulation"
        );

        // Arrival order, ties broken by input position (stable sort).
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| processes[i].arrival);

        // The ready queue holds indices into the input slice; mutable
        // per-process state lives in one backing vector.
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut completed: Vec<CompletedProcess> = Vec::with_capacity(processes.len());
        let mut log: Vec<String> = Vec::new();
        let mut timeline = Timeline::new();

        let mut time: i64 = 0;
        let mut next = 0; // cursor into `order`: first not-yet-admitted process

        // Admits every process arrived by `t`, in arrival order. The cursor
        // guarantees each process is admitted exactly once.
        let admit = |t: i64, next: &mut usize, queue: &mut VecDeque<usize>| {
            while *next < order.len() && processes[order[*next]].arrival <= t {
                queue.push_back(order[*next]);
                *next += 1;
            }
        };

        admit(time, &mut next, &mut queue);

        while completed.len() < processes.len() {
            let Some(idx) = queue.pop_front() else {
                // Queue drained but processes remain: the CPU is idle until
                // the next arrival. Everything sharing that arrival time is
                // admitted together on the retry.
                let wake = processes[order[next]].arrival;
                trace!(from = time, to = wake, "cpu idle until next arrival");
                time = wake;
                admit(time, &mut next, &mut queue);
                continue;
            };

            let p = &processes[idx];
            let run = self.quantum.min(remaining[idx]);
            trace!(pid = %p.pid, start = time, run, "dispatch");

            log.push(format!("Time {}-{}: {}", time, time + run, p.pid));
            timeline.push(Slice::new(p.pid.clone(), time, time + run));

            time += run;
            remaining[idx] -= run;

            // New arrivals go ahead of the preempted process.
            admit(time, &mut next, &mut queue);

            if remaining[idx] > 0 {
                queue.push_back(idx);
            } else {
                let turnaround = time - p.arrival;
                completed.push(CompletedProcess {
                    pid: p.pid.clone(),
                    arrival: p.arrival,
                    burst: p.burst,
                    remaining: 0,
                    completion: time,
                    turnaround,
                    waiting: turnaround - p.burst,
                });
                log.push(format!("Time {}: {} FINISHED", time, p.pid));
            }
        }

        debug!(makespan = timeline.makespan(), "simulation complete");

        Ok(SimulationResult {
            completed,
            log,
            timeline,
        })
    }
}
