pub mod fcfs;
pub mod predictor;
pub mod rr;
pub mod sjf;
pub mod srtf;

use std::fmt;

use crate::{
    core::{SchedCtx, SimulationResult, Task, Ticks},
    error::Result,
    sim::ProcessDescriptor,
};
pub use fcfs::fcfs;
pub use predictor::{DEFAULT_PREDICTION, Prediction, PredictionRecord, Predictor};
pub use rr::{RoundRobinScheduler, round_robin};
pub use sjf::{SjfScheduler, sjf};
pub use srtf::{SrtfScheduler, srtf};

/// Policy hooks called by [`crate::core::SchedCore`] once per tick, in order:
/// `enqueue` for each arrival, `stopping`, then `dispatch` while the CPU is
/// idle, then `tick` if something ran.
pub trait Scheduler {
    type Entry: AsRef<Task> + AsMut<Task>;

    /// Admit a task arriving at `ctx.now`. Preemptive policies may swap the
    /// running entry here.
    fn enqueue(&mut self, ctx: &mut SchedCtx<Self::Entry>, task: Task);

    /// Take the running entry off the CPU if it is done or must yield.
    fn stopping(&mut self, ctx: &mut SchedCtx<Self::Entry>) {
        if ctx.running_task().is_some_and(Task::is_complete) {
            ctx.clear_cpu();
        }
    }

    /// Pick the next entry for an idle CPU.
    fn dispatch(&mut self, ctx: &mut SchedCtx<Self::Entry>) -> Option<Self::Entry>;

    /// The running entry consumed one tick.
    fn tick(&mut self, _entry: &mut Self::Entry) {}

    fn has_queued(&self) -> bool;
}

/// Scheduling discipline together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discipline {
    Fcfs,
    RoundRobin { quantum: Ticks },
    Srtf,
    Sjf { alpha: f64 },
}

impl Discipline {
    /// The four disciplines in reporting order.
    pub fn all(quantum: Ticks, alpha: f64) -> [Discipline; 4] {
        [
            Self::Fcfs,
            Self::RoundRobin { quantum },
            Self::Srtf,
            Self::Sjf { alpha },
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::RoundRobin { .. } => "RR",
            Self::Srtf => "SRTF",
            Self::Sjf { .. } => "SJF",
        }
    }

    pub fn run(&self, jobs: &[ProcessDescriptor]) -> Result<SimulationResult> {
        match *self {
            Self::Fcfs => fcfs(jobs),
            Self::RoundRobin { quantum } => round_robin(jobs, quantum),
            Self::Srtf => srtf(jobs),
            Self::Sjf { alpha } => sjf(jobs, alpha),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "RR(quantum={quantum})"),
            Self::Sjf { alpha } => write!(f, "SJF(alpha={alpha})"),
            other => f.write_str(other.name()),
        }
    }
}
