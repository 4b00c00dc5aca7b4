use std::collections::VecDeque;
use std::num::NonZeroU64;

use super::Scheduler;
use crate::{
    core::{SchedCore, SchedCtx, SimulationResult, Task, Ticks},
    error::{Result, SchedError},
    sim::ProcessDescriptor,
};

#[derive(Debug, Clone)]
pub struct RrEntry {
    pub task: Task,
    // Ticks left in the current quantum
    pub slice: Ticks,
}

impl AsRef<Task> for RrEntry {
    fn as_ref(&self) -> &Task {
        &self.task
    }
}

impl AsMut<Task> for RrEntry {
    fn as_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}

/// Round robin over a single FIFO ready queue. Arrivals join the tail and
/// never cut a running quantum short.
pub struct RoundRobinScheduler {
    ready: VecDeque<RrEntry>,
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: Ticks) -> Result<Self> {
        let quantum = NonZeroU64::new(quantum).ok_or_else(|| {
            SchedError::invalid_parameter("quantum", "time quantum must be a positive integer")
        })?;

        Ok(Self {
            ready: VecDeque::new(),
            quantum,
        })
    }
}

impl Scheduler for RoundRobinScheduler {
    type Entry = RrEntry;

    fn enqueue(&mut self, _ctx: &mut SchedCtx<RrEntry>, task: Task) {
        self.ready.push_back(RrEntry { task, slice: 0 });
    }

    fn stopping(&mut self, ctx: &mut SchedCtx<RrEntry>) {
        let Some(entry) = ctx.running.as_ref() else {
            return;
        };

        // Completion wins over an expired slice
        if entry.task.is_complete() {
            ctx.clear_cpu();
        } else if entry.slice == 0 {
            if let Some(entry) = ctx.preempt() {
                self.ready.push_back(entry);
            }
        }
    }

    fn dispatch(&mut self, _ctx: &mut SchedCtx<RrEntry>) -> Option<RrEntry> {
        let mut entry = self.ready.pop_front()?;
        entry.slice = self.quantum.get();
        Some(entry)
    }

    fn tick(&mut self, entry: &mut RrEntry) {
        entry.slice = entry.slice.saturating_sub(1);
    }

    fn has_queued(&self) -> bool {
        !self.ready.is_empty()
    }
}

/// Round-robin with a fixed `quantum`. Fails with `InvalidParameter` when the
/// quantum is below 1 or there are no processes.
pub fn round_robin(jobs: &[ProcessDescriptor], quantum: Ticks) -> Result<SimulationResult> {
    let scheduler = RoundRobinScheduler::new(quantum)?;
    if jobs.is_empty() {
        return Err(SchedError::empty_workload());
    }

    SchedCore::new(scheduler, jobs.iter().map(Task::from)).run()
}
