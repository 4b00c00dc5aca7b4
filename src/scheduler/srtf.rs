use tracing::debug;

use super::Scheduler;
use crate::{
    core::{ReadyHeap, SchedCore, SchedCtx, SimulationResult, Task, Ticks},
    error::{Result, SchedError},
    sim::ProcessDescriptor,
};

fn remaining(task: &Task) -> Ticks {
    task.remaining
}

/// Preemptive shortest-remaining-time-first.
///
/// An arrival preempts the running task only when its *total* burst is
/// strictly below the running task's *remaining* burst. Ready tasks are
/// ordered by remaining burst, ties broken by enqueue order.
pub struct SrtfScheduler {
    ready: ReadyHeap<Task, Ticks>,
}

impl SrtfScheduler {
    pub fn new() -> Self {
        Self {
            ready: ReadyHeap::new(remaining),
        }
    }
}

impl Default for SrtfScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SrtfScheduler {
    type Entry = Task;

    fn enqueue(&mut self, ctx: &mut SchedCtx<Task>, task: Task) {
        let running_remaining = ctx.running_task().map(|t| t.remaining);

        match running_remaining {
            None => ctx.set_running(task),
            Some(left) if task.burst < left => {
                debug!(
                    now = ctx.now,
                    pid = task.pid,
                    burst = task.burst,
                    left,
                    "arrival preempts running task"
                );
                if let Some(preempted) = ctx.preempt() {
                    self.ready.push(preempted);
                }
                ctx.set_running(task);
            }
            Some(_) => self.ready.push(task),
        }
    }

    fn dispatch(&mut self, _ctx: &mut SchedCtx<Task>) -> Option<Task> {
        self.ready.pop()
    }

    fn has_queued(&self) -> bool {
        !self.ready.is_empty()
    }
}

/// Shortest-remaining-time-first. Fails with `InvalidParameter` when there
/// are no processes.
pub fn srtf(jobs: &[ProcessDescriptor]) -> Result<SimulationResult> {
    if jobs.is_empty() {
        return Err(SchedError::empty_workload());
    }

    SchedCore::new(SrtfScheduler::new(), jobs.iter().map(Task::from)).run()
}
