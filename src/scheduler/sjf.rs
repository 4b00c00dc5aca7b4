use tracing::debug;

use super::{
    Scheduler,
    predictor::{Prediction, Predictor},
};
use crate::{
    core::{ReadyHeap, SchedCore, SchedCtx, SimulationResult, Task},
    error::{Result, SchedError},
    sim::ProcessDescriptor,
};

#[derive(Debug, Clone)]
pub struct SjfEntry {
    pub task: Task,
    pub predicted: Prediction,
}

impl AsRef<Task> for SjfEntry {
    fn as_ref(&self) -> &Task {
        &self.task
    }
}

impl AsMut<Task> for SjfEntry {
    fn as_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}

fn predicted(entry: &SjfEntry) -> Prediction {
    entry.predicted
}

/// Non-preemptive shortest-job-first driven by predicted bursts only.
///
/// The true burst decides how long a selected task runs and feeds the
/// predictor once it completes; it is never consulted when choosing.
pub struct SjfScheduler {
    ready: ReadyHeap<SjfEntry, Prediction>,
    predictor: Predictor,
}

impl SjfScheduler {
    pub fn new(alpha: f64) -> Result<Self> {
        Ok(Self {
            ready: ReadyHeap::new(predicted),
            predictor: Predictor::new(alpha)?,
        })
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }
}

impl Scheduler for SjfScheduler {
    type Entry = SjfEntry;

    fn enqueue(&mut self, ctx: &mut SchedCtx<SjfEntry>, task: Task) {
        let prediction = self.predictor.on_arrival(task.pid);
        let pid = task.pid;

        // Queued instances of this pid follow the updated record
        let rekeyed = self
            .ready
            .update_where(|e| e.task.pid == pid, |e| e.predicted = prediction);
        debug!(now = ctx.now, pid, predicted = prediction.0, rekeyed, "arrival");

        let entry = SjfEntry {
            task,
            predicted: prediction,
        };
        if ctx.cpu_is_idle() {
            ctx.set_running(entry);
        } else {
            self.ready.push(entry);
        }
    }

    fn stopping(&mut self, ctx: &mut SchedCtx<SjfEntry>) {
        if !ctx.running_task().is_some_and(Task::is_complete) {
            return;
        }

        // Zero-burst instances never tick, so their completion lands here
        if let Some(done) = ctx.clear_cpu() {
            if done.task.burst == 0 {
                self.predictor.on_completion(done.task.pid, 0);
            }
        }
    }

    fn dispatch(&mut self, _ctx: &mut SchedCtx<SjfEntry>) -> Option<SjfEntry> {
        self.ready.pop()
    }

    // Record the burst on the final tick so an arrival of the same pid on
    // the next tick is already smoothed with it
    fn tick(&mut self, entry: &mut SjfEntry) {
        if entry.task.is_complete() {
            self.predictor.on_completion(entry.task.pid, entry.task.burst);
        }
    }

    fn has_queued(&self) -> bool {
        !self.ready.is_empty()
    }
}

/// Predictive shortest-job-first with smoothing constant `alpha`. Fails with
/// `InvalidParameter` when `alpha` is outside `[0, 1]` or there are no
/// processes.
pub fn sjf(jobs: &[ProcessDescriptor], alpha: f64) -> Result<SimulationResult> {
    let scheduler = SjfScheduler::new(alpha)?;
    if jobs.is_empty() {
        return Err(SchedError::empty_workload());
    }

    SchedCore::new(scheduler, jobs.iter().map(Task::from)).run()
}
