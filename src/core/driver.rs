use std::collections::VecDeque;

use tracing::trace;

use super::{
    observer::Observer,
    schedule::SimulationResult,
    state::{SchedCtx, Task, Ticks},
};
use crate::{error::Result, scheduler::Scheduler};

/// Tick-by-tick engine shared by the RR, SRTF and SJF disciplines.
pub struct SchedCore<S: Scheduler> {
    pub ctx: SchedCtx<S::Entry>,
    pub scheduler: S,
    // Not yet arrived, in input order
    pending: VecDeque<Task>,
    num_processes: usize,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(scheduler: S, tasks: impl IntoIterator<Item = Task>) -> Self {
        let pending: VecDeque<Task> = tasks.into_iter().collect();
        let mut observer = Observer::new();
        for task in &pending {
            observer.record_service(task.pid, 0);
        }

        Self {
            ctx: SchedCtx::new(),
            scheduler,
            num_processes: pending.len(),
            pending,
            observer,
        }
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty() && !self.scheduler.has_queued() && self.ctx.cpu_is_idle()
    }

    pub fn step(&mut self) {
        self.skip_idle_gap();
        self.handle_arrivals();
        self.fill_cpu();

        // Execute the running task for one tick
        if let Some(entry) = self.ctx.running.as_mut() {
            let task = entry.as_mut();
            debug_assert!(task.remaining > 0, "Task {} ran with no burst left", task.pid);
            task.remaining = task.remaining.saturating_sub(1);
            let pid = task.pid;

            self.scheduler.tick(entry);
            self.observer.record_service(pid, 1);
            trace!(now = self.ctx.now, pid, "tick");
        }

        self.observer.observe(&self.ctx);
        self.ctx.advance_time(1);
    }

    pub fn run(mut self) -> Result<SimulationResult> {
        while !self.is_done() {
            self.step();
        }

        trace!(
            steps = self.observer.steps(),
            switches = self.ctx.schedule.len(),
            "simulation drained"
        );

        SimulationResult::new(
            self.ctx.schedule,
            self.ctx.total_waiting,
            self.num_processes,
            self.observer.into_service(),
        )
    }

    // Nothing runs until the next arrival, so jump the clock straight to it
    fn skip_idle_gap(&mut self) {
        if !self.ctx.cpu_is_idle() || self.scheduler.has_queued() {
            return;
        }

        if let Some(next) = self.pending.front().map(|task| task.arrival) {
            if next > self.ctx.now {
                trace!(from = self.ctx.now, to = next, "idle");
                self.ctx.advance_time(next - self.ctx.now);
            }
        }
    }

    fn handle_arrivals(&mut self) {
        let now = self.ctx.now;
        // Contiguous at the front, since input is sorted by arrival
        while let Some(task) = self.pending.front() {
            if task.arrival > now {
                break;
            }
            let Some(task) = self.pending.pop_front() else {
                break;
            };
            self.scheduler.enqueue(&mut self.ctx, task);
        }
    }

    // Let the scheduler retire or preempt the running task, then keep
    // dispatching until something with burst left holds the CPU. Zero-burst
    // tasks are switched to and retired within the same tick.
    fn fill_cpu(&mut self) {
        loop {
            self.scheduler.stopping(&mut self.ctx);
            if !self.ctx.cpu_is_idle() {
                return;
            }

            match self.scheduler.dispatch(&mut self.ctx) {
                Some(entry) => self.ctx.set_running(entry),
                None => return,
            }
        }
    }
}
