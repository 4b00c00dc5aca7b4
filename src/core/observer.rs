use std::collections::BTreeMap;

use super::state::{Pid, SchedCtx, Task, Ticks};

/// Per-run bookkeeping: counts CPU service per pid and checks the engine's
/// invariants after every step in debug builds.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    service: BTreeMap<Pid, Ticks>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_service(&mut self, pid: Pid, ticks: Ticks) {
        *self.service.entry(pid).or_insert(0) += ticks;
    }

    pub fn observe<E: AsRef<Task> + AsMut<Task>>(&mut self, ctx: &SchedCtx<E>) {
        self.step += 1;

        if let Some(task) = ctx.running_task() {
            debug_assert!(
                task.remaining <= task.burst,
                "Task {} has {} ticks remaining of a {} tick burst",
                task.pid,
                task.remaining,
                task.burst
            );
        }

        if let [.., prev, last] = ctx.schedule.as_slice() {
            debug_assert!(
                prev.tick <= last.tick,
                "Switch to {} at tick {} recorded after tick {}",
                last.pid,
                last.tick,
                prev.tick
            );
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn into_service(self) -> BTreeMap<Pid, Ticks> {
        self.service
    }
}
