use tracing::debug;

use super::schedule::ScheduleEntry;

pub type Pid = u64;
pub type Ticks = u64;

/// Working copy of a process, owned by exactly one scheduler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub pid: Pid,
    // Re-stamped on preemption; only used for the next waiting-time accrual
    pub arrival: Ticks,
    pub burst: Ticks,
    pub remaining: Ticks,
}

impl Task {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            remaining: burst,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

impl AsRef<Task> for Task {
    fn as_ref(&self) -> &Task {
        self
    }
}

impl AsMut<Task> for Task {
    fn as_mut(&mut self) -> &mut Task {
        self
    }
}

/// Mutable simulation state shared by every discipline: the logical clock,
/// the single CPU slot, the accumulated waiting time and the emitted switches.
#[derive(Debug)]
pub struct SchedCtx<E> {
    pub now: Ticks,
    pub running: Option<E>,
    pub total_waiting: Ticks,
    pub schedule: Vec<ScheduleEntry>,
}

impl<E: AsRef<Task> + AsMut<Task>> SchedCtx<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            running: None,
            total_waiting: 0,
            schedule: Vec::new(),
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.running.is_none()
    }

    /// Put `entry` on the CPU, accruing the time it waited since its
    /// (possibly re-stamped) arrival and recording the switch.
    pub fn set_running(&mut self, entry: E) {
        debug_assert!(self.running.is_none(), "CPU already running a task");

        let task = entry.as_ref();
        // Unsorted input can dispatch a task before its arrival; saturate
        let waited = self.now.saturating_sub(task.arrival);
        self.total_waiting += waited;
        self.schedule.push(ScheduleEntry::new(self.now, task.pid));
        debug!(now = self.now, pid = task.pid, waited, "dispatch");

        self.running = Some(entry);
    }

    /// Take the running task off the CPU, re-stamping its arrival to now so
    /// its next wait is measured from this preemption.
    pub fn preempt(&mut self) -> Option<E> {
        let mut entry = self.running.take()?;
        entry.as_mut().arrival = self.now;
        debug!(now = self.now, pid = entry.as_ref().pid, "preempt");
        Some(entry)
    }

    pub fn clear_cpu(&mut self) -> Option<E> {
        self.running.take()
    }

    pub fn running_task(&self) -> Option<&Task> {
        self.running.as_ref().map(AsRef::as_ref)
    }
}

impl<E: AsRef<Task> + AsMut<Task>> Default for SchedCtx<E> {
    fn default() -> Self {
        Self::new()
    }
}
