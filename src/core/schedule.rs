use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::{Pid, Ticks};
use crate::error::{Result, SchedError};

/// "At `tick` the CPU switches to `pid`."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub tick: Ticks,
    pub pid: Pid,
}

impl ScheduleEntry {
    pub fn new(tick: Ticks, pid: Pid) -> Self {
        Self { tick, pid }
    }
}

impl From<(Ticks, Pid)> for ScheduleEntry {
    fn from((tick, pid): (Ticks, Pid)) -> Self {
        Self::new(tick, pid)
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tick, self.pid)
    }
}

/// Outcome of one scheduler run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub schedule: Vec<ScheduleEntry>,
    pub average_waiting_time: f64,
    /// Ticks each pid spent on the CPU, summed over all of its instances.
    pub service: BTreeMap<Pid, Ticks>,
}

impl SimulationResult {
    pub fn new(
        schedule: Vec<ScheduleEntry>,
        total_waiting: Ticks,
        num_processes: usize,
        service: BTreeMap<Pid, Ticks>,
    ) -> Result<Self> {
        if num_processes == 0 {
            return Err(SchedError::empty_workload());
        }

        Ok(Self {
            schedule,
            average_waiting_time: total_waiting as f64 / num_processes as f64,
            service,
        })
    }

    /// The switch sequence as plain `(tick, pid)` pairs.
    pub fn pairs(&self) -> Vec<(Ticks, Pid)> {
        self.schedule.iter().map(|e| (e.tick, e.pid)).collect()
    }

    /// First tick at which `pid` got the CPU.
    pub fn first_dispatch(&self, pid: Pid) -> Option<Ticks> {
        self.schedule.iter().find(|e| e.pid == pid).map(|e| e.tick)
    }
}
