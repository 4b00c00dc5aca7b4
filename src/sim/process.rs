use serde::{Deserialize, Serialize};

use crate::core::{Pid, Task, Ticks};

/// Immutable input record describing one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl ProcessDescriptor {
    pub const fn new(id: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

impl From<&ProcessDescriptor> for Task {
    fn from(desc: &ProcessDescriptor) -> Self {
        Task::new(desc.id, desc.arrival_time, desc.burst_time)
    }
}

impl From<(Pid, Ticks, Ticks)> for ProcessDescriptor {
    fn from((id, arrival_time, burst_time): (Pid, Ticks, Ticks)) -> Self {
        Self::new(id, arrival_time, burst_time)
    }
}
