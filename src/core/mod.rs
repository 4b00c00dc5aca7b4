pub mod driver;
pub mod observer;
pub mod ready;
pub mod schedule;
pub mod state;

pub use driver::SchedCore;
pub use observer::Observer;
pub use ready::ReadyHeap;
pub use schedule::{ScheduleEntry, SimulationResult};
pub use state::{Pid, SchedCtx, Task, Ticks};
