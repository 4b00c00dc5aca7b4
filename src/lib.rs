//! Discrete-time CPU scheduling simulator.
//!
//! A workload of [`ProcessDescriptor`]s is replayed under one of four
//! disciplines (FCFS, round robin, SRTF, predictive SJF), each producing the
//! sequence of context switches and the average waiting time. The schedulers
//! are pure: they borrow the workload and never perform I/O.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Pid, ScheduleEntry, SimulationResult, Ticks};
pub use error::{Result, SchedError};
pub use scheduler::{Discipline, Scheduler, fcfs, round_robin, sjf, srtf};
pub use sim::{ProcessDescriptor, Sim};
