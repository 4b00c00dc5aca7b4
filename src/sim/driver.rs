use tracing::{info, info_span, warn};

use super::process::ProcessDescriptor;
use crate::{
    core::SimulationResult,
    error::{Result, SchedError},
    scheduler::Discipline,
};

/// A fixed workload that any discipline can be replayed against.
///
/// Every run borrows the workload immutably and works on its own copies, so
/// runs are independent and the workload is never altered.
#[derive(Debug, Clone)]
pub struct Sim {
    jobs: Vec<ProcessDescriptor>,
}

impl Sim {
    /// Keeps the given order; schedulers expect it sorted by arrival time.
    pub fn new(jobs: Vec<ProcessDescriptor>) -> Result<Self> {
        if jobs.is_empty() {
            return Err(SchedError::empty_workload());
        }

        let sim = Self { jobs };
        if !sim.is_arrival_sorted() {
            warn!("workload is not sorted by arrival time; admission order is unspecified");
        }
        Ok(sim)
    }

    /// Stable-sorts by arrival time, so simultaneous arrivals keep their
    /// relative order.
    pub fn sorted(mut jobs: Vec<ProcessDescriptor>) -> Result<Self> {
        jobs.sort_by_key(|job| job.arrival_time);
        Self::new(jobs)
    }

    pub fn jobs(&self) -> &[ProcessDescriptor] {
        &self.jobs
    }

    pub fn is_arrival_sorted(&self) -> bool {
        self.jobs.is_sorted_by_key(|job| job.arrival_time)
    }

    pub fn run(&self, discipline: Discipline) -> Result<SimulationResult> {
        let _span = info_span!("simulate", %discipline).entered();
        let result = discipline.run(&self.jobs)?;
        info!(
            switches = result.schedule.len(),
            average_waiting_time = result.average_waiting_time,
            "simulation complete"
        );
        Ok(result)
    }

    /// Runs each discipline in turn, stopping at the first failure.
    pub fn run_all(
        &self,
        disciplines: impl IntoIterator<Item = Discipline>,
    ) -> Result<Vec<(Discipline, SimulationResult)>> {
        disciplines
            .into_iter()
            .map(|discipline| Ok((discipline, self.run(discipline)?)))
            .collect()
    }

    /// Ticks from each process's arrival to its first time on the CPU.
    pub fn response_times<'a>(
        &'a self,
        result: &'a SimulationResult,
    ) -> impl Iterator<Item = f64> + 'a {
        self.jobs.iter().filter_map(|job| {
            result
                .first_dispatch(job.id)
                .map(|tick| tick.saturating_sub(job.arrival_time) as f64)
        })
    }
}
