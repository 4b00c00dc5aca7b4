use crate::{
    core::{Observer, SchedCtx, SimulationResult, Task},
    error::{Result, SchedError},
    sim::ProcessDescriptor,
};

/// First-come-first-served: run each process to completion in input order.
///
/// The input is taken as already sorted by arrival; simultaneous arrivals are
/// served in the order given.
pub fn fcfs(jobs: &[ProcessDescriptor]) -> Result<SimulationResult> {
    if jobs.is_empty() {
        return Err(SchedError::empty_workload());
    }

    let mut ctx = SchedCtx::<Task>::new();
    let mut observer = Observer::new();

    for task in jobs.iter().map(Task::from) {
        // CPU idles until the next arrival
        if ctx.now < task.arrival {
            ctx.now = task.arrival;
        }

        let (pid, burst) = (task.pid, task.burst);
        ctx.set_running(task);
        ctx.advance_time(burst);
        observer.record_service(pid, burst);
        ctx.clear_cpu();
        observer.observe(&ctx);
    }

    SimulationResult::new(
        ctx.schedule,
        ctx.total_waiting,
        jobs.len(),
        observer.into_service(),
    )
}
