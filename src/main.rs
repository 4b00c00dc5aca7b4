use std::error::Error;
use std::fs;

use average::{Estimate, Mean};
use tracing::{debug, info};

use sched_sim::{
    Sim,
    config::{Action, OutputFormat, SimConfig, usage},
    logging::init_tracing,
    sim::{bernoulli_jobs, io},
};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let (config, action) = SimConfig::load()?;
    if action == Action::Help {
        let exe = std::env::args().next().unwrap_or_else(|| "sched_sim".into());
        print!("{}", usage(&exe));
        return Ok(());
    }

    let jobs = match &config.generate {
        Some(spec) => {
            info!(ticks = spec.ticks, seed = spec.seed, "generating workload");
            bernoulli_jobs(spec)
        }
        None => {
            info!(input = %config.input.display(), "reading workload");
            io::read_descriptors(&config.input)?
        }
    };

    for job in &jobs {
        debug!(
            id = job.id,
            arrival = job.arrival_time,
            burst = job.burst_time,
            "process"
        );
    }

    let sim = Sim::new(jobs)?;
    fs::create_dir_all(&config.output_dir)?;

    for (discipline, result) in sim.run_all(config.disciplines())? {
        let path = config.output_path(&discipline);
        io::write_result(&path, &result, config.format == OutputFormat::Json)?;

        // Time to first run
        let response = sim.response_times(&result).collect::<Mean>().estimate();
        info!(
            %discipline,
            path = %path.display(),
            "average waiting time {:.2} ticks, average response time {:.2} ticks",
            result.average_waiting_time,
            response
        );
    }

    Ok(())
}
