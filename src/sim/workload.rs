use rand::prelude::*;

use super::process::ProcessDescriptor;
use crate::core::Ticks;

/// Parameters of a synthetic workload: at every tick a process arrives with
/// probability `p_arrival`, and is short with probability `p_short`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadSpec {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            ticks: 50,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }
}

/// Bernoulli arrivals over `spec.ticks` ticks. The result is sorted by
/// arrival time and ids are assigned in arrival order starting at 0.
pub fn bernoulli_jobs(spec: &WorkloadSpec) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut jobs = Vec::new();

    for t in 0..spec.ticks {
        if rng.random::<f64>() < spec.p_arrival {
            let burst = if rng.random::<f64>() < spec.p_short {
                spec.short_burst
            } else {
                spec.long_burst
            };

            jobs.push(ProcessDescriptor::new(jobs.len() as u64, t, burst));
        }
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_workload() {
        let spec = WorkloadSpec {
            ticks: 200,
            ..WorkloadSpec::default()
        };
        assert_eq!(bernoulli_jobs(&spec), bernoulli_jobs(&spec));
    }

    #[test]
    fn test_jobs_sorted_with_sequential_ids() {
        let spec = WorkloadSpec {
            ticks: 200,
            seed: 7,
            ..WorkloadSpec::default()
        };
        let jobs = bernoulli_jobs(&spec);

        assert!(jobs.is_sorted_by_key(|j| j.arrival_time));
        for (index, job) in jobs.iter().enumerate() {
            assert_eq!(job.id, index as u64);
            assert!(job.burst_time == spec.short_burst || job.burst_time == spec.long_burst);
            assert!(job.arrival_time < spec.ticks);
        }
    }

    #[test]
    fn test_certain_arrival_fills_every_tick() {
        let spec = WorkloadSpec {
            ticks: 10,
            p_arrival: 1.0,
            p_short: 1.0,
            ..WorkloadSpec::default()
        };
        let jobs = bernoulli_jobs(&spec);
        assert_eq!(jobs.len(), 10);
        assert!(jobs.iter().all(|j| j.burst_time == spec.short_burst));
    }
}
