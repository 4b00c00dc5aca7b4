#![allow(dead_code)]

use std::collections::BTreeMap;

use sched_sim::{Pid, ProcessDescriptor, SimulationResult, Ticks};

pub fn jobs(triples: &[(Pid, Ticks, Ticks)]) -> Vec<ProcessDescriptor> {
    triples.iter().copied().map(ProcessDescriptor::from).collect()
}

/// Burst ticks requested per pid, summed over repeated instances.
pub fn requested_service(jobs: &[ProcessDescriptor]) -> BTreeMap<Pid, Ticks> {
    let mut service = BTreeMap::new();
    for job in jobs {
        *service.entry(job.id).or_insert(0) += job.burst_time;
    }
    service
}

pub fn assert_service_matches(jobs: &[ProcessDescriptor], result: &SimulationResult) {
    assert_eq!(result.service, requested_service(jobs), "CPU service per pid");
}
