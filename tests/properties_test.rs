/*!
 * Scheduler Property Tests
 * Invariants that hold for every discipline on arbitrary sorted workloads
 */

mod common;

use common::{jobs, requested_service};
use proptest::prelude::*;
use sched_sim::{Discipline, ProcessDescriptor, Ticks, fcfs, round_robin, sjf};

// Sorted workload with unique ids: (arrival gap, burst) per process
fn workload() -> impl Strategy<Value = Vec<ProcessDescriptor>> {
    proptest::collection::vec((0u64..4, 0u64..8), 1..12).prop_map(|specs| {
        let mut arrival = 0;
        let triples: Vec<(u64, Ticks, Ticks)> = specs
            .into_iter()
            .enumerate()
            .map(|(id, (gap, burst))| {
                arrival += gap;
                (id as u64, arrival, burst)
            })
            .collect();
        jobs(&triples)
    })
}

fn discipline() -> impl Strategy<Value = Discipline> {
    prop_oneof![
        Just(Discipline::Fcfs),
        (1u64..6).prop_map(|quantum| Discipline::RoundRobin { quantum }),
        Just(Discipline::Srtf),
        (0.0f64..=1.0).prop_map(|alpha| Discipline::Sjf { alpha }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn service_matches_burst(input in workload(), discipline in discipline()) {
        let result = discipline.run(&input).unwrap();
        prop_assert_eq!(&result.service, &requested_service(&input));
    }

    #[test]
    fn input_left_untouched(input in workload(), discipline in discipline()) {
        let before = input.clone();
        let _ = discipline.run(&input).unwrap();
        prop_assert_eq!(input, before);
    }

    #[test]
    fn every_process_is_switched_to(input in workload(), discipline in discipline()) {
        let result = discipline.run(&input).unwrap();
        for job in &input {
            let first = result.first_dispatch(job.id);
            prop_assert!(first.is_some(), "pid {} never ran", job.id);
            prop_assert!(first.unwrap_or(0) >= job.arrival_time);
        }
    }

    #[test]
    fn schedule_is_chronological(input in workload(), discipline in discipline()) {
        let result = discipline.run(&input).unwrap();
        prop_assert!(result.schedule.windows(2).all(|w| w[0].tick <= w[1].tick));
        prop_assert!(result.average_waiting_time.is_finite());
        prop_assert!(result.average_waiting_time >= 0.0);
    }

    #[test]
    fn runs_are_deterministic(input in workload(), discipline in discipline()) {
        prop_assert_eq!(discipline.run(&input).unwrap(), discipline.run(&input).unwrap());
    }

    #[test]
    fn quantum_above_every_burst_is_fcfs(input in workload()) {
        prop_assert_eq!(round_robin(&input, 8).unwrap(), fcfs(&input).unwrap());
    }

    #[test]
    fn sjf_without_history_is_fcfs(input in workload(), alpha in 0.0f64..=1.0) {
        prop_assert_eq!(sjf(&input, alpha).unwrap(), fcfs(&input).unwrap());
    }
}
