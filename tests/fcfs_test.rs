/*!
 * FCFS Tests
 * Run-to-completion scheduling in input order
 */

mod common;

use common::{assert_service_matches, jobs};
use pretty_assertions::assert_eq;
use sched_sim::fcfs;

#[test]
fn test_single_process() {
    let input = jobs(&[(1, 0, 5)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(result.pairs(), vec![(0, 1)]);
    assert_eq!(result.average_waiting_time, 0.0);
    assert_service_matches(&input, &result);
}

#[test]
fn test_second_process_waits_for_first() {
    let input = jobs(&[(1, 0, 5), (2, 1, 3)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(result.pairs(), vec![(0, 1), (5, 2)]);
    // ((0 - 0) + (5 - 1)) / 2
    assert_eq!(result.average_waiting_time, 2.0);
}

#[test]
fn test_clock_jumps_over_idle_gap() {
    let input = jobs(&[(1, 0, 2), (2, 5, 3)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(result.pairs(), vec![(0, 1), (5, 2)]);
    assert_eq!(result.average_waiting_time, 0.0);
}

#[test]
fn test_simultaneous_arrivals_keep_input_order() {
    let input = jobs(&[(5, 0, 3), (2, 0, 1)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(result.pairs(), vec![(0, 5), (3, 2)]);
    assert_eq!(result.average_waiting_time, 1.5);
}

#[test]
fn test_zero_burst_still_switches() {
    let input = jobs(&[(1, 0, 0), (2, 0, 3)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(result.pairs(), vec![(0, 1), (0, 2)]);
    assert_eq!(result.average_waiting_time, 0.0);
    assert_eq!(result.service.get(&1), Some(&0));
    assert_service_matches(&input, &result);
}

#[test]
fn test_longer_workload() {
    let input = jobs(&[(0, 0, 9), (1, 1, 8), (2, 2, 2), (3, 5, 2), (4, 30, 4)]);
    let result = fcfs(&input).unwrap();

    assert_eq!(
        result.pairs(),
        vec![(0, 0), (9, 1), (17, 2), (19, 3), (30, 4)]
    );
    // 0 + 8 + 15 + 14 + 0
    assert_eq!(result.average_waiting_time, 37.0 / 5.0);
    assert_service_matches(&input, &result);
}

#[test]
fn test_empty_input_is_invalid() {
    let err = fcfs(&[]).unwrap_err();
    assert!(err.is_invalid_parameter());
}
