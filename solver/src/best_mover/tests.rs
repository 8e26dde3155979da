use itertools::assert_equal;
use model::base_types::{Cost, MoverIdx, OrderIdx};
use model::generator::generate_instance;
use solution::test_utilities::{build_instance, single_mover_instance, TestInstance};
use solution::Dispatch;

use crate::best_mover::BestMover;
use crate::test_utilities::assert_dispatch_is_valid;
use crate::Solver;

fn solve(instance: &TestInstance) -> Dispatch {
    BestMover::initialize(
        instance.orders.clone(),
        instance.travel_times.clone(),
        instance.config.clone(),
    )
    .solve()
}

#[test]
fn single_mover_takes_all_three_orders() {
    let instance = single_mover_instance();

    let dispatch = solve(&instance);

    let route = dispatch.route_of(MoverIdx::from(0));
    assert_equal(
        route.iter().map(|a| a.order()),
        [OrderIdx::from(0), OrderIdx::from(2), OrderIdx::from(1)],
    );
    assert_equal(route.iter().map(|a| a.scheduled_time()), [10, 15, 20]);
    assert!(dispatch.cancelled().is_empty());
    assert_eq!(dispatch.total_cost(), Cost::ZERO);
    assert_dispatch_is_valid(&dispatch, &instance);
}

#[test]
fn order_goes_to_the_cheaper_mover() {
    // mover 0 would arrive 20 late (cost 1), mover 1 on time (cost 0)
    let instance = build_instance(
        vec![vec![0, 0, 0], vec![30, 0, 0], vec![12, 0, 0]],
        vec![10],
        2,
    );

    let dispatch = solve(&instance);

    assert!(dispatch.route_of(MoverIdx::from(0)).is_empty());
    assert_equal(
        dispatch.route_of(MoverIdx::from(1)).iter().map(|a| a.order()),
        [OrderIdx::from(0)],
    );
    assert_eq!(dispatch.total_cost(), Cost::ZERO);
    assert_dispatch_is_valid(&dispatch, &instance);
}

#[test]
fn cost_tie_goes_to_the_lowest_mover_index() {
    let instance = build_instance(
        vec![vec![0, 0, 0], vec![10, 0, 0], vec![10, 0, 0]],
        vec![10],
        2,
    );

    let dispatch = solve(&instance);

    assert_equal(
        dispatch.route_of(MoverIdx::from(0)).iter().map(|a| a.order()),
        [OrderIdx::from(0)],
    );
    assert!(dispatch.route_of(MoverIdx::from(1)).is_empty());
    assert_dispatch_is_valid(&dispatch, &instance);
}

#[test]
fn infeasible_front_order_does_not_block_later_orders() {
    // ord0 heads the pool but no mover can take it (95 late); the scan
    // skips it for good and still assigns ord1
    let instance = build_instance(
        vec![vec![0, 5, 0], vec![5, 0, 0], vec![100, 30, 0]],
        vec![5, 40],
        1,
    );

    let dispatch = solve(&instance);

    assert_equal(
        dispatch.route_of(MoverIdx::from(0)).iter().map(|a| a.order()),
        [OrderIdx::from(1)],
    );
    assert_eq!(dispatch.cancelled(), &[OrderIdx::from(0)]);
    assert_eq!(dispatch.total_cost(), Cost::from_value(10));
    assert_dispatch_is_valid(&dispatch, &instance);
}

#[test]
fn generated_instance_is_solved_deterministically() {
    let generated = generate_instance(40, 5, 7);
    let instance = build_instance(generated.travel_times, generated.target_times, 5);

    let first = solve(&instance);
    let second = solve(&instance);

    assert_eq!(first, second);
    assert_dispatch_is_valid(&first, &instance);
}

#[test]
fn both_heuristics_produce_valid_dispatches_on_the_same_instance() {
    // the two heuristics may disagree on routes and cost; both outputs
    // must still be structurally sound
    let generated = generate_instance(60, 6, 11);
    let instance = build_instance(generated.travel_times, generated.target_times, 6);

    let best_mover_dispatch = solve(&instance);
    let greedy_dispatch = crate::greedy::Greedy::initialize(
        instance.orders.clone(),
        instance.travel_times.clone(),
        instance.config.clone(),
    )
    .solve();

    assert_dispatch_is_valid(&best_mover_dispatch, &instance);
    assert_dispatch_is_valid(&greedy_dispatch, &instance);
}
