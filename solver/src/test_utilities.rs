use model::base_types::Cost;
use model::travel_times::Position;
use solution::test_utilities::TestInstance;
use solution::Dispatch;

use crate::cost;

/// Checks the structural invariants every dispatch must satisfy, no matter
/// which solver produced it: full coverage of all orders, the delivery-time
/// recurrence along every route, and a total cost that matches the
/// recomputed per-assignment costs plus one penalty per cancelled order.
pub(crate) fn assert_dispatch_is_valid(dispatch: &Dispatch, instance: &TestInstance) {
    assert!(dispatch.covers_every_order_exactly_once(instance.orders.count()));

    let mut recomputed_cost = Cost::ZERO;
    for route in dispatch.routes() {
        let mut last_position = Position::MoverOrigin(route.mover());
        let mut last_delivery_time = 0;
        for assignment in route.iter() {
            let (assignment_cost, delivery_time) = cost::evaluate(
                last_position,
                last_delivery_time,
                assignment.order(),
                &instance.orders,
                &instance.travel_times,
            );
            assert_eq!(assignment.scheduled_time(), delivery_time);
            assert_eq!(
                assignment.target_time(),
                instance.orders.target_time(assignment.order())
            );
            assert!(assignment_cost.is_finite());
            recomputed_cost = recomputed_cost + assignment_cost;
            last_position = Position::Order(assignment.order());
            last_delivery_time = delivery_time;
        }
    }
    for _ in dispatch.cancelled() {
        recomputed_cost = recomputed_cost + instance.config.cancellation_penalty;
    }
    assert_eq!(dispatch.total_cost(), recomputed_cost);
}
