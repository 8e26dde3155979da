use model::base_types::{Cost, OrderIdx, Time};
use model::orders::Orders;
use model::travel_times::{Position, TravelTimes};

/// Evaluates a candidate assignment against a route tail.
///
/// Returns the step cost of the assignment together with the delivery time
/// the order would get. An assignment is infeasible (infinite cost) when it
/// would arrive more than 15 time units early or 60 or more late.
///
/// The range checks are deliberately asymmetric: a lateness of exactly -15
/// matches none of the ranges and falls through to zero cost, while exactly
/// +60 is already infeasible. Do not symmetrize.
pub fn evaluate(
    last_position: Position,
    last_delivery_time: Time,
    order: OrderIdx,
    orders: &Orders,
    travel_times: &TravelTimes,
) -> (Cost, Time) {
    let delivery_time = last_delivery_time + travel_times.travel_time(last_position, order);
    let lateness = delivery_time - orders.target_time(order);

    let cost = match lateness {
        l if l < -15 => Cost::Infinity,
        l if l > -15 && l < 15 => Cost::ZERO,
        l if (15..30).contains(&l) => Cost::from_value(1),
        l if (30..45).contains(&l) => Cost::from_value(2),
        l if (45..60).contains(&l) => Cost::from_value(3),
        l if l >= 60 => Cost::Infinity,
        _ => Cost::ZERO, // only lateness == -15 ends up here
    };

    (cost, delivery_time)
}
