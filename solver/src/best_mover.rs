#[cfg(test)]
mod tests;

use std::sync::Arc;

use model::base_types::{Cost, MoverIdx, OrderIdx, Time};
use model::config::Config;
use model::orders::Orders;
use model::travel_times::TravelTimes;
use solution::{Assignment, Dispatch, Route};

use crate::cost;
use crate::order_pool::OrderPool;
use crate::Solver;

/// Assigns orders in pool order; each order goes to whichever mover
/// currently takes it cheapest, considering all movers' route tails.
///
/// An order no mover can feasibly take is skipped for good and becomes a
/// cancellation candidate; the scan does not return to it. This typically
/// produces different routes and a different total cost than `Greedy` on
/// the same instance.
pub struct BestMover {
    orders: Arc<Orders>,
    travel_times: Arc<TravelTimes>,
    config: Arc<Config>,
}

impl Solver for BestMover {
    fn initialize(
        orders: Arc<Orders>,
        travel_times: Arc<TravelTimes>,
        config: Arc<Config>,
    ) -> BestMover {
        BestMover {
            orders,
            travel_times,
            config,
        }
    }

    fn solve(&self) -> Dispatch {
        let mut pool = OrderPool::initialize(&self.orders);
        let mut routes: Vec<Route> = self.config.movers().map(Route::empty).collect();
        let mut total_cost = Cost::ZERO;

        let mut cursor = 0;
        while cursor < pool.active_count() {
            let order = pool.get_active(cursor);
            match self.find_best_mover(order, &routes) {
                Some((mover, assignment_cost, delivery_time)) => {
                    routes[mover.idx()].push(Assignment::new(
                        order,
                        self.orders.target_time(order),
                        delivery_time,
                    ));
                    pool.retire(order);
                    total_cost = total_cost + assignment_cost;
                    // retiring splices the order out of the prefix, so the
                    // cursor already addresses the next active order
                }
                None => cursor += 1, // skipped for good, cancellation candidate
            }
        }

        let cancelled = pool.remaining_active();
        for _ in &cancelled {
            total_cost = total_cost + self.config.cancellation_penalty;
        }

        Dispatch::new(routes, cancelled, total_cost)
    }
}

impl BestMover {
    /// The cheapest mover for the order given all movers' current route
    /// tails, or `None` if every mover is infeasible. Ties go to the lowest
    /// mover index.
    fn find_best_mover(
        &self,
        order: OrderIdx,
        routes: &[Route],
    ) -> Option<(MoverIdx, Cost, Time)> {
        let mut best: Option<(MoverIdx, Cost, Time)> = None;
        for route in routes {
            let (last_position, last_delivery_time) = route.last_position();
            let (candidate_cost, delivery_time) = cost::evaluate(
                last_position,
                last_delivery_time,
                order,
                &self.orders,
                &self.travel_times,
            );
            if candidate_cost.is_finite()
                && best.map_or(true, |(_, best_cost, _)| candidate_cost < best_cost)
            {
                best = Some((route.mover(), candidate_cost, delivery_time));
            }
        }
        best
    }
}
