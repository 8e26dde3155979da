
use std::sync::Arc;

use model::base_types::{Cost, OrderIdx, Time};
use model::config::Config;
use model::orders::Orders;
use model::travel_times::TravelTimes;
use solution::{Assignment, Dispatch, Route};

use crate::cost;
use crate::order_pool::OrderPool;
use crate::Solver;

/// Fills one mover at a time, each to exhaustion.
///
/// A mover keeps taking the cheapest currently active order until no active
/// order is feasible for it; only then does the next mover start. Orders no
/// mover could take are cancelled at the configured penalty.
pub struct Greedy {
    orders: Arc<Orders>,
    travel_times: Arc<TravelTimes>,
    config: Arc<Config>,
}

impl Solver for Greedy {
    fn initialize(
        orders: Arc<Orders>,
        travel_times: Arc<TravelTimes>,
        config: Arc<Config>,
    ) -> Greedy {
        Greedy {
            orders,
            travel_times,
            config,
        }
    }

    fn solve(&self) -> Dispatch {
        let mut pool = OrderPool::initialize(&self.orders);
        let mut routes: Vec<Route> = self.config.movers().map(Route::empty).collect();

        let mut total_cost = Cost::ZERO;
        for route in routes.iter_mut() {
            total_cost = total_cost + self.fill_route(route, &mut pool);
        }

        let cancelled = pool.remaining_active();
        for _ in &cancelled {
            total_cost = total_cost + self.config.cancellation_penalty;
        }

        Dispatch::new(routes, cancelled, total_cost)
    }
}

impl Greedy {
    /// Keeps assigning the cheapest active order to this route until every
    /// active order is infeasible for the route tail. Returns the cost of
    /// the assignments made. The first of several equally cheap orders wins,
    /// which favors earlier target times through the pool ordering.
    fn fill_route(&self, route: &mut Route, pool: &mut OrderPool) -> Cost {
        let mut cost_of_route = Cost::ZERO;
        while pool.active_count() > 0 {
            let (last_position, last_delivery_time) = route.last_position();

            let mut min_cost = Cost::Infinity;
            let mut best: Option<(OrderIdx, Time)> = None;
            for order in pool.iter_active() {
                let (candidate_cost, delivery_time) = cost::evaluate(
                    last_position,
                    last_delivery_time,
                    order,
                    &self.orders,
                    &self.travel_times,
                );
                if candidate_cost < min_cost {
                    min_cost = candidate_cost;
                    best = Some((order, delivery_time));
                }
            }

            let (order, delivery_time) = match best {
                Some(best) => best,
                None => break, // nothing feasible left for this mover
            };

            route.push(Assignment::new(
                order,
                self.orders.target_time(order),
                delivery_time,
            ));
            pool.retire(order);
            cost_of_route = cost_of_route + min_cost;
        }
        cost_of_route
    }
}
