pub mod best_mover;
pub mod cost;
pub mod greedy;
pub mod order_pool;

#[cfg(test)]
mod test_utilities;

use model::config::Config;
use model::orders::Orders;
use model::travel_times::TravelTimes;
use solution::Dispatch;
use std::sync::Arc;

pub trait Solver {
    fn initialize(
        orders: Arc<Orders>,
        travel_times: Arc<TravelTimes>,
        config: Arc<Config>,
    ) -> Self;

    fn solve(&self) -> Dispatch;
}
