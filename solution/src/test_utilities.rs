use std::sync::Arc;

use model::base_types::Time;
use model::config::Config;
use model::orders::Orders;
use model::travel_times::TravelTimes;

pub struct TestInstance {
    pub orders: Arc<Orders>,
    pub travel_times: Arc<TravelTimes>,
    pub config: Arc<Config>,
}

pub fn build_instance(
    travel_times: Vec<Vec<Time>>,
    target_times: Vec<Time>,
    mover_count: usize,
) -> TestInstance {
    let orders = Orders::new(target_times);
    let travel_times = TravelTimes::new(travel_times, orders.count(), mover_count).unwrap();
    TestInstance {
        orders: Arc::new(orders),
        travel_times: Arc::new(travel_times),
        config: Arc::new(Config::new(mover_count)),
    }
}

/// Three orders and one mover: origin legs [10, 25, 12], every inter-order
/// leg 5, targets [10, 20, 15]. All three orders fit into one route at zero
/// cost.
pub fn single_mover_instance() -> TestInstance {
    build_instance(
        vec![
            vec![0, 5, 5, 0],
            vec![5, 0, 5, 0],
            vec![5, 5, 0, 0],
            vec![10, 25, 12, 0],
        ],
        vec![10, 20, 15],
        1,
    )
}
