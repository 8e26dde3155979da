use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::base_types::{Cost, CostValue, Time};
use crate::config::Config;
use crate::orders::Orders;
use crate::travel_times::TravelTimes;

type Integer = i64;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInstance {
    orders: Vec<JsonOrder>,
    mover_count: usize,
    travel_times: Vec<Vec<Integer>>,
    config: Option<JsonConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonOrder {
    id: usize,
    target_time: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonConfig {
    cancellation_penalty: Option<CostValue>,
}

/// Loads a dispatch problem instance from its json representation.
///
/// Fails fast on malformed input (unparsable json, out-of-order ids, a
/// matrix whose shape does not cover all orders and mover origins), so no
/// solver ever observes an inconsistent instance.
pub fn load_dispatch_problem_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Arc<Orders>, Arc<TravelTimes>, Arc<Config>), String> {
    let json_instance: JsonInstance = serde_json::from_value(input_data)
        .map_err(|e| format!("Could not parse instance: {}.", e))?;

    for (position, json_order) in json_instance.orders.iter().enumerate() {
        if json_order.id != position {
            return Err(format!(
                "Order ids must be consecutive starting at 0, found id {} at position {}.",
                json_order.id, position
            ));
        }
    }

    let target_times: Vec<Time> = json_instance.orders.iter().map(|o| o.target_time).collect();
    let orders = Orders::new(target_times);
    let travel_times = TravelTimes::new(
        json_instance.travel_times,
        orders.count(),
        json_instance.mover_count,
    )?;

    let mut config = Config::new(json_instance.mover_count);
    if let Some(penalty) = json_instance.config.and_then(|c| c.cancellation_penalty) {
        config.cancellation_penalty = Cost::from_value(penalty);
    }

    Ok((Arc::new(orders), Arc::new(travel_times), Arc::new(config)))
}
