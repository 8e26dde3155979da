use serde::Serialize;

use model::base_types::{Idx, Time};

use crate::dispatch::Dispatch;

type Integer = i64;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonDispatch {
    routes: Vec<JsonRoute>,
    cancelled: Vec<Idx>,
    total_cost: Option<Integer>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonRoute {
    mover: Idx,
    orders: Vec<JsonAssignment>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonAssignment {
    id: Idx,
    target_time: Time,
    scheduled_time: Time,
}

pub fn dispatch_to_json(dispatch: &Dispatch) -> serde_json::Value {
    let json_dispatch = JsonDispatch {
        routes: dispatch
            .routes()
            .map(|route| JsonRoute {
                mover: route.mover().0,
                orders: route
                    .iter()
                    .map(|assignment| JsonAssignment {
                        id: assignment.order().0,
                        target_time: assignment.target_time(),
                        scheduled_time: assignment.scheduled_time(),
                    })
                    .collect(),
            })
            .collect(),
        cancelled: dispatch.cancelled().iter().map(|order| order.0).collect(),
        total_cost: dispatch
            .total_cost()
            .as_finite()
            .ok()
            .map(|cost| cost as Integer),
    };
    serde_json::to_value(json_dispatch).expect("dispatch serialisation cannot fail")
}
