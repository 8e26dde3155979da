use model::config::Config;
use model::generator::generate_instance;
use model::json_serialisation::load_dispatch_problem_instance_from_json;
use model::orders::Orders;
use model::travel_times::TravelTimes;
use solution::json_serialisation::dispatch_to_json;
use solution::Dispatch;
use solver::best_mover::BestMover;
use solver::greedy::Greedy;
use solver::Solver;

use gethostname::gethostname;
use std::sync::Arc;
use std::time as stdtime;

/// Solves the instance given as json with both heuristics and returns the
/// comparison report as json.
pub fn solve_instance(input_data: serde_json::Value) -> serde_json::Value {
    let start_time = stdtime::Instant::now();
    let (orders, travel_times, config) =
        match load_dispatch_problem_instance_from_json(input_data) {
            Ok(instance) => instance,
            Err(message) => return serde_json::json!({ "error": message }),
        };
    println!(
        "*** Instance with {} orders and {} movers loaded (elapsed time: {:0.2}sec) ***",
        orders.count(),
        config.mover_count,
        start_time.elapsed().as_secs_f32()
    );

    run_comparison(orders, travel_times, config)
}

/// Generates a deterministic synthetic instance and solves it with both
/// heuristics.
pub fn solve_generated_instance(
    order_count: usize,
    mover_count: usize,
    seed: u64,
) -> serde_json::Value {
    let generated = generate_instance(order_count, mover_count, seed);
    let orders = Orders::new(generated.target_times);
    let travel_times = TravelTimes::new(generated.travel_times, orders.count(), mover_count)
        .expect("generated matrix covers all orders and origins");
    println!(
        "*** Generated instance with {} orders and {} movers (seed {}) ***",
        orders.count(),
        mover_count,
        seed
    );

    run_comparison(
        Arc::new(orders),
        Arc::new(travel_times),
        Arc::new(Config::new(mover_count)),
    )
}

/// Runs both heuristics side by side over the shared read-only instance;
/// each solver owns its own pool and routes, so the runs are independent.
fn run_comparison(
    orders: Arc<Orders>,
    travel_times: Arc<TravelTimes>,
    config: Arc<Config>,
) -> serde_json::Value {
    let greedy = Greedy::initialize(orders.clone(), travel_times.clone(), config.clone());
    let best_mover = BestMover::initialize(orders, travel_times, config);

    let (greedy_result, best_mover_result) = rayon::join(
        || timed_solve("Greedy", &greedy),
        || timed_solve("BestMover", &best_mover),
    );

    serde_json::json!({
        "info": {
            "numberOfThreads": rayon::current_num_threads(),
            "timestamp": unix_timestamp(),
            "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
        },
        "greedy": solver_report(greedy_result),
        "bestMover": solver_report(best_mover_result),
    })
}

fn timed_solve<S: Solver>(name: &str, solver: &S) -> (Dispatch, stdtime::Duration) {
    let start_time = stdtime::Instant::now();
    let dispatch = solver.solve();
    let runtime_duration = start_time.elapsed();

    println!("\n*** {} ***", name);
    println!("{}", dispatch);
    println!(
        "*** {} assigned {} orders, cancelled {}, total cost {} (running time: {:0.2}sec) ***",
        name,
        dispatch.assigned_count(),
        dispatch.cancelled().len(),
        dispatch.total_cost(),
        runtime_duration.as_secs_f32()
    );
    (dispatch, runtime_duration)
}

fn solver_report((dispatch, runtime_duration): (Dispatch, stdtime::Duration)) -> serde_json::Value {
    serde_json::json!({
        "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
        "dispatch": dispatch_to_json(&dispatch),
    })
}

fn unix_timestamp() -> u64 {
    stdtime::SystemTime::now()
        .duration_since(stdtime::UNIX_EPOCH)
        .map(|since_epoch| since_epoch.as_secs())
        .unwrap_or(0)
}
