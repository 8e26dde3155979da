use std::env;

use axum::extract::DefaultBodyLimit;

#[tokio::main]
pub async fn main() {
    // Parse command line arguments to get the port number
    let args: Vec<String> = env::args().collect();
    let port: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let app = axum::Router::new()
        .fallback(axum::routing::get(|| async {
            "No route! Use /health, /solve or /demo."
        }))
        .route("/health", axum::routing::get(healthy))
        .route("/solve", axum::routing::post(solve))
        .route("/demo", axum::routing::post(demo))
        .layer(DefaultBodyLimit::disable());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!(
        "Server running on port {} (http://localhost:{}/health)",
        port, port
    );
    axum::serve(listener, app).await.unwrap();
}

pub async fn healthy() -> &'static str {
    println!("Healthy");
    "Healthy"
}

pub async fn solve(
    axum::extract::Json(input_data): axum::extract::Json<serde_json::Value>,
) -> axum::response::Json<serde_json::Value> {
    println!("\n\n-------------------- New Request --------------------\n");
    let output = server::solve_instance(input_data);
    axum::response::Json(output)
}

/// Solves a synthetic instance; counts and seed can be overridden in the
/// request body.
pub async fn demo(
    axum::extract::Json(params): axum::extract::Json<serde_json::Value>,
) -> axum::response::Json<serde_json::Value> {
    println!("\n\n-------------------- New Request --------------------\n");
    let order_count = params.get("orders").and_then(|v| v.as_u64()).unwrap_or(205) as usize;
    let mover_count = params.get("movers").and_then(|v| v.as_u64()).unwrap_or(38) as usize;
    let seed = params.get("seed").and_then(|v| v.as_u64()).unwrap_or(0);
    let output = server::solve_generated_instance(order_count, mover_count, seed);
    axum::response::Json(output)
}
