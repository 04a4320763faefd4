use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod route;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let app = Router::new()
        .route("/calendar", get(route::calendar::handler))
        .route("/calendar/restavfall", get(route::calendar::residual::handler))
        .route("/calendar/papir", get(route::calendar::paper::handler))
        .route(
            "/calendar/plastemballasje",
            get(route::calendar::plastic::handler),
        )
        .route("/calendar/matavfall", get(route::calendar::food::handler))
        .layer(TraceLayer::new_for_http());
    let addr = SocketAddr::from(([0, 0, 0, 0], 8008));
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
