//! Axum router construction
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin clients and request tracing on every route.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete router.
///
/// - `GET /competitors` -- competitor registry
/// - `POST /competitors` -- add a competitor (`?name=`)
/// - `PUT /competitors/{id}` -- rename a competitor
/// - `DELETE /competitors/{id}` -- remove a competitor
/// - `POST /simulate` -- run a race (`?count=&distance=`)
/// - `GET /race` -- last race summary
/// - `GET /history` -- last race history
///
/// CORS allows any origin for development. In production this should
/// be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/competitors",
            get(handlers::list_competitors).post(handlers::add_competitor),
        )
        .route(
            "/competitors/{id}",
            put(handlers::rename_competitor).delete(handlers::delete_competitor),
        )
        .route("/simulate", post(handlers::simulate))
        .route("/race", get(handlers::latest_race))
        .route("/history", get(handlers::race_history))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
