//! History API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The dashboard frontend is served from a different origin, so the
//! router carries a CORS layer.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the history API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn history_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/patients/:id/history", get(endpoints::history::feed))
        .route(
            "/api/patients/:id/history/charts",
            get(endpoints::history::charts),
        )
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
