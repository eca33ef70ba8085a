//! Admin API handler modules.

pub mod adapt;

use axum::Router;
use axum::routing::any;

use crate::state::AppState;

/// Build the admin API router.
///
/// `/adapt` is routed for every method so that the handler can answer
/// non-`POST` requests with a JSON error body.
pub fn routes() -> Router<AppState> {
    Router::new().route("/adapt", any(adapt::adapt))
}
