//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use surveyhub_app::ports::{MentalHealthRepository, SocialMediaRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the record API with a `/health` check. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<MR, SR>(state: AppState<MR, SR>) -> Router
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
