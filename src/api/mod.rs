//! REST API for event registration, category submissions, and
//! assessment.
//!
//! Events are created with their profile, category records are
//! submitted one by one, and `/calculate/{event_id}` assesses whatever
//! has arrived so far.

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::engine::Engine;
use crate::store::EventStore;

/// Application state shared across all request handlers.
///
/// The store carries its own interior lock; the engine is immutable.
pub struct AppState {
    pub store: EventStore,
    pub engine: Engine,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/events", post(handlers::create_event).get(handlers::list_events))
        .route("/events/{event_id}", get(handlers::get_event))
        .route(
            "/events/{event_id}/energy",
            post(handlers::post_energy).get(handlers::get_energy),
        )
        .route(
            "/events/{event_id}/transport",
            post(handlers::post_transport).get(handlers::get_transport),
        )
        .route(
            "/events/{event_id}/catering",
            post(handlers::post_catering).get(handlers::get_catering),
        )
        .route(
            "/events/{event_id}/accommodation",
            post(handlers::post_accommodation).get(handlers::get_accommodation),
        )
        .route(
            "/events/{event_id}/waste",
            post(handlers::post_waste).get(handlers::get_waste),
        )
        .route(
            "/events/{event_id}/communication",
            post(handlers::post_communication).get(handlers::get_communication),
        )
        .route(
            "/events/{event_id}/freight",
            post(handlers::post_freight).get(handlers::get_freight),
        )
        .route(
            "/events/{event_id}/amenities",
            post(handlers::post_amenities).get(handlers::get_amenities),
        )
        .route(
            "/events/{event_id}/purchases",
            post(handlers::post_purchases).get(handlers::get_purchases),
        )
        .route("/calculate/{event_id}", get(handlers::calculate))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
