//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{CreateEventResponse, ErrorResponse, EventResponse};
use crate::calc::Category;
use crate::event::{
    AccommodationInput, AmenitiesInput, CateringInput, CommunicationInput, EnergyInput,
    EventProfile, FreightInput, PurchasesInput, TransportInput, WasteInput,
};
use crate::report::EmissionReport;
use crate::store::{CategoryRecord, StoreError};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn store_error(e: StoreError) -> ApiError {
    let status = match e {
        StoreError::EventNotFound(_) | StoreError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::AlreadySubmitted { .. } => StatusCode::CONFLICT,
        StoreError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Registers a new event.
///
/// `POST /events` → 201 + `CreateEventResponse` JSON
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<EventProfile>,
) -> Result<(StatusCode, Json<CreateEventResponse>), ApiError> {
    let event_id = state.store.create_event(profile).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(CreateEventResponse { event_id })))
}

/// Lists all events, newest first.
///
/// `GET /events` → 200 + `Vec<EventResponse>` JSON
pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.store.list_events().map_err(store_error)?;
    Ok(Json(events.iter().map(EventResponse::from).collect()))
}

/// Returns one event's profile and submission status.
///
/// `GET /events/{event_id}` → 200 + `EventResponse` JSON, 404 if unknown
pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let stored = state.store.get_event(&event_id).map_err(store_error)?;
    Ok(Json(EventResponse::from(&stored)))
}

/// Assesses the event from whatever records have been submitted.
///
/// `GET /calculate/{event_id}` → 200 + `EmissionReport` JSON, 404 if unknown
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<EmissionReport>, ApiError> {
    let (profile, inputs) = state.store.inputs_for(&event_id).map_err(store_error)?;
    let report = state.engine.assess(&profile, &inputs).with_event_id(event_id);
    Ok(Json(report))
}

fn submit(
    state: &AppState,
    event_id: &str,
    record: CategoryRecord,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .put_record(event_id, record)
        .map_err(store_error)?;
    Ok(StatusCode::CREATED)
}

fn fetch(state: &AppState, event_id: &str, category: Category) -> Result<CategoryRecord, ApiError> {
    state.store.get_record(event_id, category).map_err(store_error)
}

// One POST/GET pair per category. The payload type fixes the category,
// so a record can never land under the wrong key.

pub async fn post_energy(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<EnergyInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Energy(input))
}

pub async fn get_energy(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Energy).map(Json)
}

pub async fn post_transport(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<TransportInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Transport(input))
}

pub async fn get_transport(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Transport).map(Json)
}

pub async fn post_catering(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<CateringInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Catering(input))
}

pub async fn get_catering(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Catering).map(Json)
}

pub async fn post_accommodation(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<AccommodationInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Accommodation(input))
}

pub async fn get_accommodation(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Accommodation).map(Json)
}

pub async fn post_waste(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<WasteInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Waste(input))
}

pub async fn get_waste(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Waste).map(Json)
}

pub async fn post_communication(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<CommunicationInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Communication(input))
}

pub async fn get_communication(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Communication).map(Json)
}

pub async fn post_freight(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<FreightInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Freight(input))
}

pub async fn get_freight(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Freight).map(Json)
}

pub async fn post_amenities(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<AmenitiesInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Amenities(input))
}

pub async fn get_amenities(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Amenities).map(Json)
}

pub async fn post_purchases(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(input): Json<PurchasesInput>,
) -> Result<StatusCode, ApiError> {
    submit(&state, &event_id, CategoryRecord::Purchases(input))
}

pub async fn get_purchases(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<CategoryRecord>, ApiError> {
    fetch(&state, &event_id, Category::Purchases).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::engine::Engine;
    use crate::store::EventStore;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            store: EventStore::new(),
            engine: Engine::default(),
        })
    }

    async fn create_test_event(state: &Arc<AppState>) -> String {
        state
            .store
            .create_event(EventProfile {
                event_name: "Expo".into(),
                total_visitors: 100,
                ..EventProfile::default()
            })
            .unwrap()
    }

    #[tokio::test]
    async fn create_event_returns_201_with_id() {
        let app = router(make_test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/events")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"event_name": "Expo", "total_visitors": 10}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["event_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn unknown_event_returns_404() {
        let app = router(make_test_state());
        let req = Request::builder()
            .uri("/events/does-not-exist")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn submit_then_fetch_category_record() {
        let state = make_test_state();
        let id = create_test_event(&state).await;
        let app = router(state);

        let post = Request::builder()
            .method("POST")
            .uri(format!("/events/{id}/waste"))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"plastic_kg": 100.0}"#))
            .unwrap();
        let resp = app.clone().oneshot(post).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let get = Request::builder()
            .uri(format!("/events/{id}/waste"))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(get).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["category"], "waste");
        assert_eq!(json["input"]["plastic_kg"], 100.0);
    }

    #[tokio::test]
    async fn duplicate_submission_returns_409() {
        let state = make_test_state();
        let id = create_test_event(&state).await;
        let app = router(state);

        for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
            let req = Request::builder()
                .method("POST")
                .uri(format!("/events/{id}/energy"))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"approach": "real", "gas_kwh": 500.0}"#))
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), expected);
        }
    }

    #[tokio::test]
    async fn calculate_returns_report() {
        let state = make_test_state();
        let id = create_test_event(&state).await;
        state
            .store
            .put_record(
                &id,
                CategoryRecord::Energy(EnergyInput {
                    gas_kwh: 1000.0,
                    ..EnergyInput::default()
                }),
            )
            .unwrap();
        let app = router(state);

        let req = Request::builder()
            .uri(format!("/calculate/{id}"))
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["event_id"], id.as_str());
        assert!(json["total_emissions_kg"].as_f64().unwrap_or(0.0) > 0.0);
        assert!(json["emission_class"].as_str().is_some());
        assert_eq!(json["top_3_emitters"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn calculate_missing_event_returns_404() {
        let app = router(make_test_state());
        let req = Request::builder()
            .uri("/calculate/nope")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_events_includes_created() {
        let state = make_test_state();
        let id = create_test_event(&state).await;
        let app = router(state);

        let req = Request::builder()
            .uri("/events")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert!(json.iter().any(|e| e["event_id"] == id.as_str()));
    }
}
