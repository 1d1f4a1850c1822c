//! Event API endpoints.
//!
//! Create, list, and fetch the fundraising events held by the in-memory
//! registry. The registry is authoritative for now; once the smart-contract
//! service exists these handlers will mirror writes to the ledger and merge
//! on-chain state into reads.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::registry::{EventDraft, RegistryError};
use crate::state::AppState;

/// Create event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_event))
        .route("/", get(list_events))
        .route("/{id}", get(get_event))
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new event.
///
/// POST /api/events
async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> impl IntoResponse {
    // TODO: Call the smart contract to create the event on-chain
    let event = state.registry().create(draft);
    tracing::info!(event_id = event.id, "Event created");

    (StatusCode::CREATED, Json(event))
}

/// List all events in creation order.
///
/// GET /api/events
async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    // TODO: Fetch events from the smart contract and merge with registry data
    Json(state.registry().list())
}

/// Get a single event by id.
///
/// GET /api/events/{id}
async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    // Ids that do not parse as a non-negative base-10 integer cannot match
    // any stored event, so they share the not-found response.
    let Ok(id) = id.parse::<u64>() else {
        return not_found();
    };

    // TODO: Fetch event from the smart contract and merge with registry data
    match state.registry().get(id) {
        Ok(event) => Json(event).into_response(),
        Err(RegistryError::NotFound { .. }) => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Event not found").into_response()
}

#[cfg(test)]
mod tests {
    use crate::registry::{Event, EventRegistry};

    use super::*;

    fn state_with_events(count: usize) -> AppState {
        let registry = EventRegistry::new();
        for i in 0..count {
            registry.create(EventDraft {
                name: Some(format!("event-{i}")),
                ..Default::default()
            });
        }
        AppState::new(registry)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_event_draft_tolerates_missing_fields() {
        let draft: EventDraft = serde_json::from_str("{}").unwrap();
        assert!(draft.name.is_none());
        assert!(draft.goal_amount.is_none());

        let draft: EventDraft =
            serde_json::from_str(r#"{"name": "Run4Good", "goal_amount": 1000}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Run4Good"));
        assert_eq!(draft.goal_amount, Some(1000.0));
    }

    #[tokio::test]
    async fn test_create_event_returns_created_record() {
        let state = state_with_events(0);
        let draft = EventDraft {
            name: Some("Run4Good".to_string()),
            goal_amount: Some(1000.0),
            deadline: Some("2025-12-31".to_string()),
            ..Default::default()
        };

        let response = create_event(State(state), Json(draft)).await.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let event: Event = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(event.id, 0);
        assert_eq!(event.amount_raised, 0.0);
        assert_eq!(event.name.as_deref(), Some("Run4Good"));
    }

    #[tokio::test]
    async fn test_list_events_returns_all_in_order() {
        let state = state_with_events(3);

        let response = list_events(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let events: Vec<Event> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].id, 2);
        assert_eq!(events[2].name.as_deref(), Some("event-2"));
    }

    #[tokio::test]
    async fn test_get_event_finds_by_id() {
        let state = state_with_events(2);

        let response = get_event(State(state), Path("1".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let event: Event = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(event.id, 1);
    }

    #[tokio::test]
    async fn test_get_event_unknown_id_is_plain_text_not_found() {
        let state = state_with_events(2);

        let response = get_event(State(state), Path("5".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Event not found");
    }

    #[tokio::test]
    async fn test_get_event_unparsable_id_is_not_found() {
        let state = state_with_events(2);

        for raw in ["abc", "-1", "1.5", ""] {
            let response = get_event(State(state.clone()), Path(raw.to_string())).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "id: {raw:?}");
            assert_eq!(body_text(response).await, "Event not found");
        }
    }
}
