//! API request and response types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calc::Category;
use crate::event::EventProfile;
use crate::store::StoredEvent;

/// Response body for event creation.
#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub event_id: String,
}

/// One event in the listing or detail response.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub profile: EventProfile,
    /// Categories with a submitted record, in fixed category order.
    pub submitted_categories: Vec<Category>,
}

impl From<&StoredEvent> for EventResponse {
    fn from(stored: &StoredEvent) -> Self {
        Self {
            event_id: stored.event_id.clone(),
            created_at: stored.created_at,
            profile: stored.profile.clone(),
            submitted_categories: stored.submitted_categories(),
        }
    }
}

/// Error response body for 4xx/5xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
