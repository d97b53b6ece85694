use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Upper bound on records returned by a single listing.
pub const STATUS_LIST_LIMIT: usize = 1000;

/// # Status Check Record
///
/// Heartbeat-style record proving a client reached the backend. The `id` and
/// `timestamp` are always generated server-side.
///
/// ## Example JSON
/// ```json
/// {
///   "id": "7b0f6f43-2c55-4d0e-9d0c-6d7fbc2e3a41",
///   "client_name": "calculator",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

impl From<StatusCheckCreate> for StatusCheck {
    fn from(input: StatusCheckCreate) -> Self {
        Self::new(input.client_name)
    }
}

/// Request body for recording a status check.
#[derive(Deserialize, Debug, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
