use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Root Greeting
///
/// Body returned by the API root, which doubles as a liveness check.
///
/// ## Example JSON
/// ```json
/// { "message": "Hello World" }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_serializes_exactly() {
        let json = serde_json::to_string(&MessageResponse::hello()).unwrap();
        assert_eq!(json, r#"{"message":"Hello World"}"#);
    }
}
