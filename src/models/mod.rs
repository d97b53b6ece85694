/// # Root Greeting
///
/// Fixed `{"message": "Hello World"}` body served by the API root.
pub mod root;

/// # Status Check Records
///
/// The persisted heartbeat entity and the request body that creates it.
///
/// ## Fields
/// - `id`: UUIDv4 string generated at creation
/// - `client_name`: caller-supplied name
/// - `timestamp`: UTC creation time, RFC 3339 in JSON
pub mod status;

pub mod unlock;
