use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UnlockQuery {
    /// Two-part code joined by `+`, e.g. `742767+1234` (sent URL-encoded as `742767%2B1234`)
    pub unlock: String,
}

/// Successful unlock payload. The key is upper-case on the wire.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct UnlockResponse {
    #[serde(rename = "URL")]
    pub url: String,
}
