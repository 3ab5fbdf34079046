//! Generic message bodies returned by the mock endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response: a single static message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Body of acknowledgement-only responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}
