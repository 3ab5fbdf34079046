//! # API Shared
//!
//! Wire types and shared services for the CareDesk APIs.
//!
//! Contains:
//! - Request/response types for every dashboard resource (serde + OpenAPI schemas)
//! - Shared services like `HealthService`
//!
//! Used by `caredesk-core`, `api-rest` and the CLI so that every surface speaks the same JSON.

pub mod analytics;
pub mod appointments;
pub mod chat;
pub mod health;
pub mod navigation;
pub mod patients;
pub mod records;
pub mod status;
pub mod users;

pub use analytics::*;
pub use appointments::*;
pub use chat::*;
pub use health::{HealthRes, HealthService};
pub use navigation::*;
pub use patients::*;
pub use records::*;
pub use status::*;
pub use users::*;

/// Returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
