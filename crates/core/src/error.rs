use api_shared::UnknownVariant;
use caredesk_types::TextError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("in-memory {0} store is poisoned")]
    StatePoisoned(&'static str),
    #[error("empty text: {0}")]
    EmptyText(#[from] TextError),
    #[error("{0}")]
    UnknownVariant(#[from] UnknownVariant),
}

impl DashboardError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for errors caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_) | Self::EmptyText(_) | Self::UnknownVariant(_)
        )
    }
}

pub type DashboardResult<T> = std::result::Result<T, DashboardError>;
