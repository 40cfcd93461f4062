#[derive(Debug, thiserror::Error)]
pub enum MiddlecoinError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Malformed field {field}: {message}")]
    MalformedField { field: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl MiddlecoinError {
    pub(crate) fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        MiddlecoinError::MalformedField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field for [`MalformedField`](Self::MalformedField) errors.
    pub fn field_name(&self) -> Option<&str> {
        match self {
            MiddlecoinError::MalformedField { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MiddlecoinError>;
