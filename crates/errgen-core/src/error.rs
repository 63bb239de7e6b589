//! Unified Error Model
use errgen_emit::EmitError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("CONFIG/UNDEFINED_SID: service id is empty")]
    UndefinedSid,

    #[error("CONFIG/UNDEFINED_NAME: catalog name is empty")]
    UndefinedName,

    #[error("CONFIG/UNDEFINED_KIND: error #{index} has no kind")]
    UndefinedKind { index: usize },

    #[error("CONFIG/UNDEFINED_STATUS: error #{index} (kind {kind}) has no HTTP status")]
    UndefinedStatus { index: usize, kind: u64 },

    #[error("CONFLICT/KIND: kind {kind} is defined more than once")]
    ConflictingKind { kind: u64 },

    #[error("GENERATE/{0}")]
    Generation(String),

    #[error("IO/{0}")]
    Io(String),

    #[error("LOAD/{0}")]
    Load(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required catalog field is missing or invalid.
    Configuration,
    /// Two error definitions share a kind.
    Conflict,
    /// Source emission or serialization failed.
    Generation,
    /// The catalog document could not be read or parsed.
    Load,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UndefinedSid
            | Self::UndefinedName
            | Self::UndefinedKind { .. }
            | Self::UndefinedStatus { .. } => ErrorCategory::Configuration,
            Self::ConflictingKind { .. } => ErrorCategory::Conflict,
            Self::Generation(_) | Self::Io(_) => ErrorCategory::Generation,
            Self::Load(_) => ErrorCategory::Load,
        }
    }
}

impl From<EmitError> for CatalogError {
    fn from(err: EmitError) -> Self {
        match err {
            EmitError::Io(e) => Self::Io(e.to_string()),
            other => Self::Generation(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Generation(format!("JSON: {}", err))
    }
}
