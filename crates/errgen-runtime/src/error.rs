//! Public error representation shared by generated code and the JSON view.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identity of an error: the owning service and its kind discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorId {
    pub sid: String,
    pub kind: u64,
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sid, self.kind)
    }
}

/// An error as seen by API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{id}] {message}")]
pub struct PublicError {
    pub id: ErrorId,
    pub status_http: u16,
    pub message: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl PublicError {
    pub fn new(sid: impl Into<String>, kind: u64, status_http: u16, message: impl Into<String>) -> Self {
        Self {
            id: ErrorId {
                sid: sid.into(),
                kind,
            },
            status_http,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.extend(details.into_iter().map(Into::into));
        self
    }

    pub fn add_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn sid(&self) -> &str {
        &self.id.sid
    }

    pub fn kind(&self) -> u64 {
        self.id.kind
    }
}
