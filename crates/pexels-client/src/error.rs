// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PexelsError>;

#[derive(Debug, Error)]
pub enum PexelsError {
    /// DNS, connect, timeout or body-read failure.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream answered with something other than `200 OK`.
    #[error("received non-OK response: {status}")]
    HttpStatus { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Another error annotated with the operation that produced it.
    #[error("error {action}: {source}")]
    Operation {
        action: String,
        #[source]
        source: Box<PexelsError>,
    },
}

impl PexelsError {
    /// Wrap this error with a description of the failing operation.
    pub fn context(self, action: impl Into<String>) -> Self {
        PexelsError::Operation {
            action: action.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any operation annotations.
    pub fn root(&self) -> &PexelsError {
        match self {
            PexelsError::Operation { source, .. } => source.root(),
            other => other,
        }
    }

    /// Status code of a non-OK response, if that is what went wrong.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            PexelsError::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self.root(), PexelsError::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.root(), PexelsError::Decode(_))
    }
}
