use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    /// The service answered, but reported an error for the image.
    #[error("ERROR:{0}")]
    Request(String),

    #[error("failed to read image {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vision service call failed: {0}")]
    Transport(String),
}

#[cfg(test)]
impl DetectError {
    pub fn service_message(&self) -> Option<&str> {
        match self {
            DetectError::Request(message) => Some(message),
            _ => None,
        }
    }
}
