use std::fmt;

#[derive(Debug)]
pub enum RbxStatsError {
    /// The HTTP client could not be built.
    TransportInit(reqwest::Error),
    /// The request never produced a complete response body. `url` has the API key redacted.
    Network {
        url: String,
        source: reqwest::Error,
    },
    JsonError(serde_json::Error),
}

impl fmt::Display for RbxStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RbxStatsError::TransportInit(e) => {
                write!(f, "Failed to initialize HTTP transport: {}", e)
            }
            RbxStatsError::Network { url, source } => {
                write!(f, "Failed to open URL {}: {}", url, source)
            }
            RbxStatsError::JsonError(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for RbxStatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RbxStatsError::TransportInit(e) => Some(e),
            RbxStatsError::Network { source, .. } => Some(source),
            RbxStatsError::JsonError(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for RbxStatsError {
    fn from(err: serde_json::Error) -> Self {
        RbxStatsError::JsonError(err)
    }
}

pub type Result<T> = std::result::Result<T, RbxStatsError>;
