use thiserror::Error;

/// Ошибки обращения к API бэкенда
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}
