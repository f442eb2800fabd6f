#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}
