use thiserror::Error;

#[derive(Error, Debug)]
pub enum BriefsError {
    // Configuration errors
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Summarization errors from the API client
    #[error("Summarization failed: {0}")]
    Api(#[from] anthropic_client::ApiError),

    // Store serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Rendering errors
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BriefsResult<T> = Result<T, BriefsError>;
