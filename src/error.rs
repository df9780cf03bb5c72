use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid number in field `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL error: {0}")]
    Graph(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
