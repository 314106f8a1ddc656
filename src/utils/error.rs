use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Server returned status {status}")]
    StatusError { status: u16 },

    #[error("Response is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
