use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpertError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}: {body}")]
    StatusError {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid argument {field}={value}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DumpertError>;
