use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("page size {size} exceeds the maximum of {max}")]
    PageSizeExceeded { size: usize, max: usize },

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PaginationError>;
