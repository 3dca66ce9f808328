use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pagination(#[from] mail_pagination::PaginationError),

    #[error("{0} environment variable is required")]
    MissingEnv(&'static str),
}
