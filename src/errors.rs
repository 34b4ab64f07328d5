use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Failures produced by the habit core, independent of any transport.
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("{0}")]
    Validation(String),

    #[error("habit {0} not found")]
    NotFound(Uuid),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<HabitError> for AppError {
    fn from(err: HabitError) -> Self {
        let status = match err {
            HabitError::Validation(_) => StatusCode::BAD_REQUEST,
            HabitError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
