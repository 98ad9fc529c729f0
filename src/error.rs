use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;
use tracing::{error, warn};

/// Failures a todo handler can report.
///
/// The `Display` text is what the client receives. Storage causes stay in the
/// server log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("You can only enter values between 1 and 3")]
    InvalidStatus(i64),

    #[error("Error retrieving data from database")]
    Retrieve(#[source] sqlx::Error),

    #[error("Error inserting data into database")]
    Insert(#[source] sqlx::Error),

    #[error("Error updating data in database")]
    Update(#[source] sqlx::Error),

    #[error("Error deleting data from database")]
    Delete(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidStatus(status) => {
                warn!("rejected todo with status {}", status);
            }
            AppError::Retrieve(e)
            | AppError::Insert(e)
            | AppError::Update(e)
            | AppError::Delete(e) => {
                error!("database error: {}", e);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
