use axum::{http::StatusCode, response::IntoResponse};

use crate::repo::RepoError;

/// Failure of a request after it reached a handler. Rendered as a plain-text
/// body; there is no error envelope.
#[derive(Debug)]
pub struct ServerError {
    status: StatusCode,
    message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        tracing::error!(error = %err, "customer query failed");
        ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}
