use crate::models::ErrorResponse;
use crate::roster::RosterError;
use axum::{http::StatusCode, Json};

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::ActivityNotFound | RosterError::NotRegistered => Self::not_found(err.to_string()),
            RosterError::MissingEmail | RosterError::AlreadySignedUp | RosterError::ActivityFull => {
                Self::bad_request(err.to_string())
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorResponse { detail: self.message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_status_codes() {
        assert_eq!(AppError::from(RosterError::ActivityNotFound).status, StatusCode::NOT_FOUND);
        assert_eq!(AppError::from(RosterError::NotRegistered).status, StatusCode::NOT_FOUND);
        assert_eq!(AppError::from(RosterError::AlreadySignedUp).status, StatusCode::BAD_REQUEST);
        assert_eq!(AppError::from(RosterError::ActivityFull).status, StatusCode::BAD_REQUEST);

        let err = AppError::from(RosterError::MissingEmail);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Email is required");
    }
}
