use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use networth_core::errors::{Error as CoreError, FieldErrors, ValidationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("{0}")]
    Body(#[from] JsonRejection),
}

/// `Json` extractor whose rejections use the shared error body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Failure body shared by every route: `{ success: false, code, error }`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    code: u16,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field_errors: Option<FieldErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field_errors) = match self {
            ApiError::Core(CoreError::Validation(ValidationError::Fields(fields))) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(fields),
            ),
            ApiError::Core(CoreError::Validation(ValidationError::InvalidInput(message))) => {
                (StatusCode::BAD_REQUEST, message, None)
            }
            ApiError::Core(e) if e.is_not_found() => {
                (StatusCode::NOT_FOUND, "Not found".to_string(), None)
            }
            ApiError::Core(CoreError::Repository(message)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text(), None),
            ApiError::Core(e) => {
                tracing::error!("Unhandled core error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };
        let body = Json(ErrorBody {
            success: false,
            code: status.as_u16(),
            error,
            field_errors,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use networth_core::errors::DatabaseError;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn field_errors_are_listed() {
        let mut fields = FieldErrors::new();
        fields.push("value", "Please enter a valid positive number for the value");
        let err = ApiError::from(CoreError::Validation(ValidationError::Fields(fields)));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["fieldErrors"][0]["field"], "value");
    }

    #[tokio::test]
    async fn repository_message_is_passed_through() {
        let err = ApiError::from(CoreError::Repository("Failed to create snapshot".into()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to create snapshot");
        assert!(body.get("fieldErrors").is_none());
    }

    #[tokio::test]
    async fn raw_database_errors_are_not_leaked() {
        let err = ApiError::from(CoreError::Database(DatabaseError::QueryFailed(
            "no such table: balance_records".into(),
        )));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn invalid_input_message_is_returned_as_is() {
        let err = ApiError::from(CoreError::Validation(ValidationError::InvalidInput(
            "Total value exceeds the supported range".into(),
        )));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert_eq!(body["error"], "Total value exceeds the supported range");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::from(CoreError::Database(DatabaseError::NotFound("x".into())));
        let (status, _) = render(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
