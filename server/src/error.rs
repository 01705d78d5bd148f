use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::KernelError;
use serde_json::{json, Value};
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        eprintln!("{:?}", self.0);
        ExitCode::FAILURE
    }
}

/// Maps the kernel error taxonomy onto the HTTP contract once, at the
/// boundary. The body is always `{"error": {"message", "status"}}`; for
/// validation failures `message` is the full list of violated constraints.
#[derive(Debug)]
pub struct ErrorStatus {
    report: Report<KernelError>,
    missing_is_client_error: bool,
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(report: Report<KernelError>) -> Self {
        Self {
            report,
            missing_is_client_error: false,
        }
    }
}

impl ErrorStatus {
    /// The update contract answers a missing target with 400 rather than
    /// 404, while the message keeps the case distinguishable from a
    /// validation failure.
    pub fn missing_as_bad_request(report: Report<KernelError>) -> Self {
        Self {
            report,
            missing_is_client_error: true,
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self.report.current_context() {
            KernelError::Validation(violations) => (StatusCode::BAD_REQUEST, json!(violations)),
            KernelError::Conflict => (
                StatusCode::BAD_REQUEST,
                Value::from("A book with this isbn already exists"),
            ),
            KernelError::NotFound if self.missing_is_client_error => {
                (StatusCode::BAD_REQUEST, Value::from("Book not found"))
            }
            KernelError::NotFound => (StatusCode::NOT_FOUND, Value::from("Book not found")),
            KernelError::Timeout => (
                StatusCode::REQUEST_TIMEOUT,
                Value::from("Datastore timed out"),
            ),
            KernelError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::from("Internal server error"),
            ),
        };

        tracing::error!(status = status.as_u16(), "{:?}", self.report);

        let body = json!({
            "error": {
                "message": message,
                "status": status.as_u16(),
            }
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::KernelError;

    use crate::error::ErrorStatus;

    #[test]
    fn not_found_maps_to_404() {
        let response = ErrorStatus::from(Report::new(KernelError::NotFound)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_update_target_maps_to_400() {
        let response = ErrorStatus::missing_as_bad_request(Report::new(KernelError::NotFound))
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn conflict_maps_to_400() {
        let response = ErrorStatus::from(Report::new(KernelError::Conflict)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = ErrorStatus::from(Report::new(KernelError::Internal)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn validation_body_carries_every_violation() {
        let report = Report::new(KernelError::Validation(vec![
            "\"isbn\" is required".to_string(),
            "\"pages\" must be a non-negative integer".to_string(),
        ]));
        let response = ErrorStatus::from(report).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["status"], 400);
        assert_eq!(
            body["error"]["message"],
            serde_json::json!([
                "\"isbn\" is required",
                "\"pages\" must be a non-negative integer",
            ])
        );
    }
}
