//! Error types for the pod API

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Result type for service and handler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for service and handler operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested object does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body or embedded object could not be used
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// Query or body parameters could not be bound
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The Kubernetes API failed or could not be reached
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidPayload(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "msg": self.to_string(),
            "data": null,
        });

        (status, Json(body)).into_response()
    }
}

impl From<kube::Error> for Error {
    fn from(e: kube::Error) -> Self {
        match e {
            kube::Error::Api(ae) if ae.code == 404 => Error::NotFound(ae.message.clone()),
            kube::Error::Api(ae) if ae.code == 400 || ae.code == 422 => {
                Error::InvalidPayload(ae.message.clone())
            }
            other => Error::Upstream(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidPayload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::InvalidPayload("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(Error::Upstream("x".into()).status_code(), StatusCode::BAD_GATEWAY);
    }

    fn api_error(code: u16, reason: &str, message: &str) -> kube::Error {
        kube::Error::Api(kube::core::ErrorResponse {
            status: "Failure".to_string(),
            message: message.to_string(),
            reason: reason.to_string(),
            code,
        })
    }

    #[test]
    fn test_kube_not_found() {
        let err: Error = api_error(404, "NotFound", "pods \"web-0\" not found").into();
        assert!(matches!(&err, Error::NotFound(msg) if msg == "pods \"web-0\" not found"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_kube_rejected_object() {
        for (code, reason) in [(400, "BadRequest"), (422, "Invalid")] {
            let err: Error = api_error(code, reason, "spec.containers: Forbidden").into();
            assert!(matches!(err, Error::InvalidPayload(_)), "code {}", code);
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_kube_other_statuses_are_upstream() {
        for (code, reason) in [(500, "InternalError"), (403, "Forbidden"), (409, "Conflict")] {
            let err: Error = api_error(code, reason, "boom").into();
            assert!(matches!(err, Error::Upstream(_)), "code {}", code);
            assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_serde_error_is_invalid_payload() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn test_error_response_envelope() {
        let response = Error::NotFound("pod web-0".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["msg"], "not found: pod web-0");
        assert!(json["data"].is_null());
    }
}
