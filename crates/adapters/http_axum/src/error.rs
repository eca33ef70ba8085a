//! HTTP error response mapping.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use confadapt_domain::error::AdaptError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced to API clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The endpoint only accepts `POST`.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// The request body could not be read (including when it is too large).
    #[error("reading request body: {0}")]
    ReadBody(#[source] axum::BoxError),

    /// The document could not be adapted.
    #[error(transparent)]
    Adapt(#[from] AdaptError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // Every adapt failure is caused by the request, including a
            // media type without subtype.
            Self::ReadBody(_) | Self::Adapt(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        tracing::debug!(status = status.as_u16(), error = %message, "request rejected");

        let mut response = (status, Json(ErrorBody { error: message })).into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confadapt_domain::media_type::MediaTypeError;

    #[test]
    fn should_map_method_not_allowed_to_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }

    #[test]
    fn should_map_every_adapt_error_to_400() {
        let errors = [
            AdaptError::InvalidContentType(MediaTypeError::NoMediaType),
            AdaptError::MalformedContentType,
            AdaptError::UnrecognizedAdapter("toml".to_string()),
            AdaptError::Adapter {
                adapter: "yaml".to_string(),
                source: "bad indent".into(),
            },
        ];
        for err in errors {
            assert_eq!(ApiError::from(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn should_keep_adapt_message_verbatim() {
        let err = ApiError::from(AdaptError::UnrecognizedAdapter("toml".to_string()));
        assert_eq!(err.to_string(), "unrecognized config adapter 'toml'");
    }

    #[test]
    fn should_prefix_read_body_failures() {
        let err = ApiError::ReadBody("connection reset".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "reading request body: connection reset");
    }
}
