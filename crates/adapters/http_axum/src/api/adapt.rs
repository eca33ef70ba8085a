//! `POST /adapt` — convert a configuration document to canonical JSON.

use std::borrow::Cow;

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use http_body_util::{BodyExt, Limited};

use confadapt_domain::warning::Warning;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the adapt endpoint.
pub enum AdaptResponse {
    /// Canonical JSON, either converted or passed through.
    Ok(Bytes),
}

impl IntoResponse for AdaptResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(config) => {
                ([(header::CONTENT_TYPE, "application/json")], config).into_response()
            }
        }
    }
}

/// `POST /adapt`
///
/// Reads the whole body, adapts it according to `Content-Type` (no header
/// means JSON) and answers with the canonical JSON.
///
/// # Errors
///
/// - [`ApiError::MethodNotAllowed`] for any method other than `POST`
/// - [`ApiError::ReadBody`] if the body cannot be read or exceeds the limit
/// - [`ApiError::Adapt`] if the content type or the document is rejected
pub async fn adapt(
    State(state): State<AppState>,
    request: Request,
) -> Result<AdaptResponse, ApiError> {
    if request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();

    let mut buf = state.buffers.acquire();
    read_body(request.into_body(), state.max_body_size, &mut buf).await?;

    // The response gets its own bytes; `buf` goes back to the pool on return.
    let config = if content_type.is_empty() {
        Bytes::copy_from_slice(&buf)
    } else {
        let adapted = state
            .adapt_service
            .adapt_by_content_type(&content_type, &buf)?;
        log_warnings(&adapted.warnings);
        match adapted.config {
            Cow::Borrowed(body) => Bytes::copy_from_slice(body),
            Cow::Owned(config) => Bytes::from(config),
        }
    };

    Ok(AdaptResponse::Ok(config))
}

async fn read_body(body: Body, limit: usize, buf: &mut Vec<u8>) -> Result<(), ApiError> {
    let mut body = Limited::new(body, limit);
    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(ApiError::ReadBody)?;
        if let Some(data) = frame.data_ref() {
            buf.extend_from_slice(data);
        }
    }
    Ok(())
}

/// Best-effort report of adapter warnings; never fails the request.
fn log_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    match serde_json::to_string(warnings) {
        Ok(json) => tracing::warn!(
            count = warnings.len(),
            warnings = %json,
            "config adapter emitted warnings"
        ),
        Err(err) => tracing::error!(
            target: "admin.api.adapt",
            %err,
            "failed to serialize adaptation warnings"
        ),
    }
}
