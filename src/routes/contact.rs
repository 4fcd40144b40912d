use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub const SAVED: &str = "Message saved";

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let parsed = if content_type.is_some_and(|ct| ct.contains("multipart/form-data")) {
        parser::parse_multipart(&headers, body).await
    } else {
        parser::parse_body(content_type, &body)
    };
    let raw = parsed.map_err(|e| AppError::validation(e, state.config.strict_status))?;

    tracing::debug!("Received contact submission: {raw}");

    pipeline::run(&state, raw).await?;

    Ok((StatusCode::CREATED, SAVED))
}
