use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Parse a request body based on Content-Type header.
///
/// A blank body parses as an empty object so that it fails validation on
/// the missing fields rather than as malformed input.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedBody(format!("Invalid JSON: {e}")))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else if ct.contains("multipart/form-data") {
        Err(ValidationError::MalformedBody(
            "multipart body must be parsed with parse_multipart".to_string(),
        ))
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| ValidationError::MalformedBody(format!("Unable to parse body: {e}")))
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, ValidationError> {
    let body_str = std::str::from_utf8(body)
        .map_err(|e| ValidationError::MalformedBody(format!("Invalid UTF-8: {e}")))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}

/// Parse multipart form data using multer. File parts are read as text.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<Value, ValidationError> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| ValidationError::MalformedBody("Missing multipart boundary".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut map = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::MalformedBody(format!("Multipart error: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ValidationError::MalformedBody(format!("Field read error: {e}")))?;
        map.insert(name, Value::String(value));
    }

    Ok(Value::Object(map))
}
