use axum::http::StatusCode;
use urlencoding::encode;

use crate::constants::*;
use crate::error::CatalogError;

pub fn catalog_error(err: &CatalogError) -> (StatusCode, String) {
    match err {
        CatalogError::Http { status } => (
            StatusCode::BAD_GATEWAY,
            format!("{}: remote returned HTTP {}", ERR_REMOTE_UNAVAILABLE, status),
        ),
        CatalogError::Parse(message) => (
            StatusCode::BAD_GATEWAY,
            format!("{}: {}", ERR_REMOTE_UNAVAILABLE, message),
        ),
        CatalogError::Network(e) if e.is_timeout() => {
            (StatusCode::GATEWAY_TIMEOUT, ERR_REMOTE_TIMEOUT.to_string())
        }
        CatalogError::Network(_) => (
            StatusCode::BAD_GATEWAY,
            ERR_REMOTE_UNAVAILABLE.to_string(),
        ),
        CatalogError::InvalidPage(message) => (StatusCode::BAD_REQUEST, message.clone()),
    }
}

pub fn build_query_params(params: &[(&str, Option<String>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", encode(key), encode(v))))
        .collect();

    if query_parts.is_empty() {
        String::new()
    } else {
        format!("?{}", query_parts.join("&"))
    }
}

/// Treats empty or whitespace-only form input as "not provided".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
