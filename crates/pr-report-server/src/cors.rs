//! CORS headers for the configured frontend origin.

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use pr_report_core::{Error, Result};

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Authorization, Content-Type";

/// Allowed origin, validated once at startup.
#[derive(Debug, Clone)]
pub struct CorsOrigin(HeaderValue);

impl CorsOrigin {
    pub fn new(origin: &str) -> Result<Self> {
        HeaderValue::from_str(origin.trim_end_matches('/'))
            .map(Self)
            .map_err(|e| Error::Config(format!("Invalid frontend origin '{}': {}", origin, e)))
    }
}

/// Add CORS headers to every response; answer preflight requests directly.
pub async fn cors(State(origin): State<CorsOrigin>, request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.0);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_trailing_slash_removed() {
        let origin = CorsOrigin::new("http://localhost:5173/").unwrap();
        assert_eq!(origin.0, "http://localhost:5173");
    }

    #[test]
    fn test_invalid_origin() {
        assert!(CorsOrigin::new("http://bad\norigin").is_err());
    }
}
