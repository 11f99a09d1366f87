use anyhow::{Result, anyhow};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::infrastructure::settings::Settings;

/// CORS policy for the browser client. Only the methods the auth and topic
/// routes actually serve are allowed.
pub(crate) fn build_cors_layer(settings: &Settings) -> Result<CorsLayer> {
    let origin = allowed_origin(&settings.cors_origins)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]))
}

fn allowed_origin(origins: &[String]) -> Result<AllowOrigin> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::any());
    }

    let parsed = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|err| anyhow!("invalid CORS origin {origin:?}: {err}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AllowOrigin::list(parsed))
}

#[cfg(test)]
mod tests {
    use super::allowed_origin;

    #[test]
    fn wildcard_entry_allows_any_origin() {
        allowed_origin(&["*".to_string()]).expect("wildcard must be accepted");
    }

    #[test]
    fn explicit_origins_parse() {
        allowed_origin(&[
            "http://localhost:8081".to_string(),
            "http://127.0.0.1:8081".to_string(),
        ])
        .expect("origins must parse");
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let result = allowed_origin(&["http://bad origin".to_string()]);
        assert!(result.is_err());
    }
}
