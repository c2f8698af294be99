//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

const WILDCARD_ORIGIN: &str = "*";

/// CORS permisivo, usado cuando `CORS_ORIGINS` está vacío
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolver la lista de `CORS_ORIGINS`. Un `*` en la lista habilita cualquier origen.
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin == WILDCARD_ORIGIN) {
        return AllowOrigin::any();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(allowed)
}

/// Crear middleware de CORS con orígenes específicos
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn allow_origin_header(layer: CorsLayer, origin: &str) -> Option<String> {
        let app = Router::new().route("/", get(|| async { "ok" })).layer(layer);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_listed_origin_is_allowed() {
        let layer = cors_middleware_with_origins(vec![
            "http://a.test".to_string(),
            "http://b.test".to_string(),
        ]);
        assert_eq!(
            allow_origin_header(layer, "http://b.test").await.as_deref(),
            Some("http://b.test")
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_header() {
        let layer = cors_middleware_with_origins(vec!["http://a.test".to_string()]);
        assert_eq!(allow_origin_header(layer, "http://evil.test").await, None);
    }

    #[tokio::test]
    async fn test_wildcard_origin_allows_any() {
        let layer = cors_middleware_with_origins(vec![
            "http://a.test".to_string(),
            "*".to_string(),
        ]);
        assert_eq!(
            allow_origin_header(layer, "http://other.test").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_invalid_origin_is_skipped() {
        let layer = cors_middleware_with_origins(vec![
            "http://bad\norigin".to_string(),
            "http://a.test".to_string(),
        ]);
        assert_eq!(
            allow_origin_header(layer, "http://a.test").await.as_deref(),
            Some("http://a.test")
        );
    }
}
