#![allow(clippy::needless_for_each)]

use crate::{
    api::handlers::{health, login, root},
    auth::{CredentialStore, User},
};
use anyhow::{Context, Result, anyhow};
use axum::{
    Extension, Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, HeaderValue, Method, Request, header::CONTENT_TYPE},
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, info, info_span, warn};
use ulid::Ulid;
use url::Url;
use utoipa::OpenApi;

pub mod handlers;

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health, handlers::login::login),
    components(schemas(health::Health, login::LoginRequest, login::LoginResponse, User)),
    tags(
        (name = "portero", description = "Minimal login service"),
        (name = "auth", description = "Credential check")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build the application router.
///
/// The credential store is shared read-only with every request through an
/// `Extension`.
pub fn router(store: Arc<dyn CredentialStore>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route(LOGIN_PATH, post(login::login))
        .route("/health", get(health::health).options(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static("x-request-id"),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    "x-request-id",
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(store)),
        )
}

/// CORS for the login form: a single allowed origin when configured, any origin otherwise.
///
/// # Errors
/// Returns an error if the frontend URL cannot be turned into an origin.
pub fn cors_layer(frontend_base_url: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    match frontend_base_url {
        Some(url) => Ok(cors.allow_origin(AllowOrigin::list([frontend_origin(url)?]))),
        None => Ok(cors.allow_origin(Any)),
    }
}

/// Start the server
/// # Errors
/// Return error if failed to start the server
pub async fn new(
    port: u16,
    frontend_base_url: Option<&str>,
    store: Arc<dyn CredentialStore>,
) -> Result<()> {
    let cors = cors_layer(frontend_base_url)?;
    let app = router(store, cors);

    let listener = TcpListener::bind(format!("::0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", err);
            }
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}

fn frontend_origin(frontend_base_url: &str) -> Result<HeaderValue> {
    let parsed = Url::parse(frontend_base_url)
        .with_context(|| format!("Invalid frontend base URL: {frontend_base_url}"))?;
    let host = parsed.host_str().ok_or_else(|| {
        anyhow!("Frontend base URL must include a valid host: {frontend_base_url}")
    })?;
    let port = parsed
        .port()
        .map_or_else(String::new, |port| format!(":{port}"));
    let origin = format!("{}://{}{}", parsed.scheme(), host, port);
    HeaderValue::from_str(&origin).context("Failed to build frontend origin header")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SingleIdentity;
    use axum::http::{StatusCode, header::ORIGIN};
    use tower::ServiceExt;

    fn app(cors: CorsLayer) -> Router {
        router(Arc::new(SingleIdentity), cors)
    }

    #[test]
    fn frontend_origin_drops_path_and_keeps_port() -> Result<()> {
        let origin = frontend_origin("http://localhost:3000/login")?;
        assert_eq!(origin, "http://localhost:3000");
        Ok(())
    }

    #[test]
    fn frontend_origin_rejects_garbage() {
        assert!(frontend_origin("not a url").is_err());
    }

    #[test]
    fn openapi_documents_login_and_health() {
        let doc = openapi();
        assert!(doc.paths.paths.contains_key(LOGIN_PATH));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[tokio::test]
    async fn request_id_is_generated_when_missing() -> Result<()> {
        let response = app(cors_layer(None)?)
            .oneshot(Request::builder().uri("/").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .context("missing x-request-id")?;
        assert!(Ulid::from_string(request_id).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn request_id_is_propagated() -> Result<()> {
        let response = app(cors_layer(None)?)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok()),
            Some("abc-123")
        );
        Ok(())
    }

    #[tokio::test]
    async fn cors_allows_configured_origin_only() -> Result<()> {
        let cors = cors_layer(Some("http://localhost:3000"))?;
        let response = app(cors)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(ORIGIN, "http://localhost:3000")
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:3000")
        );

        let cors = cors_layer(Some("http://localhost:3000"))?;
        let response = app(cors)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(ORIGIN, "http://evil.example")
                    .body(Body::empty())?,
            )
            .await?;
        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
        Ok(())
    }
}
