//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (edge header rule, limits, timeout, request ID, tracing)
//! - Bind server to listener
//! - Forward edge-rule requests to the upstream when one is configured
//! - Apply reloaded configuration to the edge header rule

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::validation::{validate_config, ValidationError};
use crate::config::{ConfigError, SiteConfig};
use crate::http::forward::{self, Upstream, UpstreamClient};
use crate::http::page::{health_handler, page_handler};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::metrics;
use crate::routing::header_rule::{
    self, EdgeHeaderLayer, EdgeHeaderRule, EdgeRuleMatched, SharedRule,
};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub rule: SharedRule,
    pub upstream: Option<Arc<Upstream>>,
    pub client: UpstreamClient,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
    rule: SharedRule,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let rule = EdgeHeaderRule::from_config(&config.integrations)
            .map_err(|e| ConfigError::Validation(vec![e.into()]))?;
        let rule = header_rule::shared(rule);

        let upstream = match &config.integrations.upstream {
            Some(address) => {
                let upstream = Upstream::parse(address).map_err(|source| {
                    ConfigError::Validation(vec![ValidationError::Upstream {
                        value: address.clone(),
                        source,
                    }])
                })?;
                tracing::info!(upstream = %upstream.authority(), "Integrations upstream configured");
                Some(Arc::new(upstream))
            }
            None => None,
        };

        let client = forward::build_client(Duration::from_secs(config.timeouts.connect_secs));

        let state = AppState {
            rule: rule.clone(),
            upstream,
            client,
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            rule,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let rule = state.rule.clone();
        Router::new()
            .route("/", get(page_handler))
            .route("/health", get(health_handler))
            .fallback(fallback_handler)
            .with_state(state)
            .layer(EdgeHeaderLayer::new(rule))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The router, for serving it elsewhere or driving it in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configuration updates replace the edge header rule; other sections
    /// take effect on restart. Returns once `shutdown` fires and in-flight
    /// requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let rule = self.rule.clone();
        let reloader = tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                apply_config_update(&rule, &config);
            }
        });

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Swap in the edge header rule described by `config`.
///
/// An invalid rule leaves the current one in place.
pub fn apply_config_update(rule: &SharedRule, config: &SiteConfig) {
    match EdgeHeaderRule::from_config(&config.integrations) {
        Ok(new_rule) => {
            tracing::info!(
                matcher = %new_rule.pattern(),
                header = %new_rule.header_name(),
                "Edge header rule reloaded"
            );
            rule.store(Arc::new(new_rule));
        }
        Err(e) => {
            tracing::error!(error = %e, "Rejected edge header rule; keeping current rule");
        }
    }
}

/// Requests no route claimed: forward requests the edge rule annotated,
/// 404 otherwise.
async fn fallback_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    if let Some(upstream) = &state.upstream {
        if request.extensions().get::<EdgeRuleMatched>().is_some() {
            return forward::forward(&state.client, upstream, request).await;
        }
    }

    tracing::debug!(path = %request.uri().path(), "No route matched");
    metrics::record_request("fallback", StatusCode::NOT_FOUND.as_u16(), start);
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::header_rule::{PROJECT_ID, PROJECT_ID_HEADER};
    use crate::routing::matcher::PathPattern;
    use axum::http::{HeaderName, HeaderValue};

    async fn state_with_dead_upstream(rule: EdgeHeaderRule) -> AppState {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        AppState {
            rule: header_rule::shared(rule),
            upstream: Some(Arc::new(Upstream::parse(&format!("http://{addr}")).unwrap())),
            client: forward::build_client(Duration::from_secs(1)),
        }
    }

    fn request(path: &str) -> Request<Body> {
        Request::builder().uri(path).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = SiteConfig::default();
        config.integrations.matcher = "no-slash".into();
        assert!(matches!(
            HttpServer::new(config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_config_update_swaps_rule() {
        let rule = header_rule::shared(EdgeHeaderRule::default());

        let mut config = SiteConfig::default();
        config.integrations.header_value = "next".into();
        apply_config_update(&rule, &config);
        assert_eq!(rule.load().header_value(), "next");

        config.integrations.header_name = "not valid".into();
        apply_config_update(&rule, &config);
        assert_eq!(rule.load().header_value(), "next");
        assert_eq!(rule.load().header_name().as_str(), PROJECT_ID_HEADER);

        apply_config_update(&rule, &SiteConfig::default());
        assert_eq!(rule.load().header_value(), PROJECT_ID);
    }

    #[tokio::test]
    async fn test_fallback_follows_layer_decision() {
        // The rule was swapped after the layer annotated the request.
        let swapped = EdgeHeaderRule::new(
            PathPattern::parse("/hooks/:path*").unwrap(),
            HeaderName::from_static(PROJECT_ID_HEADER),
            HeaderValue::from_static(PROJECT_ID),
        );
        let state = state_with_dead_upstream(swapped).await;

        let mut annotated = request("/integrations/foo");
        assert!(EdgeHeaderRule::default().apply(&mut annotated));
        let response = fallback_handler(State(state.clone()), annotated).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = fallback_handler(State(state), request("/hooks/x")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
