//! Edge header rule: annotate matched requests with a fixed header.
//!
//! # Responsibilities
//! - Decide whether a request falls under the rule's path pattern
//! - Insert the configured header, replacing any client-supplied value
//! - Hand the request on unchanged otherwise; never answer it
//!
//! # Design Decisions
//! - The rule is an immutable value; reloads swap a whole new rule in
//! - Applied as a tower layer around the whole router, fallback included
//! - A matched request carries [`EdgeRuleMatched`] so handlers reuse the
//!   layer's decision instead of re-reading a rule that may have been swapped

use arc_swap::ArcSwap;
use axum::http::{
    header::{HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue},
    Request,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tower::{Layer, Service};

use crate::config::EdgeRuleConfig;
use crate::observability::metrics;
use crate::routing::matcher::{PathPattern, PatternError};

pub const DEFAULT_MATCHER: &str = "/integrations/:path*";
pub const PROJECT_ID_HEADER: &str = "x-createxyz-project-id";
pub const PROJECT_ID: &str = "1cf18f4a-35f7-4675-8e66-97a673c3ac19";

/// Errors building a rule from configuration.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid matcher: {0}")]
    Pattern(#[from] PatternError),
    #[error("invalid header name: {0}")]
    HeaderName(#[from] InvalidHeaderName),
    #[error("invalid header value: {0}")]
    HeaderValue(#[from] InvalidHeaderValue),
}

/// Request extension marking a request the rule annotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRuleMatched {
    pub matcher: String,
}

/// A path pattern plus the header to add to matching requests.
#[derive(Debug, Clone)]
pub struct EdgeHeaderRule {
    pattern: PathPattern,
    name: HeaderName,
    value: HeaderValue,
}

impl EdgeHeaderRule {
    pub fn new(pattern: PathPattern, name: HeaderName, value: HeaderValue) -> Self {
        Self {
            pattern,
            name,
            value,
        }
    }

    /// Build a rule from configuration.
    pub fn from_config(config: &EdgeRuleConfig) -> Result<Self, RuleError> {
        Ok(Self {
            pattern: PathPattern::parse(&config.matcher)?,
            name: HeaderName::from_bytes(config.header_name.as_bytes())?,
            value: HeaderValue::from_str(&config.header_value)?,
        })
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.name
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.value
    }

    /// Add the header and the [`EdgeRuleMatched`] marker if the request
    /// matches. Returns true if it did.
    pub fn apply<B>(&self, req: &mut Request<B>) -> bool {
        if !self.pattern.matches_request(req) {
            return false;
        }
        req.headers_mut().insert(self.name.clone(), self.value.clone());
        req.extensions_mut().insert(EdgeRuleMatched {
            matcher: self.pattern.as_str().to_string(),
        });
        true
    }
}

impl Default for EdgeHeaderRule {
    fn default() -> Self {
        Self {
            pattern: PathPattern::parse(DEFAULT_MATCHER).expect("default matcher is valid"),
            name: HeaderName::from_static(PROJECT_ID_HEADER),
            value: HeaderValue::from_static(PROJECT_ID),
        }
    }
}

/// Rule handle shared with the config reloader.
pub type SharedRule = Arc<ArcSwap<EdgeHeaderRule>>;

/// Wrap a rule for sharing.
pub fn shared(rule: EdgeHeaderRule) -> SharedRule {
    Arc::new(ArcSwap::from_pointee(rule))
}

/// Layer applying the current [`EdgeHeaderRule`] to every request.
#[derive(Clone)]
pub struct EdgeHeaderLayer {
    rule: SharedRule,
}

impl EdgeHeaderLayer {
    pub fn new(rule: SharedRule) -> Self {
        Self { rule }
    }
}

impl<S> Layer<S> for EdgeHeaderLayer {
    type Service = EdgeHeader<S>;

    fn layer(&self, inner: S) -> Self::Service {
        EdgeHeader {
            inner,
            rule: self.rule.clone(),
        }
    }
}

/// Service produced by [`EdgeHeaderLayer`].
#[derive(Clone)]
pub struct EdgeHeader<S> {
    inner: S,
    rule: SharedRule,
}

impl<S, B> Service<Request<B>> for EdgeHeader<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let rule = self.rule.load();
        if rule.apply(&mut req) {
            tracing::debug!(
                path = %req.uri().path(),
                header = %rule.header_name(),
                "Edge header injected"
            );
            metrics::record_header_injected(rule.pattern().as_str());
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::HeaderMap;
    use std::convert::Infallible;
    use tower::ServiceExt;

    fn request(path: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_default_rule() {
        let rule = EdgeHeaderRule::default();
        assert_eq!(rule.pattern().as_str(), "/integrations/:path*");
        assert_eq!(rule.header_name().as_str(), "x-createxyz-project-id");
        assert_eq!(rule.header_value(), "1cf18f4a-35f7-4675-8e66-97a673c3ac19");
    }

    #[test]
    fn test_apply_matches_only_prefix() {
        let rule = EdgeHeaderRule::default();

        let mut matched = request("/integrations/foo/bar");
        assert!(rule.apply(&mut matched));
        assert_eq!(
            matched.headers().get(PROJECT_ID_HEADER).unwrap(),
            PROJECT_ID
        );

        assert_eq!(
            matched.extensions().get::<EdgeRuleMatched>(),
            Some(&EdgeRuleMatched {
                matcher: DEFAULT_MATCHER.to_string()
            })
        );

        let mut other = request("/other");
        assert!(!rule.apply(&mut other));
        assert!(other.headers().is_empty());
        assert!(other.extensions().get::<EdgeRuleMatched>().is_none());
    }

    #[test]
    fn test_apply_replaces_client_value() {
        let rule = EdgeHeaderRule::default();
        let mut req = Request::builder()
            .uri("/integrations")
            .header(PROJECT_ID_HEADER, "spoofed")
            .header("accept", "text/plain")
            .body(Body::empty())
            .unwrap();
        rule.apply(&mut req);

        let values: Vec<_> = req.headers().get_all(PROJECT_ID_HEADER).iter().collect();
        assert_eq!(values, vec![PROJECT_ID]);
        assert_eq!(req.headers().get("accept").unwrap(), "text/plain");
    }

    #[test]
    fn test_from_config_rejects_bad_header() {
        let config = EdgeRuleConfig {
            header_name: "bad header".into(),
            ..EdgeRuleConfig::default()
        };
        assert!(matches!(
            EdgeHeaderRule::from_config(&config),
            Err(RuleError::HeaderName(_))
        ));

        let config = EdgeRuleConfig {
            matcher: "integrations".into(),
            ..EdgeRuleConfig::default()
        };
        assert!(matches!(
            EdgeHeaderRule::from_config(&config),
            Err(RuleError::Pattern(_))
        ));
    }

    #[tokio::test]
    async fn test_layer_annotates_before_inner_service() {
        let inner = tower::service_fn(|req: Request<Body>| async move {
            Ok::<HeaderMap, Infallible>(req.headers().clone())
        });
        let svc = EdgeHeaderLayer::new(shared(EdgeHeaderRule::default())).layer(inner);

        let headers = svc.clone().oneshot(request("/integrations/foo")).await.unwrap();
        assert_eq!(headers.get(PROJECT_ID_HEADER).unwrap(), PROJECT_ID);

        let headers = svc.oneshot(request("/other")).await.unwrap();
        assert!(headers.get(PROJECT_ID_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_swapped_rule_takes_effect() {
        let rule = shared(EdgeHeaderRule::default());
        let inner = tower::service_fn(|req: Request<Body>| async move {
            Ok::<HeaderMap, Infallible>(req.headers().clone())
        });
        let svc = EdgeHeaderLayer::new(rule.clone()).layer(inner);

        rule.store(Arc::new(EdgeHeaderRule::new(
            PathPattern::parse("/hooks/:path*").unwrap(),
            HeaderName::from_static(PROJECT_ID_HEADER),
            HeaderValue::from_static("other-project"),
        )));

        let headers = svc.clone().oneshot(request("/hooks/x")).await.unwrap();
        assert_eq!(headers.get(PROJECT_ID_HEADER).unwrap(), "other-project");

        let headers = svc.oneshot(request("/integrations/x")).await.unwrap();
        assert!(headers.get(PROJECT_ID_HEADER).is_none());
    }
}
