//! Forwarding of edge-rule requests to the configured upstream.
//!
//! # Responsibilities
//! - Rewrite the request URI onto the upstream authority
//! - Strip hop-by-hop headers, add X-Forwarded-For
//! - Stream the request body through and the response back
//! - Map upstream failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - No retries: the rule only annotates, it does not manage delivery
//! - Request headers, the injected one included, pass through untouched

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{
        header::{self, HeaderMap, HeaderName, HeaderValue},
        uri::{Authority, InvalidUriParts, PathAndQuery, Scheme},
        Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;
use url::Url;

use crate::http::request::request_id;
use crate::observability::metrics;

/// HTTP client used for upstream requests.
pub type UpstreamClient = Client<HttpConnector, Body>;

const HOP_BY_HOP: [&str; 7] = [
    "connection",
    "keep-alive",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Errors parsing an upstream address.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unsupported upstream scheme {0:?}")]
    Scheme(String),
    #[error("upstream url has no host")]
    MissingHost,
    #[error("invalid upstream authority: {0}")]
    Authority(#[from] axum::http::uri::InvalidUri),
}

/// Where matched requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    authority: Authority,
}

impl Upstream {
    /// Parse an `http://host[:port]` address.
    pub fn parse(address: &str) -> Result<Self, UpstreamError> {
        let url = Url::parse(address)?;
        if url.scheme() != "http" {
            return Err(UpstreamError::Scheme(url.scheme().to_string()));
        }
        let host = url.host_str().ok_or(UpstreamError::MissingHost)?;
        let authority = match url.port() {
            Some(port) => Authority::from_str(&format!("{host}:{port}"))?,
            None => Authority::from_str(host)?,
        };
        Ok(Self { authority })
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// `uri` re-targeted at this upstream, path and query preserved.
    pub fn rewrite(&self, uri: &Uri) -> Result<Uri, InvalidUriParts> {
        let mut parts = uri.clone().into_parts();
        parts.scheme = Some(Scheme::HTTP);
        parts.authority = Some(self.authority.clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        Uri::from_parts(parts)
    }
}

/// Build the upstream client.
pub fn build_client(connect_timeout: std::time::Duration) -> UpstreamClient {
    let mut connector = HttpConnector::new();
    connector.set_connect_timeout(Some(connect_timeout));
    Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector)
}

/// Remove hop-by-hop headers, including any named by `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_str(name.trim()).ok())
        .collect();
    for name in named {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
}

/// Append the client address to `X-Forwarded-For`.
pub fn append_forwarded_for(headers: &mut HeaderMap, client: IpAddr) {
    let value = match headers.get(&X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
        Some(existing) => format!("{existing}, {client}"),
        None => client.to_string(),
    };
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(X_FORWARDED_FOR, value);
    }
}

/// Send `request` to `upstream` and relay the answer.
pub async fn forward(
    client: &UpstreamClient,
    upstream: &Upstream,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&request).to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let (mut parts, body) = request.into_parts();
    parts.uri = match upstream.rewrite(&parts.uri) {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to rewrite URI");
            metrics::record_request("integrations", 502, start);
            return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
        }
    };
    strip_hop_by_hop(&mut parts.headers);
    if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
        append_forwarded_for(&mut parts.headers, addr.ip());
    }

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        upstream = %upstream.authority(),
        "Forwarding request"
    );

    match client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let status = response.status();
            metrics::record_request("integrations", status.as_u16(), start);
            let (mut parts, body) = response.into_parts();
            strip_hop_by_hop(&mut parts.headers);
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_request("integrations", 502, start);
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upstream() {
        let upstream = Upstream::parse("http://127.0.0.1:4000").unwrap();
        assert_eq!(upstream.authority().as_str(), "127.0.0.1:4000");

        let upstream = Upstream::parse("http://backend.internal").unwrap();
        assert_eq!(upstream.authority().as_str(), "backend.internal");

        assert!(matches!(
            Upstream::parse("https://backend.internal"),
            Err(UpstreamError::Scheme(_))
        ));
        assert!(matches!(Upstream::parse("nope"), Err(UpstreamError::Url(_))));
    }

    #[test]
    fn test_rewrite_keeps_path_and_query() {
        let upstream = Upstream::parse("http://127.0.0.1:4000").unwrap();
        let uri: Uri = "/integrations/foo/bar?x=1".parse().unwrap();
        assert_eq!(
            upstream.rewrite(&uri).unwrap().to_string(),
            "http://127.0.0.1:4000/integrations/foo/bar?x=1"
        );
    }

    #[test]
    fn test_strip_hop_by_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, x-custom"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert("x-custom", HeaderValue::from_static("1"));
        headers.insert("x-createxyz-project-id", HeaderValue::from_static("id"));

        strip_hop_by_hop(&mut headers);
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key("x-createxyz-project-id"));
    }

    #[test]
    fn test_forwarded_for_appends() {
        let mut headers = HeaderMap::new();
        append_forwarded_for(&mut headers, "10.0.0.1".parse().unwrap());
        append_forwarded_for(&mut headers, "10.0.0.2".parse().unwrap());
        assert_eq!(headers.get("x-forwarded-for").unwrap(), "10.0.0.1, 10.0.0.2");
    }
}
