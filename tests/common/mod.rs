//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};

use portfolio_site::{HttpServer, SiteConfig};

/// A mock upstream that answers every request with the request head it
/// received, so tests can inspect forwarded headers.
pub struct EchoBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl EchoBackend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start the echo backend on an ephemeral port.
pub async fn start_echo_backend() -> EchoBackend {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        let mut head = Vec::new();
                        let mut buf = [0u8; 1024];
                        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => head.extend_from_slice(&buf[..n]),
                            }
                        }
                        counter.fetch_add(1, Ordering::SeqCst);

                        let body = String::from_utf8_lossy(&head).to_lowercase();
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    EchoBackend { addr, hits }
}

/// A free local port with nothing listening on it.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A running site server.
pub struct TestSite {
    pub addr: SocketAddr,
    pub config_tx: mpsc::UnboundedSender<SiteConfig>,
    shutdown: broadcast::Sender<()>,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        let _ = self.shutdown.send(());
    }
}

/// Serve `config` on an ephemeral port.
pub async fn start_site(config: SiteConfig) -> TestSite {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (config_tx, config_rx) = mpsc::unbounded_channel();
    let (shutdown, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(server.run(listener, config_rx, shutdown_rx));

    TestSite {
        addr,
        config_tx,
        shutdown,
    }
}

/// Default config with the integrations upstream pointed at `upstream`.
pub fn config_with_upstream(upstream: &str) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.integrations.upstream = Some(upstream.to_string());
    config
}
