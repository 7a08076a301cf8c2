//! Configuration file watcher for hot reload.
//!
//! Every change to the file is re-loaded and validated. Accepted configs go
//! to the server over an mpsc channel; rejected ones are logged and counted
//! and the running config stays in place.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::SiteConfig;
use crate::observability::metrics;

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<SiteConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for accepted configurations.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<SiteConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Load the file once and hand it to the server if it is valid.
    pub fn reload(&self) -> Result<(), ConfigError> {
        match load_config(&self.path) {
            Ok(config) => {
                metrics::record_config_reload(true);
                tracing::info!(
                    path = %self.path.display(),
                    matcher = %config.integrations.matcher,
                    "Config reloaded"
                );
                // The server has stopped if nobody is listening.
                let _ = self.update_tx.send(config);
                Ok(())
            }
            Err(e) => {
                metrics::record_config_reload(false);
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Rejected config reload; keeping current configuration"
                );
                Err(e)
            }
        }
    }

    /// Start watching the file. The returned watcher must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if is_change(&event.kind) => {
                    tracing::debug!(kind = ?event.kind, "Config file change detected");
                    let _ = self.reload();
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = %path.display(), "Config watcher started");
        Ok(watcher)
    }
}

fn is_change(kind: &EventKind) -> bool {
    kind.is_modify() || kind.is_create()
}
