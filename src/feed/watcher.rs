//! Feed file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::feed::source::read_feed_file;
use crate::service::PlacementService;

/// Reloads the placement index whenever the feed file changes.
pub struct FeedWatcher {
    path: PathBuf,
    service: Arc<PlacementService>,
}

impl FeedWatcher {
    pub fn new(path: &Path, service: Arc<PlacementService>) -> Self {
        Self {
            path: path.to_path_buf(),
            service,
        }
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for reloads to continue.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let service = self.service;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!(path = ?path, "Feed file change detected, reloading");
                        reload(&path, &service);
                    }
                }
                Err(e) => tracing::error!(error = ?e, "Feed watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Feed watcher started");
        Ok(watcher)
    }
}

/// Read and load the feed file, keeping the current snapshot on failure.
pub fn reload(path: &Path, service: &PlacementService) {
    let text = match read_feed_file(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read feed file. Keeping current placements.");
            return;
        }
    };

    if let Err(e) = service.load(&text) {
        tracing::error!(error = %e, "Failed to load feed file. Keeping current placements.");
    }
}
