//! Startup orchestration.
//!
//! Order: config → logging → metrics → index and initial feed → watcher →
//! listener. A missing or unreadable feed file is not fatal; the service
//! starts empty and waits for an upload.

use std::sync::Arc;

use notify::RecommendedWatcher;

use crate::config::ServiceConfig;
use crate::feed::{watcher, FeedWatcher};
use crate::index::PlacementIndex;
use crate::service::PlacementService;

/// Build the placement service and load the configured feed, if any.
pub fn build_service(config: &ServiceConfig) -> Arc<PlacementService> {
    let service = Arc::new(PlacementService::new(Arc::new(PlacementIndex::new())));

    match &config.feed.path {
        Some(path) => {
            tracing::info!(path = ?path, "Loading initial feed");
            watcher::reload(path, &service);
        }
        None => tracing::info!("No feed file configured, starting with an empty index"),
    }

    service
}

/// Start the feed watcher when enabled.
///
/// The returned watcher must stay alive for as long as reloads should run.
pub fn start_feed_watcher(
    config: &ServiceConfig,
    service: &Arc<PlacementService>,
) -> Option<RecommendedWatcher> {
    let path = config.feed.path.as_ref().filter(|_| config.feed.watch)?;

    match FeedWatcher::new(path, service.clone()).run() {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::error!(error = %e, "Failed to start feed watcher, hot reload disabled");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_service_without_feed() {
        let service = build_service(&ServiceConfig::default());
        assert!(service.index().is_empty());
        assert!(start_feed_watcher(&ServiceConfig::default(), &service).is_none());
    }

    #[test]
    fn test_build_service_loads_feed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.txt");
        std::fs::write(&path, "A:/a\nbroken\nB:/b").unwrap();

        let mut config = ServiceConfig::default();
        config.feed.path = Some(path);
        let service = build_service(&config);

        assert_eq!(service.index().len(), 2);
        assert_eq!(service.last_load().unwrap().skipped, 1);
    }

    #[test]
    fn test_missing_feed_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServiceConfig::default();
        config.feed.path = Some(dir.path().join("absent.txt"));

        let service = build_service(&config);
        assert!(service.index().is_empty());
    }
}
