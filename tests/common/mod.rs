//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use placement_service::config::ServiceConfig;
use placement_service::http::HttpServer;
use placement_service::lifecycle::Shutdown;
use placement_service::{PlacementIndex, PlacementService};

/// A running service on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub service: Arc<PlacementService>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with `config`, bound to 127.0.0.1 on a free port.
pub async fn start_server(config: ServiceConfig) -> TestServer {
    let service = Arc::new(PlacementService::new(Arc::new(PlacementIndex::new())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, service.clone());
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        service,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
