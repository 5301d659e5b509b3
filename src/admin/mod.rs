pub mod handlers;
pub mod auth;

use axum::{
    routing::get,
    Router,
    middleware,
};
use crate::http::server::AppState;
use self::handlers::*;
use self::auth::admin_auth_middleware;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/placements", get(get_placements))
        .layer(middleware::from_fn_with_state(state.clone(), admin_auth_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use crate::config::ServiceConfig;
    use crate::index::PlacementIndex;
    use crate::service::PlacementService;

    fn admin_router() -> (Router, Arc<PlacementService>) {
        let mut config = ServiceConfig::default();
        config.admin.enabled = true;
        config.admin.api_key = "secret".into();
        let service = Arc::new(PlacementService::new(Arc::new(PlacementIndex::new())));
        let state = AppState {
            service: service.clone(),
            config: Arc::new(config),
        };
        (setup_admin_router(state), service)
    }

    #[tokio::test]
    async fn test_requires_bearer_key() {
        let (router, _) = admin_router();

        let response = router
            .clone()
            .oneshot(Request::get("/admin/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router
            .oneshot(
                Request::get("/admin/status")
                    .header("Authorization", "Bearer wrong")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_placements_listing() {
        let (router, service) = admin_router();
        service.load("B:/b\nA:/a,/c\nb:/x").unwrap();

        let response = router
            .oneshot(
                Request::get("/admin/placements")
                    .header("Authorization", "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let listing: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listing["snapshot_version"], 1);
        assert_eq!(
            listing["placements"],
            serde_json::json!([
                {"name": "B", "locations": ["/b"]},
                {"name": "A", "locations": ["/a", "/c"]},
            ])
        );
    }
}
