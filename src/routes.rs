// src/routes.rs
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{fallback_handler, get_category_handler, list_categories_handler};
use crate::state::AppState;

pub fn app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/categories", get(list_categories_handler))
        .route("/api/categories/{id}", get(get_category_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryCatalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = app_router(Arc::new(AppState {
            categories: CategoryCatalog::seeded(),
        }));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn list_uses_default_limit() {
        let (status, body) = get_json("/api/categories").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "get categories success");
        assert_eq!(
            body["data"]["pagination"],
            json!({ "current_page": 1, "total_page": 2, "total_item": 12 })
        );
        assert_eq!(body["data"]["list_item"].as_array().map(Vec::len), Some(10));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn list_keeps_page_past_the_end() {
        let (status, body) = get_json("/api/categories?page=40&limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({
                "pagination": { "current_page": 40, "total_page": 3, "total_item": 12 },
                "list_item": []
            })
        );
    }

    #[tokio::test]
    async fn list_defaults_to_ascending_order() {
        let (_, body) = get_json("/api/categories?limit=3").await;
        let ids: Vec<i64> = body["data"]["list_item"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect();

        assert_eq!(ids, vec![12, 11, 10]);
    }

    #[tokio::test]
    async fn list_ignores_garbage_parameters() {
        let (status, body) = get_json("/api/categories?page=x&limit=-3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["pagination"],
            json!({ "current_page": 1, "total_page": 2, "total_item": 12 })
        );
    }

    #[tokio::test]
    async fn list_falls_back_on_unreadable_query() {
        let (status, body) = get_json("/api/categories?page=2&page=3&limit=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["pagination"]["current_page"], 1);
        assert_eq!(body["data"]["list_item"].as_array().map(Vec::len), Some(10));
    }

    #[tokio::test]
    async fn list_with_no_matches() {
        let (status, body) = get_json("/api/categories?filter=antibiotik").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({
                "pagination": { "current_page": 1, "total_page": 0, "total_item": 0 },
                "list_item": []
            })
        );
    }

    #[tokio::test]
    async fn detail_found() {
        let (status, body) = get_json("/api/categories/5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], 5);
        assert_eq!(body["data"]["name"], "Herbal");
        assert_eq!(body["message"], "get product detail success!");
    }

    #[tokio::test]
    async fn detail_rejects_non_numeric_id() {
        let (status, body) = get_json("/api/categories/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": [{ "field": "get category", "detail": "convert variabel type failed" }] })
        );
    }

    #[tokio::test]
    async fn detail_unknown_id() {
        let (status, body) = get_json("/api/categories/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"][0]["detail"], "product category not exists");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn unknown_route_is_enveloped() {
        let (status, body) = get_json("/api/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": [{ "field": "not found", "detail": "sorry your destination is not found" }] })
        );
    }
}
