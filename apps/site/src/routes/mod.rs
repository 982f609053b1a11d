pub mod health;

use axum::{
    extract::OriginalUri,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers::{handle_contact, handle_contact_redirect};
use crate::content::handlers;
use crate::errors::AppError;
use crate::render::handlers::{handle_home_redirect, handle_index};
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let mut router = Router::new()
        .route("/", get(handle_index))
        .route("/home", get(handle_home_redirect))
        .route(
            "/contact",
            get(handle_contact_redirect).post(handle_contact),
        )
        .route("/health", get(health::health_handler))
        // Content API
        .route("/api/v1/content", get(handlers::handle_get_content));

    // Editing is a development convenience; there is no auth in front of it.
    if state.config.debug {
        router = router
            .route("/api/v1/content/bio", put(handlers::handle_update_bio))
            .route("/api/v1/content/about", put(handlers::handle_update_about))
            .route("/api/v1/content/projects", post(handlers::handle_add_project))
            .route(
                "/api/v1/content/experience",
                post(handlers::handle_add_experience),
            )
            .route(
                "/api/v1/content/education",
                post(handlers::handle_add_education),
            );
    }

    router
        .nest_service("/static", static_files)
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::contact::form::{MISSING_FIELDS_MESSAGE, SENT_MESSAGE};
    use crate::contact::sink::DiscardSink;
    use crate::content::ContentStore;

    fn make_state(debug: bool) -> AppState {
        let config = Config {
            debug,
            ..Config::default()
        };
        AppState::new(ContentStore::seeded(), config, Arc::new(DiscardSink))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_page() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Hello, I'm John Doe"));
        assert!(html.contains(r#"id="projects""#));
        assert!(!html.contains("social-twitter"));
    }

    #[tokio::test]
    async fn test_home_redirects_to_root() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/home")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_contact_get_redirects_to_contact_section() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/contact")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#contact");
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "AI Engineer Portfolio");
    }

    #[tokio::test]
    async fn test_contact_missing_name_keeps_values() {
        let app = build_router(make_state(false));
        let response = app
            .oneshot(form_request("name=&email=x%40y.com&subject=&message=hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(MISSING_FIELDS_MESSAGE));
        assert!(html.contains("notification-negative"));
        assert!(html.contains(r#"value="x@y.com""#));
        assert!(html.contains(">hello</textarea>"));
    }

    #[tokio::test]
    async fn test_contact_success_resets_fields() {
        let app = build_router(make_state(false));
        let response = app
            .oneshot(form_request("name=Jane&email=jane%40x.com&subject=&message=Hi"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(SENT_MESSAGE));
        assert!(html.contains("notification-positive"));
        assert!(!html.contains(r#"value="Jane""#));
        assert!(!html.contains(r#"value="jane@x.com""#));
        assert!(html.contains(r#"name="message" rows="5"></textarea>"#));
    }

    #[tokio::test]
    async fn test_contact_missing_keys_treated_as_empty() {
        let app = build_router(make_state(false));
        let response = app.oneshot(form_request("email=x%40y.com")).await.unwrap();
        let html = body_string(response).await;
        assert!(html.contains(MISSING_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_content_snapshot_is_json() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/api/v1/content")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["projects"].as_array().unwrap().len(), 6);
        assert_eq!(body["experience"][0]["end_date"], "Present");
    }

    #[tokio::test]
    async fn test_mutation_routes_absent_without_debug() {
        let app = build_router(make_state(false));
        let response = app
            .oneshot(json_request("PUT", "/api/v1/content/bio", json!({"text": "x"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_bio_in_debug_mode() {
        let state = make_state(true);
        let app = build_router(state.clone());
        let response = app
            .oneshot(json_request("PUT", "/api/v1/content/bio", json!({"text": "Fresh bio"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.store.read().await.bio(), "Fresh bio");
    }

    #[tokio::test]
    async fn test_add_project_appends_and_renders() {
        let state = make_state(true);
        let app = build_router(state.clone());
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/content/projects",
                json!({
                    "title": "Portfolio Server",
                    "category": "Web",
                    "description": "This site.",
                    "technologies": ["Rust", "Axum"],
                    "demo_url": ""
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        {
            let store = state.store.read().await;
            assert_eq!(store.projects().len(), 7);
            let last = store.projects().last().unwrap();
            assert_eq!(last.title, "Portfolio Server");
            assert_eq!(last.demo_url, None);
        }

        let html = body_string(app.oneshot(get("/")).await.unwrap()).await;
        assert!(html.contains("Portfolio Server"));
    }

    #[tokio::test]
    async fn test_add_project_rejects_empty_title() {
        let state = make_state(true);
        let app = build_router(state.clone());
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/content/projects",
                json!({"title": " ", "category": "Web", "description": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(state.store.read().await.projects().len(), 6);
    }

    #[tokio::test]
    async fn test_add_project_missing_field_is_json_error() {
        let app = build_router(make_state(true));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/content/projects",
                json!({"title": "No Category", "description": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
        assert!(body["error"]["message"].as_str().unwrap().contains("category"));
    }

    #[tokio::test]
    async fn test_update_bio_without_json_content_type_is_json_error() {
        let app = build_router(make_state(true));
        let request = Request::builder()
            .method("PUT")
            .uri("/api/v1/content/bio")
            .body(Body::from(r#"{"text": "x"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_contact_with_json_body_is_json_error() {
        let app = build_router(make_state(false));
        let response = app
            .oneshot(json_request("POST", "/contact", json!({"name": "Jane"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_add_experience_and_education_in_debug_mode() {
        let state = make_state(true);
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/content/experience",
                json!({
                    "title": "Staff Engineer",
                    "company": "Acme",
                    "start_date": "2025",
                    "end_date": "present",
                    "description": "* Built things"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/content/education",
                json!({
                    "degree": "PhD",
                    "institution": "",
                    "start_date": "2018",
                    "end_date": "2022",
                    "description": ""
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let store = state.store.read().await;
        assert_eq!(store.experience().len(), 4);
        assert_eq!(store.education().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = build_router(make_state(false));
        let response = app.oneshot(get("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("profile.jpg"), b"jpeg-bytes").unwrap();

        let config = Config {
            static_dir: dir.path().to_path_buf(),
            ..Config::default()
        };
        let state = AppState::new(ContentStore::seeded(), config, Arc::new(DiscardSink));
        let app = build_router(state);

        let response = app.clone().oneshot(get("/static/profile.jpg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "jpeg-bytes");

        let missing = app.oneshot(get("/static/project1.jpg")).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
