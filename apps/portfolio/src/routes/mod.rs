pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::contact::handlers as contact;
use crate::portfolio::handlers as portfolio;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(portfolio::handle_page))
        .route("/contact", post(contact::handle_contact_form))
        .route("/resume", get(resume::handle_download_resume))
        .nest_service("/assets", assets)
        // JSON API
        .route("/api/v1/projects", get(portfolio::handle_list_projects))
        .route("/api/v1/contact", post(contact::handle_compose_contact))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::content::load_content;

    fn test_app(dir: &Path) -> Router {
        let config = Config {
            port: 0,
            content_path: None,
            assets_dir: dir.join("assets"),
            resume_dir: dir.to_path_buf(),
            rust_log: "info".to_string(),
        };
        build_router(AppState::new(config, load_content(None).expect("content")))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8")
    }

    #[tokio::test]
    async fn test_health_ok() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_index_defaults_to_about() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"id="section-about""#));
        assert_eq!(html.matches(r#"id="section-"#).count(), 1);
    }

    #[tokio::test]
    async fn test_index_filters_projects_from_query() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(
                Request::get("/?section=projects&tags=Geospatial%2CPython")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains("<h3>4D Thunderstorm Visualizations</h3>"));
        assert!(!html.contains("<h3>Flood Exposure Mapping</h3>"));
    }

    #[tokio::test]
    async fn test_projects_api_filters_and_drops_unknown_tags() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(
                Request::get("/api/v1/projects?tags=Python,Geospatial,Cobol")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["selected"], serde_json::json!(["Geospatial", "Python"]));
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0]["title"], "4D Thunderstorm Visualizations");
        assert!(value["tags"]
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t.as_str() != Some("Cobol")));
    }

    #[tokio::test]
    async fn test_projects_api_without_tags_returns_all() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(Request::get("/api/v1/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["projects"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_resume_missing_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(Request::get("/resume").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_download_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let content = load_content(None).unwrap();
        let pdf: Vec<u8> = b"%PDF-1.7\n"
            .iter()
            .copied()
            .chain((0..50_000u32).map(|i| (i % 251) as u8))
            .collect();
        std::fs::write(dir.path().join(&content.profile.resume_filename), &pdf).unwrap();

        let response = test_app(dir.path())
            .oneshot(Request::get("/resume").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!(
                "attachment; filename=\"{0}\"; filename*=UTF-8''{0}",
                content.profile.resume_filename
            )
            .as_str()
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.len(), pdf.len());
        assert_eq!(body.as_ref(), pdf.as_slice());
    }

    #[tokio::test]
    async fn test_page_offers_download_once_resume_added() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let before = body_string(
            app.clone()
                .oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert!(!before.contains(r#"href="/resume""#));

        let content = load_content(None).unwrap();
        std::fs::write(dir.path().join(&content.profile.resume_filename), b"%PDF").unwrap();

        let after = body_string(
            app.oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert!(after.contains(r#"href="/resume""#));
    }

    #[tokio::test]
    async fn test_contact_form_renders_mailto() {
        let dir = tempfile::tempdir().unwrap();
        let response = test_app(dir.path())
            .oneshot(
                Request::post("/contact")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("name=Sam&email=sam%40example.com&message=Hello+there"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"id="section-contact""#));
        assert!(html
            .contains("mailto:alex.morgan@example.com?subject=Portfolio%20contact%20from%20Sam"));
        assert!(html.contains("body=Hello%20there"));
    }

    #[tokio::test]
    async fn test_contact_api_truncates_long_message() {
        let dir = tempfile::tempdir().unwrap();
        let message = "lightning ".repeat(300);
        let payload = serde_json::json!({ "name": "", "email": "", "message": message });
        let response = test_app(dir.path())
            .oneshot(
                Request::post("/api/v1/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(value["subject"], "Portfolio contact from Anonymous");
        let body = value["body"].as_str().unwrap();
        assert!(body.chars().count() <= 1500);
        assert!(body.ends_with("lightning ..."));
    }

    #[tokio::test]
    async fn test_assets_served_from_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/profile.jpg"), b"jpeg-bytes").unwrap();

        let response = test_app(dir.path())
            .oneshot(Request::get("/assets/profile.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "jpeg-bytes");
    }
}
