//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/chapters/parse        POST  解析粘贴的章节文本（预览）
//! - /api/chapters/upload       POST  上传 TXT 文件并解析（预览）
//! - /api/drafts/create         POST  解析文本并保存为草稿批次
//! - /api/drafts/get            POST  获取草稿批次
//! - /api/drafts/list           GET   列出所有草稿批次
//! - /api/drafts/edit           POST  修改草稿章节标题/正文
//! - /api/drafts/remove_chapter POST  删除草稿章节（剩余章节重新编号）
//! - /api/drafts/discard        POST  丢弃草稿批次
//! - /api/drafts/export         POST  导出批量提交请求体

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/chapters", chapter_routes())
        .nest("/drafts", draft_routes())
}

/// Chapter 路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/parse", post(handlers::parse_chapters))
        .route("/upload", post(handlers::upload_chapters))
}

/// Draft 路由
fn draft_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_draft))
        .route("/get", post(handlers::get_draft))
        .route("/list", get(handlers::list_drafts))
        .route("/edit", post(handlers::edit_draft_chapter))
        .route("/remove_chapter", post(handlers::remove_draft_chapter))
        .route("/discard", post(handlers::discard_draft))
        .route("/export", post(handlers::export_draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::application::ChapterPolicy;
    use crate::infrastructure::http::state::DEFAULT_MAX_UPLOAD_SIZE;
    use crate::infrastructure::memory::InMemoryDraftStore;

    fn test_router() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryDraftStore::new()),
            ChapterPolicy::default(),
            DEFAULT_MAX_UPLOAD_SIZE,
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn read_json(response: axum::response::Response) -> Value {
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_json(router: &Router, uri: &str, body: Value) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        read_json(router.clone().oneshot(request).await.unwrap()).await
    }

    async fn get_json(router: &Router, uri: &str) -> Value {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        read_json(router.clone().oneshot(request).await.unwrap()).await
    }

    fn multipart_body(boundary: &str, filename: &str, content: &[u8], start: &str) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"starting_number\"\r\n\r\n{s}\r\n",
                b = boundary,
                s = start
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: text/plain\r\n\r\n",
                b = boundary,
                f = filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
        body
    }

    #[tokio::test]
    async fn test_ping() {
        let body = get_json(&test_router(), "/api/ping").await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_parse_marker_chapters() {
        let body = post_json(
            &test_router(),
            "/api/chapters/parse",
            json!({"content": "#The Beginning\nIt was dark.\n#The End\nIt was light.", "startingNumber": 5}),
        )
        .await;

        assert_eq!(body["errno"], 0);
        let data = &body["data"];
        assert_eq!(data["strategy"], "marker");
        assert_eq!(data["chapterCount"], 2);
        assert_eq!(data["chapters"][0]["chapterNumber"], 5);
        assert_eq!(data["chapters"][0]["title"], "The Beginning");
        assert_eq!(data["chapters"][0]["isFree"], true);
        assert_eq!(data["chapters"][1]["chapterNumber"], 6);
        assert_eq!(data["chapters"][1]["isPremium"], true);
        assert_eq!(data["chapters"][1]["coinCost"], 20);
    }

    #[tokio::test]
    async fn test_parse_empty_content_is_business_error() {
        let body = post_json(&test_router(), "/api/chapters/parse", json!({"content": "  \n"})).await;

        assert_eq!(body["errno"], 400);
        assert_eq!(body["error"], "Please enter chapter content");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_parse_rejects_overflowing_starting_number() {
        let body = post_json(
            &test_router(),
            "/api/chapters/parse",
            json!({"content": "a\n\nb\n\nc", "startingNumber": u32::MAX}),
        )
        .await;

        assert_eq!(body["errno"], 400);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_upload_txt_file() {
        let boundary = "X-BOUNDARY";
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice("Chapter 1: Dawn\nMorning.\n\nChapter 2: Dusk\nEvening.".as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/chapters/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(multipart_body(boundary, "book.txt", &content, "3")))
            .unwrap();

        let body = read_json(test_router().oneshot(request).await.unwrap()).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["strategy"], "heading");
        assert_eq!(body["data"]["chapters"][0]["chapterNumber"], 3);
        assert_eq!(body["data"]["chapters"][1]["title"], "Dusk");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_text_file() {
        let boundary = "X-BOUNDARY";
        let body = multipart_body(boundary, "cover.png", b"PNG", "1");
        let body = String::from_utf8_lossy(&body).replace("text/plain", "image/png");

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/chapters/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let body = read_json(test_router().oneshot(request).await.unwrap()).await;
        assert_eq!(body["errno"], 400);
        assert_eq!(body["error"], "Only TXT files are allowed");
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let router = test_router();

        let created = post_json(
            &router,
            "/api/drafts/create",
            json!({
                "bookId": "book-42",
                "content": "#One\nFirst.\n#Two\nSecond.\n#Three\nThird.",
            }),
        )
        .await;
        assert_eq!(created["errno"], 0);
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["chapterCount"], 3);

        let listed = get_json(&router, "/api/drafts/list").await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["bookId"], "book-42");

        let edited = post_json(
            &router,
            "/api/drafts/edit",
            json!({"id": id, "chapterNumber": 2, "title": "Middle"}),
        )
        .await;
        assert_eq!(edited["data"]["chapters"][1]["title"], "Middle");

        let removed = post_json(
            &router,
            "/api/drafts/remove_chapter",
            json!({"id": id, "chapterNumber": 1}),
        )
        .await;
        assert_eq!(removed["data"]["chapterCount"], 2);
        assert_eq!(removed["data"]["chapters"][0]["chapterNumber"], 1);
        assert_eq!(removed["data"]["chapters"][0]["title"], "Middle");

        let exported = post_json(&router, "/api/drafts/export", json!({"id": id})).await;
        assert_eq!(exported["data"]["bookId"], "book-42");
        assert_eq!(exported["data"]["chapters"][1]["chapterNumber"], 2);
        assert_eq!(exported["data"]["chapters"][1]["content"], "Third.");

        let discarded = post_json(&router, "/api/drafts/discard", json!({"id": id})).await;
        assert_eq!(discarded["errno"], 0);

        let missing = post_json(&router, "/api/drafts/get", json!({"id": id})).await;
        assert_eq!(missing["errno"], 404);
    }

    #[tokio::test]
    async fn test_remove_last_chapter_is_rejected() {
        let router = test_router();
        let created = post_json(
            &router,
            "/api/drafts/create",
            json!({"content": "Just one paragraph."}),
        )
        .await;
        let id = created["data"]["id"].as_str().unwrap().to_string();

        let body = post_json(
            &router,
            "/api/drafts/remove_chapter",
            json!({"id": id, "chapterNumber": 1}),
        )
        .await;
        assert_eq!(body["errno"], 422);
    }
}
