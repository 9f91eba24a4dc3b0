//! Blog API and upload-serving integration tests
//!
//! The static /uploads tests need no database; the CRUD flows are
//! `#[ignore]`d and need a Postgres reachable via `DATABASE_URL`.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serial_test::serial;

use common::auth_helpers::create_test_user;
use common::database::TestDatabase;
use common::{spawn_app, spawn_app_without_db};

fn image_part() -> Part {
    Part::bytes(b"fake png bytes".to_vec())
        .file_name("cover.png")
        .mime_type("image/png")
}

#[tokio::test]
async fn test_uploaded_file_is_served() {
    let app = spawn_app_without_db();

    tokio::fs::write(app.uploads_dir().join("123-pic.png"), b"png!")
        .await
        .unwrap();

    let response = app.server.get("/uploads/123-pic.png").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.as_bytes().as_ref(), b"png!");
}

#[tokio::test]
async fn test_missing_upload_is_404() {
    let app = spawn_app_without_db();

    let response = app.server.get("/uploads/does-not-exist.png").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_create_and_fetch_blog_with_related() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());
    let author = create_test_user(db.pool(), &app.state.token_keys, "judy", "judy@x.com", "pw").await;

    // Seed several posts by the same author
    let mut first_id = None;
    for i in 0..7 {
        let form = MultipartForm::new()
            .add_text("title", format!("Post {i}"))
            .add_text("excerpt", "short")
            .add_text("body", "long body")
            .add_text("authorId", author.user.id.to_string())
            .add_part("image", image_part());

        let response = app.server.post("/api/blogs").multipart(form).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert!(body["blog"]["imageUrl"]
            .as_str()
            .unwrap()
            .starts_with("/uploads/"));
        if first_id.is_none() {
            first_id = body["blog"]["id"].as_i64();
        }
    }
    let first_id = first_id.unwrap();

    let response = app.server.get(&format!("/api/blogs/{first_id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["blog"]["title"], "Post 0");
    assert_eq!(body["blog"]["author"]["username"], "judy");

    // Capped at 5 and never includes the post itself
    let related = body["relatedBlogs"].as_array().unwrap();
    assert_eq!(related.len(), 5);
    assert!(related.iter().all(|b| b["id"].as_i64() != Some(first_id)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_blog_without_image_is_rejected() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());

    let form = MultipartForm::new()
        .add_text("title", "No image")
        .add_text("excerpt", "short")
        .add_text("body", "long body");

    let response = app.server.post("/api/blogs").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_list_blogs_newest_first() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());

    for title in ["first", "second"] {
        let form = MultipartForm::new()
            .add_text("title", title)
            .add_text("excerpt", "e")
            .add_text("body", "b")
            .add_part("image", image_part());
        let response = app.server.post("/api/blogs").multipart(form).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = app.server.get("/api/blogs").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let blogs = body.as_array().unwrap();
    assert_eq!(blogs.len(), 2);

    let ids: Vec<i64> = blogs.iter().map(|b| b["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_myblogs_filters_by_author() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());
    let a = create_test_user(db.pool(), &app.state.token_keys, "kate", "kate@x.com", "pw").await;
    let b = create_test_user(db.pool(), &app.state.token_keys, "leo", "leo@x.com", "pw").await;

    for (author, title) in [(&a, "by kate"), (&b, "by leo"), (&a, "also kate")] {
        let form = MultipartForm::new()
            .add_text("title", title)
            .add_text("excerpt", "e")
            .add_text("body", "b")
            .add_text("authorId", author.user.id.to_string())
            .add_part("image", image_part());
        app.server.post("/api/blogs").multipart(form).await;
    }

    let response = app
        .server
        .get(&format!("/api/myblogs/{}", a.user.id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let blogs = body.as_array().unwrap();
    assert_eq!(blogs.len(), 2);
    assert!(blogs
        .iter()
        .all(|blog| blog["authorId"].as_i64() == Some(a.user.id)));
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_update_blog_partial_merge() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());

    let form = MultipartForm::new()
        .add_text("title", "original title")
        .add_text("excerpt", "original excerpt")
        .add_text("body", "original body")
        .add_part("image", image_part());
    let response = app.server.post("/api/blogs").multipart(form).await;
    let created: serde_json::Value = response.json();
    let id = created["blog"]["id"].as_i64().unwrap();
    let original_image = created["blog"]["imageUrl"].as_str().unwrap().to_string();

    // Only the title is sent; everything else must survive
    let form = MultipartForm::new().add_text("title", "new title");
    let response = app.server.put(&format!("/api/blogs/{id}")).multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["blog"]["title"], "new title");
    assert_eq!(body["blog"]["excerpt"], "original excerpt");
    assert_eq!(body["blog"]["imageUrl"], original_image.as_str());
}

#[tokio::test]
#[serial]
#[ignore = "requires a Postgres reachable via DATABASE_URL"]
async fn test_delete_blog() {
    let db = TestDatabase::new().await;
    let app = spawn_app(db.pool().clone());

    let form = MultipartForm::new()
        .add_text("title", "doomed")
        .add_text("excerpt", "e")
        .add_text("body", "b")
        .add_part("image", image_part());
    let response = app.server.post("/api/blogs").multipart(form).await;
    let created: serde_json::Value = response.json();
    let id = created["blog"]["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/api/blogs/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.server.get(&format!("/api/blogs/{id}")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
