//! Integration tests for the document category endpoints.

use http::StatusCode;
use serde_json::json;

use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_entity::document_category::CreateDocumentCategory;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_referer_with_fragment_is_rejected() {
    let app = TestApp::without_database("development");
    let response = app
        .get(
            "/api/v1/document-categories/abc",
            &[("Referer", "https://app.example.com/#/documents")],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "code": 400,
            "data": null,
            "message": "common.error.uri_contains_illegal_character",
        })
    );
}

#[tokio::test]
async fn test_referer_guard_does_not_apply_to_ping() {
    let app = TestApp::without_database("development");
    let response = app.get("/ping", &[("Referer", "https://app.example.com/#/")]).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_database_failure_is_masked_in_production() {
    let app = TestApp::without_database("production");
    let response = app.get("/api/v1/document-categories/abc", &[]).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["code"], 500);
    assert_eq!(response.body["message"], "error.common.internal_server_error");
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_database_failure_is_detailed_outside_production() {
    let app = TestApp::without_database("development");
    let response = app.get("/api/v1/document-categories/abc", &[]).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_ne!(response.body["message"], "error.common.internal_server_error");
}

#[tokio::test]
async fn test_view_category() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let slug = format!("it-{}", uuid::Uuid::new_v4().simple());
    let category = DocumentCategoryRepository::new(app.db_pool.clone())
        .save(CreateDocumentCategory {
            id: String::new(),
            slug: slug.clone(),
            name: "Integration".to_string(),
            description: "Created by a test".to_string(),
            mime_types: "application/pdf".to_string(),
            size: 2048.0,
        })
        .await
        .expect("save category");

    let response = app
        .get(&format!("/api/v1/document-categories/{}", category.id), &[])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "success.view_category");
    assert_eq!(
        response.body["data"],
        json!({
            "id": category.id,
            "name": "Integration",
            "slug": slug,
            "size": 2048.0,
            "mime_types": "application/pdf",
            "desc": "Created by a test",
        })
    );
    assert!(response.body["data"].get("created_at").is_none());
}

#[tokio::test]
async fn test_view_missing_category() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let response = app
        .get(&format!("/api/v1/document-categories/{}", uuid::Uuid::new_v4()), &[])
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"code": 404, "data": null, "message": "error.common.not_found"})
    );
}

#[tokio::test]
async fn test_deleted_category_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(app.db_pool.clone());
    let category = repository
        .save(CreateDocumentCategory {
            slug: format!("it-{}", uuid::Uuid::new_v4().simple()),
            name: "Deleted".to_string(),
            size: 1.0,
            ..Default::default()
        })
        .await
        .expect("save category");
    repository.delete(&category.id).await.expect("delete category");

    let response = app
        .get(&format!("/api/v1/document-categories/{}", category.id), &[])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
