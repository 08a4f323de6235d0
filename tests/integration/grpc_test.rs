//! Tests for the gRPC document category service, called in-process.

use tonic::{Code, Request};

use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_grpc::DocumentCategoryHandler;
use docsvc_grpc::pb;
use docsvc_grpc::pb::document_category_service_server::DocumentCategoryService;
use docsvc_grpc::status::{CATEGORY_NOT_FOUND, UNPROCESSABLE_ENTITY};

use crate::helpers::{test_pool, unique_tag, unreachable_pool};

fn save_request(slug: &str) -> pb::SaveDocumentCategoryRequest {
    pb::SaveDocumentCategoryRequest {
        slug: slug.to_string(),
        name: "Contracts".to_string(),
        description: "Signed contracts".to_string(),
        mime_types: "application/pdf".to_string(),
        size: 8192.0,
    }
}

#[tokio::test]
async fn test_save_rejects_invalid_payload() {
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(unreachable_pool()));

    let status = handler
        .save_document_category(Request::new(pb::SaveDocumentCategoryRequest {
            slug: String::new(),
            size: -1.0,
            ..save_request("")
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_rejects_oversized_page() {
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(unreachable_pool()));

    let status = handler
        .get_document_categories(Request::new(pb::GetDocumentCategoriesRequest {
            parameters: Some(pb::Parameters {
                per_page: 26,
                ..Default::default()
            }),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_database_failure_is_internal() {
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(unreachable_pool()));

    let status = handler
        .find_document_category(Request::new(pb::FindDocumentCategoryRequest {
            id: uuid::Uuid::new_v4().to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "error.common.internal_server_error");
}

#[tokio::test]
async fn test_category_lifecycle() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(pool));
    let slug = format!("grpc-{}", unique_tag());

    let saved = handler
        .save_document_category(Request::new(save_request(&slug)))
        .await
        .expect("save")
        .into_inner();
    assert_eq!(saved.slug, slug);
    assert_eq!(saved.desc, "Signed contracts");
    assert!(saved.created_at.ends_with('Z'));

    let found = handler
        .find_document_category(Request::new(pb::FindDocumentCategoryRequest {
            id: saved.id.clone(),
        }))
        .await
        .expect("find")
        .into_inner();
    assert_eq!(found, saved);

    let by_slug = handler
        .find_document_category_by_slug(Request::new(pb::FindDocumentCategoryBySlugRequest {
            slug: slug.clone(),
        }))
        .await
        .expect("find by slug")
        .into_inner();
    assert_eq!(by_slug.id, saved.id);

    let updated = handler
        .update_document_category(Request::new(pb::UpdateDocumentCategoryRequest {
            id: saved.id.clone(),
            name: "Archived contracts".to_string(),
            ..Default::default()
        }))
        .await
        .expect("update")
        .into_inner();
    assert_eq!(updated.name, "Archived contracts");
    assert_eq!(updated.slug, slug);
    assert_eq!(updated.size, 8192.0);

    let listed = handler
        .get_document_categories(Request::new(pb::GetDocumentCategoriesRequest {
            parameters: Some(pb::Parameters {
                equal: format!("equal[slug]={slug}"),
                ..Default::default()
            }),
        }))
        .await
        .expect("list")
        .into_inner();
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].name, "Archived contracts");
    assert_eq!(
        listed.meta,
        Some(pb::DocumentCategoryMeta {
            page: 1,
            per_page: 5,
            total: 1,
        })
    );

    let deleted = handler
        .delete_document_category(Request::new(pb::DeleteDocumentCategoryRequest {
            id: saved.id.clone(),
        }))
        .await
        .expect("delete")
        .into_inner();
    assert!(deleted.deleted_at.ends_with('Z'));

    let status = handler
        .find_document_category(Request::new(pb::FindDocumentCategoryRequest {
            id: saved.id.clone(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), CATEGORY_NOT_FOUND);
}

#[tokio::test]
async fn test_missing_category_operations_are_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let handler = DocumentCategoryHandler::new(DocumentCategoryRepository::new(pool));
    let id = uuid::Uuid::new_v4().to_string();

    let update = handler
        .update_document_category(Request::new(pb::UpdateDocumentCategoryRequest {
            id: id.clone(),
            name: "Nobody".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap_err();
    assert_eq!(update.code(), Code::NotFound);
    assert_eq!(update.message(), CATEGORY_NOT_FOUND);

    let delete = handler
        .delete_document_category(Request::new(pb::DeleteDocumentCategoryRequest { id }))
        .await
        .unwrap_err();
    assert_eq!(delete.code(), Code::NotFound);
}
