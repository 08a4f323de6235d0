//! Database tests for the document repository.

use docsvc_core::error::ErrorKind;
use docsvc_core::parameter::SqlQueryParameters;
use docsvc_database::repositories::{DocumentCategoryRepository, DocumentRepository};
use docsvc_entity::document::{CreateDocument, Document, DocumentFilter, UpdateDocument};

use crate::helpers::{create_category, test_pool, unique_tag};

struct Fixture {
    documents: DocumentRepository,
    category_id: String,
    other_category_id: String,
    tag: String,
}

async fn fixture() -> Option<Fixture> {
    let pool = test_pool().await?;
    let categories = DocumentCategoryRepository::new(pool.clone());
    let tag = unique_tag();

    let category = create_category(&categories, &format!("docs-{tag}"), "Docs").await;
    let other = create_category(&categories, &format!("other-{tag}"), "Other").await;

    Some(Fixture {
        documents: DocumentRepository::new(pool),
        category_id: category.id,
        other_category_id: other.id,
        tag,
    })
}

impl Fixture {
    async fn save(&self, name: &str) -> Document {
        self.documents
            .save(CreateDocument {
                category_id: self.category_id.clone(),
                original_name: format!("{name}.pdf"),
                name: format!("{name}-{}", self.tag),
                path: format!("docs/{}/{name}.pdf", self.tag),
                mime_type: "application/pdf".to_string(),
                size: 2048,
                token: format!("token-{name}"),
                ..Default::default()
            })
            .await
            .expect("save document")
    }
}

#[tokio::test]
async fn test_save_and_find() {
    let Some(fx) = fixture().await else {
        return;
    };
    let saved = fx.save("contract").await;

    assert_eq!(saved.id.len(), 36);
    assert_eq!(saved.mime_type, "application/pdf");
    assert_eq!(fx.documents.find(&saved.id).await.expect("find"), saved);

    let missing = fx.documents.find(&uuid::Uuid::new_v4().to_string()).await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_find_by_id_and_category_id() {
    let Some(fx) = fixture().await else {
        return;
    };
    let saved = fx.save("invoice").await;

    let found = fx
        .documents
        .find_by_id_and_category_id(&saved.id, &fx.category_id)
        .await
        .expect("find in category");
    assert_eq!(found.id, saved.id);

    let elsewhere = fx
        .documents
        .find_by_id_and_category_id(&saved.id, &fx.other_category_id)
        .await;
    assert!(elsewhere.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_find_by_path() {
    let Some(fx) = fixture().await else {
        return;
    };
    let saved = fx.save("receipt").await;

    let found = fx.documents.find_by_path(&saved.path).await.expect("find by path");
    assert_eq!(found.id, saved.id);

    let missing = fx.documents.find_by_path(&format!("docs/{}/none.pdf", fx.tag)).await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_find_by_entity_matches_every_given_field() {
    let Some(fx) = fixture().await else {
        return;
    };
    let first = fx.save("first").await;
    let second = fx.save("second").await;

    let found = fx
        .documents
        .find_by_entity(&DocumentFilter {
            category_id: fx.category_id.clone(),
            token: "token-second".to_string(),
            ..Default::default()
        })
        .await
        .expect("find by entity");
    assert_eq!(found.id, second.id);

    let mismatch = fx
        .documents
        .find_by_entity(&DocumentFilter {
            path: first.path.clone(),
            token: "token-second".to_string(),
            ..Default::default()
        })
        .await;
    assert!(mismatch.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_list_by_name_with_metadata() {
    let Some(fx) = fixture().await else {
        return;
    };
    for name in ["a", "b", "c"] {
        fx.save(name).await;
    }

    let params = SqlQueryParameters::from_query(&format!(
        "like[name]={}&per_page=2&order_by=created_at&order_method=asc",
        fx.tag
    ));
    let (documents, meta) = fx.documents.get_list(&params).await.expect("list");

    let names: Vec<_> = documents.iter().map(|d| d.original_name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    assert_eq!((meta.page, meta.per_page, meta.total), (1, 2, 3));

    let rejected = fx
        .documents
        .get_list(&SqlQueryParameters::from_query("like[path]=docs"))
        .await;
    assert_eq!(rejected.unwrap_err().kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_update_overwrites_only_non_empty_fields() {
    let Some(fx) = fixture().await else {
        return;
    };
    let saved = fx.save("draft").await;
    let new_path = format!("docs/{}/final.pdf", fx.tag);

    let updated = fx
        .documents
        .update(
            &saved.id,
            &UpdateDocument {
                path: new_path.clone(),
                category_id: fx.other_category_id.clone(),
                ..Default::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.path, new_path);
    assert_eq!(updated.category_id, fx.other_category_id);
    assert_eq!(updated.name, saved.name);
    assert_eq!(updated.original_name, "draft.pdf");
    assert_eq!(updated.size, 2048);
    assert_eq!(updated.token, "token-draft");
}

#[tokio::test]
async fn test_delete_is_soft_and_returns_deleted_at() {
    let Some(fx) = fixture().await else {
        return;
    };
    let saved = fx.save("obsolete").await;

    let deleted = fx.documents.delete(&saved.id).await.expect("delete");
    assert_eq!(deleted.id, saved.id);
    assert!(deleted.deleted_at.is_some());

    assert!(fx.documents.find(&saved.id).await.unwrap_err().is_not_found());
    assert!(fx.documents.find_by_path(&saved.path).await.unwrap_err().is_not_found());
    assert!(fx.documents.delete(&saved.id).await.unwrap_err().is_not_found());
}
