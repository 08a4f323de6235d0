//! Database tests for the document category repository.

use chrono::{Duration, Utc};

use docsvc_core::error::ErrorKind;
use docsvc_core::parameter::SqlQueryParameters;
use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_entity::document_category::{
    CreateDocumentCategory, DocumentCategory, UpdateDocumentCategory,
};

use crate::helpers::{create_category, test_pool, unique_tag, unreachable_pool};

/// Three categories sharing `tag` in their name, created in order.
async fn seed_three(repository: &DocumentCategoryRepository, tag: &str) -> [String; 3] {
    let slugs = ["alpha", "beta", "gamma"].map(|prefix| format!("{prefix}-{tag}"));
    for slug in &slugs {
        create_category(repository, slug, &slug.replace('-', " ")).await;
    }
    slugs
}

fn slugs(categories: &[DocumentCategory]) -> Vec<&str> {
    categories.iter().map(|c| c.slug.as_str()).collect()
}

#[tokio::test]
async fn test_find_and_find_by_slug() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let slug = format!("find-{}", unique_tag());
    let saved = create_category(&repository, &slug, "Find").await;

    assert_eq!(saved.id.len(), 36);
    assert_eq!(repository.find(&saved.id).await.expect("find"), saved);
    assert_eq!(repository.find_by_slug(&slug).await.expect("find by slug").id, saved.id);

    let missing = repository.find_by_slug(&format!("missing-{}", unique_tag())).await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_list_with_or_conditions() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let tag = unique_tag();
    let [alpha, beta, _] = seed_three(&repository, &tag).await;

    let params = SqlQueryParameters::from_query(&format!(
        "search_condition=or&equal[slug]={alpha}&equal[slug]={beta}&order_by=created_at&order_method=asc"
    ));
    let (categories, meta) = repository.get_list(&params).await.expect("list");

    assert_eq!(slugs(&categories), vec![alpha.as_str(), beta.as_str()]);
    assert_eq!(meta.total, 2);
    assert_eq!(meta.page, 1);
    assert_eq!(meta.per_page, 5);
}

#[tokio::test]
async fn test_list_with_and_conditions() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let tag = unique_tag();
    let [_, _, gamma] = seed_three(&repository, &tag).await;

    let params = SqlQueryParameters::from_query(&format!("like[name]={tag}&equal[slug]={gamma}"));
    let (categories, meta) = repository.get_list(&params).await.expect("list");

    assert_eq!(slugs(&categories), vec![gamma.as_str()]);
    assert_eq!(meta.total, 1);
}

#[tokio::test]
async fn test_list_paginates_and_counts_all_matches() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let tag = unique_tag();
    let [alpha, beta, gamma] = seed_three(&repository, &tag).await;

    let page = |n: i64| {
        SqlQueryParameters::from_query(&format!(
            "like[name]={tag}&per_page=2&page={n}&order_by=created_at&order_method=asc"
        ))
    };

    let (first, meta) = repository.get_list(&page(1)).await.expect("page 1");
    assert_eq!(slugs(&first), vec![alpha.as_str(), beta.as_str()]);
    assert_eq!((meta.page, meta.per_page, meta.total), (1, 2, 3));

    let (second, meta) = repository.get_list(&page(2)).await.expect("page 2");
    assert_eq!(slugs(&second), vec![gamma.as_str()]);
    assert_eq!((meta.page, meta.per_page, meta.total), (2, 2, 3));
}

#[tokio::test]
async fn test_list_date_range() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let tag = unique_tag();
    seed_three(&repository, &tag).await;

    let today = Utc::now().date_naive();
    let around_today = SqlQueryParameters::from_query(&format!(
        "like[name]={tag}&date_range_by=created_at&date_start={}&date_end={}",
        today - Duration::days(1),
        today + Duration::days(1),
    ));
    let (_, meta) = repository.get_list(&around_today).await.expect("list");
    assert_eq!(meta.total, 3);

    let long_ago = SqlQueryParameters::from_query(&format!(
        "like[name]={tag}&date_range_by=created_at&date_start=2000-01-01&date_end=2000-01-31"
    ));
    let (categories, meta) = repository.get_list(&long_ago).await.expect("list");
    assert!(categories.is_empty());
    assert_eq!(meta.total, 0);
}

#[tokio::test]
async fn test_list_rejects_invalid_parameters_before_querying() {
    let repository = DocumentCategoryRepository::new(unreachable_pool());

    let params = SqlQueryParameters::from_query("per_page=26&like[description]=x");
    let err = repository.get_list(&params).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    let fields: Vec<_> = err.details.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["per_page", "like"]);
}

#[tokio::test]
async fn test_update_overwrites_only_non_empty_fields() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let slug = format!("update-{}", unique_tag());
    let saved = create_category(&repository, &slug, "Before").await;

    let updated = repository
        .update(
            &saved.id,
            &UpdateDocumentCategory {
                name: "After".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.name, "After");
    assert_eq!(updated.slug, slug);
    assert_eq!(updated.size, 4096.0);
    assert_eq!(updated.description, "Before category");
    assert_eq!(updated.mime_types, "application/pdf");
    assert!(updated.updated_at >= saved.updated_at);
    assert_eq!(repository.find(&saved.id).await.expect("find"), updated);

    let missing = repository
        .update(&uuid::Uuid::new_v4().to_string(), &UpdateDocumentCategory::default())
        .await;
    assert!(missing.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_delete_is_soft_and_returns_deleted_at() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool.clone());
    let slug = format!("delete-{}", unique_tag());
    let saved = create_category(&repository, &slug, "Delete").await;

    let deleted = repository.delete(&saved.id).await.expect("delete");
    assert_eq!(deleted.id, saved.id);
    assert!(deleted.deleted_at.is_some());

    assert!(repository.find(&saved.id).await.unwrap_err().is_not_found());
    assert!(repository.find_by_slug(&slug).await.unwrap_err().is_not_found());
    assert!(repository.delete(&saved.id).await.unwrap_err().is_not_found());

    let (still_stored,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM document_categories WHERE id = $1")
            .bind(&saved.id)
            .fetch_one(&pool)
            .await
            .expect("count");
    assert_eq!(still_stored, 1);
}

#[tokio::test]
async fn test_slug_is_unique_among_live_rows_only() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let repository = DocumentCategoryRepository::new(pool);
    let slug = format!("unique-{}", unique_tag());
    let first = create_category(&repository, &slug, "First").await;

    let duplicate = repository
        .save(CreateDocumentCategory {
            slug: slug.clone(),
            name: "Duplicate".to_string(),
            ..Default::default()
        })
        .await;
    assert_eq!(duplicate.unwrap_err().kind, ErrorKind::Database);

    repository.delete(&first.id).await.expect("delete");
    let second = create_category(&repository, &slug, "Second").await;

    assert_ne!(second.id, first.id);
    assert_eq!(repository.find_by_slug(&slug).await.expect("find").id, second.id);
}
