//! Database tests for the initial data seeder.

use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_database::seeder::{DEFAULT_CATEGORY_SIZE, SeedStatus, run_seeders};

use crate::helpers::test_pool;

#[tokio::test]
async fn test_seeders_create_once_then_skip() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let categories = DocumentCategoryRepository::new(pool);

    for slug in ["original", "sign"] {
        if let Ok(existing) = categories.find_by_slug(slug).await {
            categories.delete(&existing.id).await.expect("clear seeded category");
        }
    }

    let first = run_seeders(&categories).await.expect("first seed");
    let statuses: Vec<_> = first.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![SeedStatus::Created, SeedStatus::Created]);
    let keys: Vec<_> = first.iter().map(|o| o.key.as_str()).collect();
    assert_eq!(keys, vec!["original", "sign"]);

    let second = run_seeders(&categories).await.expect("second seed");
    let statuses: Vec<_> = second.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![SeedStatus::Skipped, SeedStatus::Skipped]);

    let sign = categories.find_by_slug("sign").await.expect("seeded sign");
    assert_eq!(sign.name, "Sign");
    assert_eq!(sign.mime_types, "application/pdf");
    assert_eq!(sign.size, DEFAULT_CATEGORY_SIZE);
}
