//! Initial data seeding.

use tracing::info;

use docsvc_core::error::AppError;
use docsvc_core::result::AppResult;
use docsvc_entity::document_category::CreateDocumentCategory;

use crate::repositories::DocumentCategoryRepository;

/// Size limit of the predefined categories, in bytes.
pub const DEFAULT_CATEGORY_SIZE: f64 = 10.0 * 10.0 * 10.0 * 1024.0;

/// What a seed did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStatus {
    /// The row was inserted.
    Created,
    /// A row with the same key already existed.
    Skipped,
}

/// Outcome of one seed.
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// Seed name.
    pub name: String,
    /// Seeded key.
    pub key: String,
    /// Whether the row was inserted.
    pub status: SeedStatus,
}

/// The categories every installation starts with.
pub fn initial_categories() -> Vec<CreateDocumentCategory> {
    [("original", "Original"), ("sign", "Sign")]
        .into_iter()
        .map(|(slug, name)| CreateDocumentCategory {
            id: String::new(),
            slug: slug.to_string(),
            name: name.to_string(),
            description: String::new(),
            mime_types: "application/pdf".to_string(),
            size: DEFAULT_CATEGORY_SIZE,
        })
        .collect()
}

/// Insert the initial categories whose slug does not exist yet.
pub async fn run_seeders(categories: &DocumentCategoryRepository) -> AppResult<Vec<SeedOutcome>> {
    let mut outcomes = Vec::new();

    for category in initial_categories() {
        let name = format!("Create initial document category '{}'", category.slug);
        let key = category.slug.clone();

        let status = match categories.find_by_slug(&category.slug).await {
            Ok(_) => SeedStatus::Skipped,
            Err(e) if e.is_not_found() => {
                categories.save(category).await.map_err(|e| {
                    AppError::new(e.kind, format!("Seed failed: {name}: {}", e.message))
                })?;
                SeedStatus::Created
            }
            Err(e) => {
                return Err(AppError::new(
                    e.kind,
                    format!("Seed failed: {name}: {}", e.message),
                ));
            }
        };

        info!(seed = %name, ?status, "Seed applied");
        outcomes.push(SeedOutcome { name, key, status });
    }

    Ok(outcomes)
}
