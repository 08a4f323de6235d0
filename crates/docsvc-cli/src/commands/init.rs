//! `db:init`: seed the initial data.

use tabled::Tabled;

use docsvc_core::config::AppConfig;
use docsvc_core::result::AppResult;
use docsvc_database::repositories::DocumentCategoryRepository;
use docsvc_database::seeder::{SeedOutcome, SeedStatus, run_seeders};

use crate::output;

/// One line of the seeding summary.
#[derive(Debug, Tabled)]
struct SeedRow {
    #[tabled(rename = "Seed")]
    name: String,
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl From<SeedOutcome> for SeedRow {
    fn from(outcome: SeedOutcome) -> Self {
        Self {
            name: outcome.name,
            key: outcome.key,
            status: match outcome.status {
                SeedStatus::Created => "created",
                SeedStatus::Skipped => "skipped",
            },
        }
    }
}

/// Run every seeder and print what happened.
pub async fn execute(config: &AppConfig) -> AppResult<()> {
    let db = super::connect(config).await?;
    let categories = DocumentCategoryRepository::new(db.pool().clone());

    let outcomes = run_seeders(&categories).await?;
    db.close().await;

    let rows: Vec<SeedRow> = outcomes.into_iter().map(SeedRow::from).collect();
    output::print_table(&rows);
    output::print_success("Seeding complete.");
    Ok(())
}
