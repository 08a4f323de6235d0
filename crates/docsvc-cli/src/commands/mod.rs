//! CLI command definitions and dispatch.

pub mod grpc;
pub mod init;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use docsvc_core::config::AppConfig;
use docsvc_core::result::AppResult;
use docsvc_database::DatabasePool;

/// Document and document category service.
#[derive(Debug, Parser)]
#[command(name = "document-service", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute; serves the HTTP API when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run pending database migrations
    #[command(name = "db:migrate")]
    DbMigrate,
    /// Seed the initial document categories
    #[command(name = "db:init")]
    DbInit,
    /// Drop every table and re-run the migrations
    #[command(name = "db:reset")]
    DbReset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Migrate, then serve the gRPC API
    #[command(name = "grpc:start")]
    GrpcStart,
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(self, config: AppConfig) -> AppResult<()> {
        match self.command {
            None => serve::execute(config).await,
            Some(Commands::DbMigrate) => migrate::migrate(&config).await,
            Some(Commands::DbInit) => init::execute(&config).await,
            Some(Commands::DbReset { force }) => migrate::reset(&config, force).await,
            Some(Commands::GrpcStart) => grpc::execute(&config).await,
        }
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> AppResult<DatabasePool> {
    DatabasePool::connect(&config.database, &config.app.timezone).await
}
