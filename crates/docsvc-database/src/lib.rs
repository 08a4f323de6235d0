//! # docsvc-database
//!
//! PostgreSQL connection management, migrations, list-query rendering,
//! repositories for documents and document categories, and the initial
//! data seeder.

pub mod connection;
pub mod listing;
pub mod migration;
pub mod repositories;
pub mod seeder;

pub use connection::DatabasePool;
