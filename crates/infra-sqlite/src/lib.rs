// Jobly Infrastructure - SQLite Adapter
// Implements: JobRepository, CompanyRepository

mod bind;
mod company_repository;
mod connection;
mod error;
mod job_repository;
mod migration;

pub use company_repository::SqliteCompanyRepository;
pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;

// Re-export so callers can name the pool without depending on sqlx directly
pub use sqlx::SqlitePool;

// Note: sqlx::Error conversion is handled by map_sqlx_error in error.rs
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
