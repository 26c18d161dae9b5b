// Port Layer - Interfaces for the store

pub mod company_repository;
pub mod job_repository;

// Re-exports
pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
