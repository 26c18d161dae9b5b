// Jobly Core - Domain, Ports & SQL Builders
// NO database driver: builders emit SQL text plus ordered parameter values

pub mod domain;
pub mod error;
pub mod port;
pub mod sql;

pub use error::{AppError, Result};
