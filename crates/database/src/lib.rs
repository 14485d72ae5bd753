//! HookCI Database Layer
//!
//! Installation tracking and tool lookup for the HookCI webhook service.

mod memory;
mod models;
mod queries;
mod sql;
mod store;

pub use memory::MemDb;
pub use models::*;
pub use sql::SqlDb;
pub use store::Db;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database write failed: {0}")]
    Write(#[source] sqlx::Error),

    #[error("Database read failed: {0}")]
    Read(#[source] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
