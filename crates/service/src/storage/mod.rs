//! Storage abstractions for service layer
//!
//! Contains the in-memory table backing the mock repositories.

pub mod memory_table;

pub use memory_table::MemoryTable;

use sea_orm::DbErr;

use crate::errors::ServiceError;

/// Store error worded like PostgreSQL's for a write pointing at a missing row.
pub fn fk_violation(table: &str, constraint: &str) -> ServiceError {
    ServiceError::Db(DbErr::Custom(format!(
        "insert or update on table \"{table}\" violates foreign key constraint \"{constraint}\""
    )))
}

/// Store error worded like PostgreSQL's for deleting a row that is still referenced.
pub fn restrict_violation(table: &str, constraint: &str, referencing: &str) -> ServiceError {
    ServiceError::Db(DbErr::Custom(format!(
        "update or delete on table \"{table}\" violates foreign key constraint \"{constraint}\" on table \"{referencing}\""
    )))
}
