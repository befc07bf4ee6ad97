//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the store implementations convert it
//! here so services only ever see `DomainError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

const UNIQUE_SQLITE: &str = "UNIQUE constraint failed: ";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract `table.column` from SQLite "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let start = error_msg.find(UNIQUE_SQLITE)? + UNIQUE_SQLITE.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',' || c == ')')
        .next()
        .filter(|s| !s.is_empty())
}

fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "managers.email_normalized" | "clients.email_normalized" => {
            Some((ConflictKind::UniqueEmail, "Email already registered"))
        }
        "clients.phone" => Some((ConflictKind::UniquePhone, "Phone already registered")),
        _ => None,
    }
}

/// PostgreSQL reports the violated index by name.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("idx_managers_email_normalized_unique")
        || error_msg.contains("idx_clients_email_normalized_unique")
    {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    if error_msg.contains("idx_clients_phone_unique") {
        return Some((ConflictKind::UniquePhone, "Phone already registered"));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some((kind, detail)) = extract_sqlite_table_column(&error_msg)
            .and_then(map_sqlite_table_column_to_conflict)
            .or_else(|| map_postgres_constraint_to_conflict(&error_msg))
        {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
