pub mod sqlite_article;
pub mod sqlite_comment;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_comment::{SqliteCommentReadRepository, SqliteCommentWriteRepository};

use crate::domain::errors::DomainError;

/// Shared sqlx-to-domain error translation. Unique-index violations become
/// conflicts so a check-then-act race between two writers surfaces as a
/// conflict rather than a duplicate row.
pub(crate) fn map_error(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
