use super::map_error;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentReadRepository, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteCommentWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteCommentReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCommentReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    author: String,
    commented_at: DateTime<Utc>,
    article_id: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::new(row.body)?,
            author: CommentAuthor::new(row.author)?,
            commented_at: row.commented_at,
            article_id: ArticleId::new(row.article_id)?,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for SqliteCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            body,
            author,
            commented_at,
            article_id,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, author, commented_at, article_id) VALUES (?, ?, ?, ?) RETURNING id, body, author, commented_at, article_id",
        )
        .bind(body.as_str())
        .bind(author.as_str())
        .bind(commented_at)
        .bind(i64::from(article_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let CommentUpdate { id, body, author } = update;

        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET body = ?, author = ? WHERE id = ? RETURNING id, body, author, commented_at, article_id",
        )
        .bind(body.as_str())
        .bind(author.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?
        .ok_or_else(|| DomainError::NotFound(format!("comment {} not found", i64::from(id))))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for SqliteCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, author, commented_at, article_id FROM comments WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, author, commented_at, article_id FROM comments WHERE article_id = ? ORDER BY id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn find_duplicate(
        &self,
        article_id: ArticleId,
        author: &CommentAuthor,
        body: &CommentBody,
    ) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, author, commented_at, article_id FROM comments WHERE article_id = ? AND author = ? AND body = ?",
        )
        .bind(i64::from(article_id))
        .bind(author.as_str())
        .bind(body.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Comment::try_from).transpose()
    }
}
