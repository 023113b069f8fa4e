use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
    /// Looks up a comment by its full (article, author, body) triple.
    /// Duplicate detection is scoped to one article; the same pair on a
    /// different article is a distinct comment.
    async fn find_duplicate(
        &self,
        article_id: ArticleId,
        author: &CommentAuthor,
        body: &CommentBody,
    ) -> DomainResult<Option<Comment>>;
}
