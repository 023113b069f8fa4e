// src/domain/comment/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::value_objects::{CommentAuthor, CommentBody, CommentId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub author: CommentAuthor,
    pub commented_at: DateTime<Utc>,
    pub article_id: ArticleId,
}

impl Comment {
    /// Overwrite body and author in place. Identifier, article link and
    /// timestamp are frozen after creation.
    pub fn set_content(&mut self, body: CommentBody, author: CommentAuthor) {
        self.body = body;
        self.author = author;
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub author: CommentAuthor,
    pub commented_at: DateTime<Utc>,
    pub article_id: ArticleId,
}

#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub body: CommentBody,
    pub author: CommentAuthor,
}
