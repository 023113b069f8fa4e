use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub author: String,
    pub commented_at: DateTime<Utc>,
    pub article_id: i64,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            body: comment.body.into(),
            author: comment.author.into(),
            commented_at: comment.commented_at,
            article_id: comment.article_id.into(),
        }
    }
}
