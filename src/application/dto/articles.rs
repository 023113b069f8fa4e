use crate::application::dto::CommentDto;
use crate::domain::article::Article;
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Transport representation of an article, carrying its comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub comments: Vec<CommentDto>,
}

impl ArticleDto {
    pub fn new(article: Article, comments: Vec<Comment>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            published_at: article.published_at,
            comments: comments.into_iter().map(Into::into).collect(),
        }
    }
}
