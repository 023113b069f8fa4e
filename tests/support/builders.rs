// tests/support/builders.rs
use kiji_api::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle};
use kiji_api::domain::comment::{Comment, CommentAuthor, CommentBody, CommentId};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    body: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            body: "Test body".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            published_at: fixed_now(),
        }
    }
}

pub struct CommentBuilder {
    id: i64,
    body: String,
    author: String,
    article_id: i64,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            body: "Test comment".into(),
            author: "tester".into(),
            article_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn article_id(mut self, article_id: i64) -> Self {
        self.article_id = article_id;
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: CommentId::new(self.id).unwrap(),
            body: CommentBody::new(self.body).unwrap(),
            author: CommentAuthor::new(self.author).unwrap(),
            commented_at: fixed_now(),
            article_id: ArticleId::new(self.article_id).unwrap(),
        }
    }
}
