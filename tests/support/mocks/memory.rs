// tests/support/mocks/memory.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use kiji_api::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use kiji_api::domain::comment::{
    Comment, CommentAuthor, CommentBody, CommentId, CommentReadRepository, CommentUpdate,
    CommentWriteRepository, NewComment,
};
use kiji_api::domain::errors::{DomainError, DomainResult};

#[derive(Default)]
struct Inner {
    articles: BTreeMap<i64, Article>,
    comments: BTreeMap<i64, Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

/// In-memory stand-in for the SQLite store, mirroring its unique indexes
/// and the article-to-comment delete cascade.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn seed_article(&self, article: Article) {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(article.id);
        inner.next_article_id = inner.next_article_id.max(id);
        inner.articles.insert(id, article);
    }

    pub fn seed_comment(&self, comment: Comment) {
        let mut inner = self.inner.lock().unwrap();
        let id = i64::from(comment.id);
        inner.next_comment_id = inner.next_comment_id.max(id);
        inner.comments.insert(id, comment);
    }

    pub fn comment_count(&self) -> usize {
        self.inner.lock().unwrap().comments.len()
    }
}

pub struct MemoryArticleWrite(pub Arc<MemoryStore>);

#[async_trait]
impl ArticleWriteRepository for MemoryArticleWrite {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut inner = self.0.inner.lock().unwrap();
        if inner.articles.values().any(|a| a.title == article.title) {
            return Err(DomainError::Conflict(
                "UNIQUE constraint failed: articles.title".into(),
            ));
        }
        inner.next_article_id += 1;
        let stored = Article {
            id: ArticleId::new(inner.next_article_id)?,
            title: article.title,
            body: article.body,
            published_at: article.published_at,
        };
        inner.articles.insert(i64::from(stored.id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut inner = self.0.inner.lock().unwrap();
        let article = inner
            .articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| {
                DomainError::NotFound(format!("article {} not found", i64::from(update.id)))
            })?;
        article.set_content(update.title, update.body);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let raw = i64::from(id);
        let mut inner = self.0.inner.lock().unwrap();
        inner.articles.remove(&raw);
        // FK cascade
        inner.comments.retain(|_, c| i64::from(c.article_id) != raw);
        Ok(())
    }
}

pub struct MemoryArticleRead(pub Arc<MemoryStore>);

#[async_trait]
impl ArticleReadRepository for MemoryArticleRead {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.articles.get(&i64::from(id)).cloned())
    }

    async fn find_by_title(&self, title: &ArticleTitle) -> DomainResult<Option<Article>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .articles
            .values()
            .find(|a| a.title == *title)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.articles.values().cloned().collect())
    }
}

pub struct MemoryCommentWrite(pub Arc<MemoryStore>);

#[async_trait]
impl CommentWriteRepository for MemoryCommentWrite {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut inner = self.0.inner.lock().unwrap();
        let duplicate = inner.comments.values().any(|c| {
            c.article_id == comment.article_id
                && c.author == comment.author
                && c.body == comment.body
        });
        if duplicate {
            return Err(DomainError::Conflict(
                "UNIQUE constraint failed: comments.article_id, comments.author, comments.body"
                    .into(),
            ));
        }
        inner.next_comment_id += 1;
        let stored = Comment {
            id: CommentId::new(inner.next_comment_id)?,
            body: comment.body,
            author: comment.author,
            commented_at: comment.commented_at,
            article_id: comment.article_id,
        };
        inner.comments.insert(i64::from(stored.id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let mut inner = self.0.inner.lock().unwrap();
        let comment = inner
            .comments
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| {
                DomainError::NotFound(format!("comment {} not found", i64::from(update.id)))
            })?;
        comment.set_content(update.body, update.author);
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut inner = self.0.inner.lock().unwrap();
        inner.comments.remove(&i64::from(id));
        Ok(())
    }
}

pub struct MemoryCommentRead(pub Arc<MemoryStore>);

#[async_trait]
impl CommentReadRepository for MemoryCommentRead {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner.comments.get(&i64::from(id)).cloned())
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .comments
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }

    async fn find_duplicate(
        &self,
        article_id: ArticleId,
        author: &CommentAuthor,
        body: &CommentBody,
    ) -> DomainResult<Option<Comment>> {
        let inner = self.0.inner.lock().unwrap();
        Ok(inner
            .comments
            .values()
            .find(|c| c.article_id == article_id && c.author == *author && c.body == *body)
            .cloned())
    }
}
