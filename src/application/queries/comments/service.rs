use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, comment::CommentReadRepository};

pub struct CommentQueryService {
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_reads: Arc<dyn ArticleReadRepository>,
}

impl CommentQueryService {
    pub fn new(
        read_repo: Arc<dyn CommentReadRepository>,
        article_reads: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            article_reads,
        }
    }
}
