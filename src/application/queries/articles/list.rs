use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;

        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            let comments = self.comment_reads.list_by_article(article.id).await?;
            items.push(ArticleDto::new(article, comments));
        }
        Ok(items)
    }
}
