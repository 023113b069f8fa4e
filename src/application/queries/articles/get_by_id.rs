use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        // A non-positive id can never match a stored row.
        let id = ArticleId::new(query.id).map_err(|_| {
            ApplicationError::not_found(format!("article not found with id: {}", query.id))
        })?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("article not found with id: {}", query.id))
            })?;

        let comments = self.comment_reads.list_by_article(id).await?;
        Ok(ArticleDto::new(article, comments))
    }
}
