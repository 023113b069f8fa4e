use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct ListCommentsQuery {
    pub article_id: i64,
}

impl CommentQueryService {
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::new(query.article_id).map_err(|_| {
            ApplicationError::not_found(format!(
                "article not found with id: {}",
                query.article_id
            ))
        })?;
        if self.article_reads.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "article not found with id: {}",
                query.article_id
            )));
        }

        let comments = self.read_repo.list_by_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
