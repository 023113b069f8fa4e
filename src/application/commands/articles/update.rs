use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("article not found with id: {}", command.id))
        })?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("article not found with id: {}", command.id))
            })?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;

        // Keeping the current title is fine; only a *different* article
        // holding it is a conflict.
        if let Some(existing) = self.read_repo.find_by_title(&title).await? {
            if existing.id != id {
                return Err(ApplicationError::conflict(format!(
                    "another article with this title already exists: {title}"
                )));
            }
        }

        article.set_content(title, body);
        let updated = self
            .write_repo
            .update(ArticleUpdate {
                id,
                title: article.title.clone(),
                body: article.body.clone(),
            })
            .await?;

        let comments = self.comment_reads.list_by_article(id).await?;
        Ok(ArticleDto::new(updated, comments))
    }
}
