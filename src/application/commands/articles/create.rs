// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;

        // Title uniqueness is look-up-then-insert here; the store backs it
        // with a unique index so a racing writer still surfaces a conflict.
        if self.read_repo.find_by_title(&title).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "an article with this title already exists: {title}"
            )));
        }

        let new_article = NewArticle {
            title,
            body,
            published_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(ArticleDto::new(created, Vec::new()))
    }
}
