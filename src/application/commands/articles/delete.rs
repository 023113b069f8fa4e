// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("article not found with id: {}", command.id))
        })?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "article not found with id: {}",
                command.id
            )));
        }

        // The store cascades the delete to the article's comments.
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
