// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("comment not found with id: {}", command.id))
        })?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "comment not found with id: {}",
                command.id
            )));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
