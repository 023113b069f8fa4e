use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::{CommentAuthor, CommentBody, CommentId, CommentUpdate},
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub body: String,
    pub author: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(command.id).map_err(|_| {
            ApplicationError::not_found(format!("comment not found with id: {}", command.id))
        })?;
        let mut comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("comment not found with id: {}", command.id))
            })?;

        let body = CommentBody::new(command.body)?;
        let author = CommentAuthor::new(command.author)?;

        // Duplicate scope stays the owning article; the comment itself may
        // keep its current pair.
        if let Some(existing) = self
            .read_repo
            .find_duplicate(comment.article_id, &author, &body)
            .await?
        {
            if existing.id != id {
                return Err(ApplicationError::conflict(
                    "another comment with the same author and body already exists on this article",
                ));
            }
        }

        comment.set_content(body, author);
        let updated = self
            .write_repo
            .update(CommentUpdate {
                id,
                body: comment.body.clone(),
                author: comment.author.clone(),
            })
            .await?;

        Ok(updated.into())
    }
}
