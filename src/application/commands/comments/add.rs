// src/application/commands/comments/add.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentAuthor, CommentBody, NewComment},
    },
};

pub struct AddCommentCommand {
    pub article_id: i64,
    pub body: String,
    pub author: String,
}

impl CommentCommandService {
    pub async fn add_comment(&self, command: AddCommentCommand) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id).map_err(|_| {
            ApplicationError::not_found(format!(
                "article not found with id: {}",
                command.article_id
            ))
        })?;

        // Article existence comes first: a missing article is NotFound even
        // when the (author, body) pair would also collide.
        if self.article_reads.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(format!(
                "article not found with id: {}",
                command.article_id
            )));
        }

        let body = CommentBody::new(command.body)?;
        let author = CommentAuthor::new(command.author)?;

        if self
            .read_repo
            .find_duplicate(article_id, &author, &body)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(
                "this author has already posted this comment on this article",
            ));
        }

        let new_comment = NewComment {
            body,
            author,
            commented_at: self.clock.now(),
            article_id,
        };

        let created = self.write_repo.insert(new_comment).await?;
        Ok(created.into())
    }
}
