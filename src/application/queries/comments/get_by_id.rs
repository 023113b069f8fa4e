use super::CommentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentQuery {
    pub id: i64,
}

impl CommentQueryService {
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        // A non-positive id can never match a stored row.
        let id = CommentId::new(query.id).map_err(|_| {
            ApplicationError::not_found(format!("comment not found with id: {}", query.id))
        })?;
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("comment not found with id: {}", query.id))
            })?;
        Ok(comment.into())
    }
}
