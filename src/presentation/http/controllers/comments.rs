// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{AddCommentCommand, DeleteCommentCommand, UpdateCommentCommand},
    dto::CommentDto,
    queries::comments::{GetCommentQuery, ListCommentsQuery},
};
use crate::domain::comment::value_objects::{AUTHOR_MAX_CHARS, COMMENT_BODY_MAX_CHARS};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub body: String,
    pub author: String,
}

impl CommentRequest {
    fn validate(&self) -> Result<(), HttpError> {
        let mut errors = Vec::new();
        if self.body.trim().is_empty() {
            errors.push("comment body must not be empty".to_string());
        }
        if self.body.chars().count() > COMMENT_BODY_MAX_CHARS {
            errors.push(format!(
                "comment body must not exceed {COMMENT_BODY_MAX_CHARS} characters"
            ));
        }
        if self.author.trim().is_empty() {
            errors.push("author must not be empty".to_string());
        }
        if self.author.chars().count() > AUTHOR_MAX_CHARS {
            errors.push(format!("author must not exceed {AUTHOR_MAX_CHARS} characters"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(HttpError::validation_failed(errors))
        }
    }
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    payload.validate()?;

    let command = AddCommentCommand {
        article_id,
        body: payload.body,
        author: payload.author,
    };

    let created = state
        .services
        .comment_commands
        .add_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

// Item routes are nested under the article for the URL shape only; comments
// are looked up by their own identifier.
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path((_article_id, comment_id)): Path<(i64, i64)>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_queries
        .get_comment(GetCommentQuery { id: comment_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Path((_article_id, comment_id)): Path<(i64, i64)>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    payload.validate()?;

    let command = UpdateCommentCommand {
        id: comment_id,
        body: payload.body,
        author: payload.author,
    };

    state
        .services
        .comment_commands
        .update_comment(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path((_article_id, comment_id)): Path<(i64, i64)>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id: comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
