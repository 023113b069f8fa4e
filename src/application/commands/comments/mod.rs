pub mod add;
pub mod delete;
pub mod service;
pub mod update;

pub use add::AddCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
pub use update::UpdateCommentCommand;
