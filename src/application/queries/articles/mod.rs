pub mod get_by_id;
pub mod list;
pub mod service;

pub use get_by_id::GetArticleQuery;
pub use service::ArticleQueryService;
