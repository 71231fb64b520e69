mod by_user;
mod get_by_id;
mod get_many;
mod list;
mod service;

pub use by_user::ListArticlesByUserQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use get_many::GetArticlesByIdsQuery;
pub use service::ArticleQueryService;
