// src/application/commands/articles/mod.rs
mod create;
mod create_many;
mod delete;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use create_many::CreateArticlesCommand;
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
