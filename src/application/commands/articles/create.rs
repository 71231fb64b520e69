// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::CreatedArticleDto, error::ApplicationResult},
    domain::article::{ArticleStore, NewArticle, UserId},
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl From<CreateArticleCommand> for NewArticle {
    fn from(command: CreateArticleCommand) -> Self {
        Self {
            user_id: UserId::new(command.user_id),
            title: command.title,
            body: command.body,
        }
    }
}

/// Single insert shared by the one-item and bulk paths.
pub(super) fn insert_article(
    store: &dyn ArticleStore,
    command: CreateArticleCommand,
) -> ApplicationResult<CreatedArticleDto> {
    let id = store.insert(command.into())?;
    Ok(id.into())
}

impl ArticleCommandService {
    pub fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedArticleDto> {
        insert_article(self.store.as_ref(), command)
    }
}
