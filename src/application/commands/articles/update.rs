use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleReplacement},
};

/// Full replacement of an article's content. The owner never changes.
pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, body } = command;
        let updated = self
            .store
            .replace(id, ArticleReplacement { title, body })?;
        Ok(updated.into())
    }
}
