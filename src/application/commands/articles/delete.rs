// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    pub fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        self.store.delete(command.id)?;
        Ok(())
    }
}
