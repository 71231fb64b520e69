// src/application/commands/articles/create_many.rs
use std::sync::Arc;

use super::{ArticleCommandService, CreateArticleCommand, create::insert_article};
use crate::application::{bulk::fan_out, dto::CreatedArticleDto, error::ApplicationResult};

pub struct CreateArticlesCommand {
    pub articles: Vec<CreateArticleCommand>,
}

impl ArticleCommandService {
    /// Create several articles; `result[i]` is the id assigned to
    /// `command.articles[i]`.
    ///
    /// If any insert fails the call reports that error. Inserts that already
    /// succeeded stay in the store.
    pub async fn create_articles(
        &self,
        command: CreateArticlesCommand,
    ) -> ApplicationResult<Vec<CreatedArticleDto>> {
        if let [only] = command.articles.as_slice() {
            return Ok(vec![self.create_article(only.clone())?]);
        }

        let store = Arc::clone(&self.store);
        fan_out(command.articles, move |article| insert_article(store.as_ref(), article)).await
    }
}
