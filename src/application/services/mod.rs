// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, queries::articles::ArticleQueryService,
    },
    domain::article::ArticleStore,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(article_store: Arc<dyn ArticleStore>) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(&article_store)));
        let article_queries = Arc::new(ArticleQueryService::new(article_store));

        Self {
            article_commands,
            article_queries,
        }
    }
}
