use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId, ArticleStore},
};

pub struct GetArticleByIdQuery {
    pub id: ArticleId,
}

/// Single lookup shared by the one-item and bulk paths.
pub(super) fn fetch_article(store: &dyn ArticleStore, id: ArticleId) -> ApplicationResult<Article> {
    store
        .find_by_id(id)?
        .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
}

impl ArticleQueryService {
    pub fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        fetch_article(self.store.as_ref(), query.id).map(Into::into)
    }
}
