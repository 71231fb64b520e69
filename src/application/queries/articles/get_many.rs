use std::sync::Arc;

use super::{ArticleQueryService, get_by_id::fetch_article};
use crate::{
    application::{bulk::fan_out, dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticlesByIdsQuery {
    pub ids: Vec<ArticleId>,
}

impl ArticleQueryService {
    /// Fetch several articles, keeping the order of `query.ids`.
    ///
    /// A single id takes the direct path; anything larger fans out one
    /// worker per id. Any missing id fails the whole request.
    pub async fn get_articles_by_ids(
        &self,
        query: GetArticlesByIdsQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if let [id] = query.ids.as_slice() {
            let article = fetch_article(self.store.as_ref(), *id)?;
            return Ok(vec![article.into()]);
        }

        let store = Arc::clone(&self.store);
        let articles = fan_out(query.ids, move |id| fetch_article(store.as_ref(), id)).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
