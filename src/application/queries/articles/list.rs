use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    pub fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.store.list_all()?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
