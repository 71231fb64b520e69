use std::sync::Arc;

use crate::domain::article::ArticleStore;

pub struct ArticleQueryService {
    pub(super) store: Arc<dyn ArticleStore>,
}

impl ArticleQueryService {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }
}
