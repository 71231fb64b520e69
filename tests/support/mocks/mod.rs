// tests/support/mocks/mod.rs
pub mod article_stores;

pub use article_stores::*;
