pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleReplacement, NewArticle};
pub use repository::ArticleStore;
pub use value_objects::{ArticleId, UserId};
