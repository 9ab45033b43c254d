pub mod article;
pub mod cache;
pub mod error;
pub mod generation;
pub mod template;
