pub mod caption;
pub mod meme;
pub mod news;
pub mod templates;
