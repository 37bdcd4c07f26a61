//! Generated artifacts beyond the HTML pages: feeds and sitemap.

pub mod feed;
pub mod sitemap;

pub use feed::build_feed;
pub use sitemap::build_sitemap;
