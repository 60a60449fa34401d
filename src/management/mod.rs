mod cache;
mod catalog;

pub use cache::TrackCache;
pub use catalog::CatalogManager;
