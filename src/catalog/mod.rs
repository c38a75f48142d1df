mod loader;
mod matcher;
mod store;

pub use loader::{load_catalog, load_catalog_from_reader};
pub use matcher::{fuzzy_match, similarity, MATCH_THRESHOLD};
pub use store::{Catalog, DEFAULT_SEARCH_LIMIT};
