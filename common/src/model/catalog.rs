use crate::model::product::Product;
use serde::{Deserialize, Serialize};

/// View model handed to the page renderer for one listing page.
///
/// `total_pages` is `ceil(total_matching / page_size)`, so it is `0` when nothing
/// matches. A page past the end carries an empty `items` list and `has_results == false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_matching: u64,
    pub has_results: bool,
    /// The search term the page was built for, empty when listing everything.
    pub query: String,
}
