use serde::{Deserialize, Serialize};

/// Name stored when a product is created without one.
pub const DEFAULT_PRODUCT_NAME: &str = "Unnamed Product";

/// Image locator stored when a product is created without one.
pub const DEFAULT_IMAGE_URL: &str = "/public/placeholder.png";

/// A single catalog entry as persisted in the `products` table.
///
/// Records are never physically removed; `deleted` flips to `true` on deletion and the
/// row is excluded from every listing from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    pub deleted: bool,
}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteOutcome {
    /// An active product matched and is now soft-deleted.
    Deleted,
    /// No active product matched: unknown id, already deleted, or unparsable input.
    NotFound,
}
