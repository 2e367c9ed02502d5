//! # Catalog Service Module
//!
//! Groups the server-rendered catalog pages. Every route answers with a complete HTML
//! page built by `view`; mutations answer with the refreshed first listing page.
//!
//! ## Sub-modules:
//! - `list`: search and pagination over active products.
//! - `add`: product creation.
//! - `delete`: soft deletion with an inline not-found notice.
//! - `form`: urlencoded and multipart form extraction.
//! - `view`: HTML rendering.

mod add;
mod delete;
mod form;
mod list;
mod view;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The catalog lives at the site root.
const ROOT_PATH: &str = "";

/// Configures and returns the Actix `Scope` for the catalog routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: listing, optionally filtered by `query` and paged by `page`.
/// *   **`POST /add`**: creates a product from the `name` and `image_url` form fields.
/// *   **`POST /delete`**: soft-deletes the product named by the `productID` form field.
pub fn configure_routes() -> Scope {
    scope(ROOT_PATH)
        .route("/", get().to(list::process))
        .route("/add", post().to(add::process))
        .route("/delete", post().to(delete::process))
}
