//! # Product Creation Service
//!
//! Backs `POST /add`. Both `name` and `image_url` may be missing or blank; the store
//! substitutes its defaults, so a well-formed request never fails validation. Each call
//! creates a new record, even when an identical product already exists.

use crate::error::CatalogError;
use crate::services::catalog::form::{self, FormBody};
use crate::services::catalog::{list, view};
use crate::store::ProductStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::CatalogPage;
use common::model::product::Product;
use common::requests::AddProductRequest;
use log::{error, info};

/// Actix web handler for `POST /add`.
///
/// # Returns
/// - `200 OK` with the refreshed first listing page.
/// - `400 Bad Request` if the multipart body cannot be read.
/// - `503 Service Unavailable` if the store fails.
pub async fn process(store: web::Data<ProductStore>, body: FormBody<AddProductRequest>) -> impl Responder {
    let request = match form::add_request(body).await {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().body(format!("Error: {}", e)),
    };

    let store = store.get_ref().clone();
    let result = tokio::task::spawn_blocking(move || add_and_list(&store, &request)).await;
    match result.map_err(CatalogError::from).and_then(|r| r) {
        Ok(page) => view::html(view::render_catalog(&page, None)),
        Err(e) => {
            error!("Adding product failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error adding product: {}", e))
        }
    }
}

/// Creates a product from the submitted form fields and returns the stored record.
pub fn add_product(store: &ProductStore, request: &AddProductRequest) -> Result<Product, CatalogError> {
    let product = store.insert(request.name.as_deref(), request.image_url.as_deref())?;
    info!("Added product {} ({})", product.id, product.name);
    Ok(product)
}

fn add_and_list(store: &ProductStore, request: &AddProductRequest) -> Result<CatalogPage, CatalogError> {
    add_product(store, request)?;
    list::first_page(store)
}
