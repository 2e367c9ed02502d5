//! # Product Deletion Service
//!
//! Backs `POST /delete`. Deletion is a soft delete: the row keeps its data and only its
//! `deleted` flag flips, after which it disappears from every listing.
//!
//! A request that matches no active product is an ordinary outcome, not a failure. The
//! response is still `200 OK`; the page simply carries an alert telling the user the
//! product was not found. The same applies to ids that do not parse as integers.

use crate::error::CatalogError;
use crate::services::catalog::form::{self, FormBody};
use crate::services::catalog::{list, view};
use crate::store::ProductStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::CatalogPage;
use common::model::product::DeleteOutcome;
use common::requests::DeleteProductRequest;
use log::{error, info, warn};

pub const NOT_FOUND_NOTICE: &str = "Product not found or already deleted!";

/// Actix web handler for `POST /delete`.
///
/// # Returns
/// - `200 OK` with the refreshed first listing page, plus the not-found alert when
///   nothing was deleted.
/// - `400 Bad Request` if the multipart body cannot be read.
/// - `503 Service Unavailable` if the store fails.
pub async fn process(store: web::Data<ProductStore>, body: FormBody<DeleteProductRequest>) -> impl Responder {
    let request = match form::delete_request(body).await {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().body(format!("Error: {}", e)),
    };

    let store = store.get_ref().clone();
    let result = tokio::task::spawn_blocking(move || delete_and_list(&store, &request)).await;
    match result.map_err(CatalogError::from).and_then(|r| r) {
        Ok((DeleteOutcome::Deleted, page)) => view::html(view::render_catalog(&page, None)),
        Ok((DeleteOutcome::NotFound, page)) => {
            view::html(view::render_catalog(&page, Some(NOT_FOUND_NOTICE)))
        }
        Err(e) => {
            error!("Deleting product failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error deleting product: {}", e))
        }
    }
}

/// Soft-deletes the product named by `product_id`, if it is active.
pub fn delete_product(store: &ProductStore, product_id: Option<&str>) -> Result<DeleteOutcome, CatalogError> {
    let Some(id) = product_id.and_then(|raw| raw.trim().parse::<i64>().ok()) else {
        warn!("Delete requested with unusable product id {:?}", product_id);
        return Ok(DeleteOutcome::NotFound);
    };

    if store.soft_delete(id)? {
        info!("Deleted product {}", id);
        Ok(DeleteOutcome::Deleted)
    } else {
        match store.get(id)? {
            Some(_) => warn!("Product {} was already deleted", id),
            None => warn!("Delete requested for unknown product {}", id),
        }
        Ok(DeleteOutcome::NotFound)
    }
}

fn delete_and_list(
    store: &ProductStore,
    request: &DeleteProductRequest,
) -> Result<(DeleteOutcome, CatalogPage), CatalogError> {
    let outcome = delete_product(store, request.product_id.as_deref())?;
    Ok((outcome, list::first_page(store)?))
}
