//! # Catalog Listing Service
//!
//! Backs `GET /?query=<text>&page=<n>`. Turns the raw query string into a page request
//! against the [`ProductStore`] and assembles the [`CatalogPage`] view model that the
//! renderer in `view` turns into HTML.
//!
//! Pages are fixed at [`PAGE_SIZE`] items. A page number past the last page is answered
//! with an empty page so the renderer can show "No products found." instead of failing.

use crate::error::CatalogError;
use crate::services::catalog::view;
use crate::store::ProductStore;
use actix_web::{web, HttpResponse, Responder};
use common::model::catalog::CatalogPage;
use common::requests::ListingQuery;
use log::{debug, error};

pub const PAGE_SIZE: u32 = 10;

/// Actix web handler for `GET /`.
///
/// # Returns
/// - `200 OK` with the rendered listing.
/// - `503 Service Unavailable` if the store cannot be queried.
pub async fn process(
    store: web::Data<ProductStore>,
    params: web::Query<ListingQuery>,
) -> impl Responder {
    let params = params.into_inner();
    let store = store.get_ref().clone();

    let result = tokio::task::spawn_blocking(move || list_products(&store, &params)).await;
    match result.map_err(CatalogError::from).and_then(|r| r) {
        Ok(page) => view::html(view::render_catalog(&page, None)),
        Err(e) => {
            error!("Listing failed: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error retrieving products: {}", e))
        }
    }
}

/// Builds the listing page described by `params`.
pub fn list_products(store: &ProductStore, params: &ListingQuery) -> Result<CatalogPage, CatalogError> {
    let query = params.search_term();
    let current_page = params.page_number();

    let (items, total_matching) = store.query_page(query, current_page, PAGE_SIZE)?;
    let total_pages = total_pages(total_matching);
    debug!(
        "Listing query={:?} page={}/{} items={}",
        query,
        current_page,
        total_pages,
        items.len()
    );

    Ok(CatalogPage {
        has_results: !items.is_empty(),
        items,
        current_page,
        total_pages,
        total_matching,
        query: query.to_string(),
    })
}

/// Page with no search term, as shown after a mutation.
pub fn first_page(store: &ProductStore) -> Result<CatalogPage, CatalogError> {
    list_products(store, &ListingQuery::default())
}

fn total_pages(total_matching: u64) -> u32 {
    let pages = total_matching.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> ProductStore {
        let store = ProductStore::open_in_memory().unwrap();
        for i in 1..=count {
            store
                .insert(Some(&format!("Product {}", i)), None)
                .unwrap();
        }
        store
    }

    fn request(query: Option<&str>, page: Option<&str>) -> ListingQuery {
        ListingQuery {
            query: query.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(95), 10);
    }

    #[test]
    fn first_page_is_full() {
        let store = seeded(95);
        let page = list_products(&store, &request(None, None)).unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.total_matching, 95);
        assert!(page.has_results);
    }

    #[test]
    fn ninety_five_products_paginate_into_ten_pages() {
        let store = seeded(95);

        let ninth = list_products(&store, &request(None, Some("9"))).unwrap();
        assert_eq!(ninth.items.len(), 10);

        let tenth = list_products(&store, &request(None, Some("10"))).unwrap();
        assert_eq!(tenth.items.len(), 5);
        assert_eq!(tenth.current_page, tenth.total_pages);

        for beyond in ["11", "696", "5000000000"] {
            let page = list_products(&store, &request(None, Some(beyond))).unwrap();
            assert!(page.items.is_empty());
            assert!(!page.has_results);
            assert_eq!(page.total_pages, 10);
        }
    }

    #[test]
    fn invalid_page_falls_back_to_first() {
        let store = seeded(15);
        for raw in ["0", "-1", "two"] {
            let page = list_products(&store, &request(None, Some(raw))).unwrap();
            assert_eq!(page.current_page, 1);
            assert_eq!(page.items.first().map(|p| p.name.as_str()), Some("Product 1"));
        }
    }

    #[test]
    fn empty_catalog_reports_no_results() {
        let store = ProductStore::open_in_memory().unwrap();
        let page = list_products(&store, &request(None, None)).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_results);
    }

    #[test]
    fn search_filters_case_insensitively() {
        let store = seeded(12);
        store.insert(Some("Test Example Product"), None).unwrap();

        for term in ["test", "Test", "Example"] {
            let page = list_products(&store, &request(Some(term), None)).unwrap();
            assert_eq!(page.total_matching, 1);
            assert_eq!(page.query, term);
            assert!(page
                .items
                .iter()
                .all(|p| p.name.to_lowercase().contains(&term.to_lowercase())));
        }

        let none = list_products(&store, &request(Some("NonExistentProduct"), None)).unwrap();
        assert!(!none.has_results);
        assert_eq!(none.total_pages, 0);
    }
}
