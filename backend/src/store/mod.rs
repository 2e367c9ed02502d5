//! # Product Store
//!
//! Owns the `products` table and every SQL statement that touches it. The rest of the
//! backend only reaches the data through [`ProductStore`], which is cloned into the
//! Actix application state and handed to the catalog services.
//!
//! Soft-deleted rows stay in the table; every read except [`ProductStore::get`] filters
//! them out with `deleted = 0`.
//!
//! Search matching uses the `fold_case` scalar function registered on the connection.
//! SQLite's own `lower()` and `LIKE` only fold ASCII, so the function delegates to
//! Rust's Unicode lowercase instead.

use crate::error::StoreError;
use common::model::product::{Product, DEFAULT_IMAGE_URL, DEFAULT_PRODUCT_NAME};
use log::debug;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    image_url TEXT NOT NULL,
    deleted INTEGER NOT NULL DEFAULT 0
)";

const MATCHES_TERM: &str = "deleted = 0 AND instr(fold_case(name), fold_case(?1)) > 0";

/// Shared handle to the SQLite database holding the catalog.
///
/// Cloning is cheap: all clones share one connection behind a mutex.
#[derive(Clone)]
pub struct ProductStore {
    conn: Arc<Mutex<Connection>>,
}

impl ProductStore {
    /// Opens (or creates) the database file at `path` and applies the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Opens a private in-memory database. Used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.create_scalar_function(
            "fold_case",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text = ctx.get::<String>(0)?;
                Ok(text.to_lowercase())
            },
        )?;
        conn.execute(SCHEMA, [])?;
        Ok(ProductStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Creates an active product. Blank or missing fields get the catalog defaults.
    pub fn insert(&self, name: Option<&str>, image_url: Option<&str>) -> Result<Product, StoreError> {
        let name = non_blank(name).unwrap_or(DEFAULT_PRODUCT_NAME);
        let image_url = non_blank(image_url).unwrap_or(DEFAULT_IMAGE_URL);

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO products (name, image_url, deleted) VALUES (?1, ?2, 0)",
            params![name, image_url],
        )?;
        let id = conn.last_insert_rowid();
        debug!("Inserted product {} ({})", id, name);

        Ok(Product {
            id,
            name: name.to_string(),
            image_url: image_url.to_string(),
            deleted: false,
        })
    }

    /// Marks an active product as deleted.
    ///
    /// Returns `false` when no active row has this id, which covers both unknown ids and
    /// products that were already deleted.
    pub fn soft_delete(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "UPDATE products SET deleted = 1 WHERE id = ?1 AND deleted = 0",
            params![id],
        )?;
        Ok(affected > 0)
    }

    /// Returns one page of active products whose name contains `search_term`, plus the
    /// number of active products matching the term across all pages.
    ///
    /// Results are ordered by ascending id. `page_number` is 1-based; a page past the end
    /// yields an empty list, not an error.
    pub fn query_page(
        &self,
        search_term: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<(Vec<Product>, u64), StoreError> {
        let offset = u64::from(page_number.saturating_sub(1)) * u64::from(page_size);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let conn = self.lock()?;

        let total: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM products WHERE {}", MATCHES_TERM),
            params![search_term],
            |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, image_url, deleted FROM products WHERE {} \
             ORDER BY id ASC LIMIT ?2 OFFSET ?3",
            MATCHES_TERM
        ))?;
        let items = stmt
            .query_map(params![search_term, page_size, offset], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, u64::try_from(total).unwrap_or(0)))
    }

    /// Number of products that have not been deleted.
    pub fn count_active(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM products WHERE deleted = 0",
            [],
            |row| row.get(0),
        )?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// Fetches a product by id, including soft-deleted ones.
    pub fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let conn = self.lock()?;
        let product = conn
            .query_row(
                "SELECT id, name, image_url, deleted FROM products WHERE id = ?1",
                params![id],
                product_from_row,
            )
            .optional()?;
        Ok(product)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        image_url: row.get(2)?,
        deleted: row.get(3)?,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
