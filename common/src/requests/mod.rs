use serde::Deserialize;

/// Query string of `GET /`.
///
/// `page` is kept as raw text: anything that is not a positive integer falls back
/// to the first page instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListingQuery {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl ListingQuery {
    pub fn search_term(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Numbers too large for `u32` saturate, so they still land past the last page.
    pub fn page_number(&self) -> u32 {
        self.page
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            .map(|p| p.parse::<u64>().unwrap_or(u64::MAX))
            .filter(|p| *p > 0)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1)
    }
}

/// Form fields of `POST /add`. Both fields are optional; the store fills in defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AddProductRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Form fields of `POST /delete`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeleteProductRequest {
    #[serde(rename = "productID")]
    pub product_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(page: Option<&str>) -> ListingQuery {
        ListingQuery {
            query: None,
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn page_number_defaults_to_first_page() {
        assert_eq!(listing(None).page_number(), 1);
        assert_eq!(listing(Some("0")).page_number(), 1);
        assert_eq!(listing(Some("-3")).page_number(), 1);
        assert_eq!(listing(Some("abc")).page_number(), 1);
        assert_eq!(listing(Some("")).page_number(), 1);
    }

    #[test]
    fn page_number_accepts_positive_integers() {
        assert_eq!(listing(Some("9")).page_number(), 9);
        assert_eq!(listing(Some(" 696 ")).page_number(), 696);
    }

    #[test]
    fn oversized_page_numbers_saturate() {
        assert_eq!(listing(Some("5000000000")).page_number(), u32::MAX);
        assert_eq!(
            listing(Some("99999999999999999999999999")).page_number(),
            u32::MAX
        );
        assert_eq!(listing(Some("000")).page_number(), 1);
    }

    #[test]
    fn search_term_defaults_to_empty() {
        assert_eq!(listing(None).search_term(), "");
        let q = ListingQuery {
            query: Some("Test".into()),
            page: None,
        };
        assert_eq!(q.search_term(), "Test");
    }
}
