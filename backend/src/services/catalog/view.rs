//! HTML rendering of the catalog page.
//!
//! Markup contract relied on by clients and tests:
//! - each product is a `.product-card` holding an `<h3>` with the name and a `<p>` with
//!   `ID: <id>`;
//! - `.pagination` holds one link per page, the last one being the last page;
//! - an empty page renders a single `<p>No products found.</p>` and no earlier `<p>`;
//! - a notice is delivered as a browser `alert(...)`.

use actix_web::HttpResponse;
use common::model::catalog::CatalogPage;
use common::model::product::Product;
use std::fmt::Write;

pub const NO_RESULTS: &str = "No products found.";

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Renders a full listing page, optionally followed by an alert carrying `notice`.
pub fn render_catalog(page: &CatalogPage, notice: Option<&str>) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Product Catalog</title>\n</head>\n<body>\n<h1>Product Catalog</h1>\n",
    );

    let _ = write!(
        out,
        "<form class=\"search\" method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"query\" value=\"{}\" placeholder=\"Search products\">\
         <button type=\"submit\">Search</button></form>\n",
        escape_html(&page.query)
    );
    out.push_str(
        "<form class=\"add-product\" method=\"post\" action=\"/add\">\
         <input type=\"text\" name=\"name\" placeholder=\"Product name\">\
         <input type=\"text\" name=\"image_url\" placeholder=\"Image URL\">\
         <button type=\"submit\">Add Product</button></form>\n",
    );

    out.push_str("<section class=\"products\">\n");
    if page.has_results {
        for product in &page.items {
            render_card(&mut out, product);
        }
    } else {
        let _ = writeln!(out, "<p>{}</p>", NO_RESULTS);
    }
    out.push_str("</section>\n");

    render_pagination(&mut out, page);

    if let Some(notice) = notice {
        let _ = writeln!(out, "<script>alert(\"{}\")</script>", escape_js(notice));
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_card(out: &mut String, product: &Product) {
    let name = escape_html(&product.name);
    let _ = writeln!(
        out,
        "<div class=\"product-card\">\
         <img src=\"{image}\" alt=\"{name}\">\
         <h3>{name}</h3>\
         <p>ID: {id}</p>\
         <form method=\"post\" action=\"/delete\">\
         <input type=\"hidden\" name=\"productID\" value=\"{id}\">\
         <button type=\"submit\">Delete</button></form></div>",
        image = escape_html(&product.image_url),
        name = name,
        id = product.id,
    );
}

fn render_pagination(out: &mut String, page: &CatalogPage) {
    if page.total_pages == 0 {
        return;
    }
    let query = encode_query_value(&page.query);
    out.push_str("<nav class=\"pagination\">");
    for n in 1..=page.total_pages {
        let class = if n == page.current_page { " class=\"active\"" } else { "" };
        let _ = write!(out, "<a{} href=\"/?query={}&amp;page={}\">{}</a>", class, query, n, n);
    }
    out.push_str("</nav>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn escape_js(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '<' => escaped.push_str("\\u003c"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Percent-encodes everything except RFC 3986 unreserved characters.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}
