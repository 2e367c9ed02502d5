//! Form body extraction shared by the mutation handlers.
//!
//! HTML forms post `application/x-www-form-urlencoded`, while `FormData` clients post
//! `multipart/form-data`. Handlers take a [`FormBody`] and let Actix pick whichever
//! extractor matches the request; multipart bodies are flattened into their text fields.

use crate::error::CatalogError;
use actix_multipart::Multipart;
use actix_web::{web, Either};
use common::requests::{AddProductRequest, DeleteProductRequest};
use futures_util::StreamExt;
use std::collections::HashMap;

pub type FormBody<T> = Either<web::Form<T>, Multipart>;

pub async fn add_request(body: FormBody<AddProductRequest>) -> Result<AddProductRequest, CatalogError> {
    match body {
        Either::Left(form) => Ok(form.into_inner()),
        Either::Right(multipart) => {
            let mut fields = read_text_fields(multipart).await?;
            Ok(AddProductRequest {
                name: fields.remove("name"),
                image_url: fields.remove("image_url"),
            })
        }
    }
}

pub async fn delete_request(
    body: FormBody<DeleteProductRequest>,
) -> Result<DeleteProductRequest, CatalogError> {
    match body {
        Either::Left(form) => Ok(form.into_inner()),
        Either::Right(multipart) => {
            let mut fields = read_text_fields(multipart).await?;
            Ok(DeleteProductRequest {
                product_id: fields.remove("productID"),
            })
        }
    }
}

/// Reads every named part of a multipart body as text. Later parts with the same
/// name replace earlier ones.
async fn read_text_fields(mut payload: Multipart) -> Result<HashMap<String, String>, CatalogError> {
    let mut fields = HashMap::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        if let Some(name) = name {
            fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    Ok(fields)
}
