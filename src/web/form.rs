use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};

use crate::error::ForwardError;
use crate::form::FormFields;

/// Extracts form fields from a POST request body.
#[async_trait]
pub trait FormDecoder: Send + Sync {
    async fn decode(&self, request: Request) -> Result<FormFields, ForwardError>;
}

/// Handles `application/x-www-form-urlencoded` and `multipart/form-data`.
///
/// Bodies of any other content type decode to no fields at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFormDecoder;

#[async_trait]
impl FormDecoder for StandardFormDecoder {
    async fn decode(&self, request: Request) -> Result<FormFields, ForwardError> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(request, &())
                .await
                .map_err(|e| ForwardError::MalformedForm(e.to_string()))?;
            return decode_multipart(multipart).await;
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let body = Bytes::from_request(request, &())
                .await
                .map_err(|e| ForwardError::MalformedForm(e.to_string()))?;
            return Ok(FormFields::from_urlencoded(&body));
        }

        Ok(FormFields::default())
    }
}

/// Text parts become fields; file uploads are skipped.
async fn decode_multipart(mut multipart: Multipart) -> Result<FormFields, ForwardError> {
    let mut fields = FormFields::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ForwardError::MalformedForm(e.to_string()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ForwardError::MalformedForm(e.to_string()))?;
        fields.insert(name, value);
    }
    Ok(fields)
}
