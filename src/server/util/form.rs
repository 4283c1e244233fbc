//! Request body parsing for endpoints that accept either JSON or multipart forms.

use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::server::{error::AppError, model::file::NewTicketFile};

/// Multipart form split into its text fields and uploaded `files` parts.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: Vec<NewTicketFile>,
}

impl FormData {
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    /// Checkbox-style flag: `true`, `on` or `1` count as set.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.fields.get(name).map(String::as_str),
            Some("true" | "on" | "1")
        )
    }
}

/// Body of a request that may arrive as JSON or as `multipart/form-data`.
pub enum JsonOrForm<T> {
    Json(T),
    Form(FormData),
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(Self::Form(read_form(multipart).await?));
        }

        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;

        Ok(Self::Json(payload))
    }
}

/// Reads every part of a multipart body. Parts named `files` become uploads.
async fn read_form(mut multipart: Multipart) -> Result<FormData, AppError> {
    let mut form = FormData::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "files" {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field.bytes().await.map_err(multipart_error)?;

            if filename.is_empty() && data.is_empty() {
                continue;
            }

            form.files.push(NewTicketFile {
                filename,
                content_type,
                data: data.to_vec(),
            });
        } else {
            let value = field.text().await.map_err(multipart_error)?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(err.body_text())
    }
}
