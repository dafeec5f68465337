//! Multipart menu form
//!
//! Blank text fields and an empty file part are treated as not supplied.

use axum::extract::{
    Multipart,
    multipart::{MultipartError, MultipartRejection},
};
use http::StatusCode;
use shared::{AppError, ErrorCode};

/// Name of the file field
pub const IMAGE_FIELD: &str = "imageFile";

/// Uploaded file part
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub data: Vec<u8>,
}

/// Parsed menu form; `None` means not supplied
#[derive(Debug, Default)]
pub struct MenuForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub image: Option<UploadedFile>,
}

impl MenuForm {
    /// Read every part of the body
    pub async fn read(multipart: Result<Multipart, MultipartRejection>) -> Result<Self, AppError> {
        let mut multipart = multipart
            .map_err(|e| AppError::with_message(ErrorCode::InvalidFormat, e.body_text()))?;

        let mut form = MenuForm::default();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                IMAGE_FIELD => {
                    let filename = field.file_name().map(|s| s.to_string());
                    let data = field.bytes().await.map_err(multipart_error)?;
                    form.image = (!data.is_empty()).then(|| UploadedFile {
                        filename,
                        data: data.to_vec(),
                    });
                }
                "name" | "price" | "category" => {
                    let text = field.text().await.map_err(multipart_error)?;
                    let value = non_blank(text);
                    match name.as_str() {
                        "name" => form.name = value,
                        "price" => form.price = value,
                        _ => form.category = value,
                    }
                }
                other => {
                    tracing::debug!(field = %other, "Ignoring unknown multipart field");
                }
            }
        }
        Ok(form)
    }
}

/// Whitespace-only counts as absent; anything else is kept verbatim
fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

/// Body over the transport limit is reported as an oversized upload
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::with_message(ErrorCode::FileTooLarge, err.body_text())
    } else {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid multipart request: {}", err.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_not_supplied() {
        assert_eq!(non_blank("   ".into()), None);
        assert_eq!(non_blank("".into()), None);
        assert_eq!(non_blank(" veg ".into()), Some(" veg ".to_string()));
    }
}
