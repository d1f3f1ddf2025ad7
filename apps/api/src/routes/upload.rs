use std::collections::HashMap;

use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::ImagePart;
use crate::story::photo::sniff_mime_type;

const IMAGE_FIELD: &str = "image";
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// A parsed multipart upload: the required image plus any text fields.
#[derive(Debug)]
pub struct UploadForm {
    pub image: ImagePart,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Value of a text field, or `""` when the client did not send it.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Reads the whole multipart body. The `image` field is mandatory and must be non-empty.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut image: Option<ImagePart> = None;
    let mut fields = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let declared = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read the uploaded file: {e}")))?;

            if file_name.is_empty() || data.is_empty() {
                return Err(AppError::Validation("No file was selected.".to_string()));
            }

            let mime_type = resolve_mime_type(declared.as_deref(), &data);
            debug!("Received image '{}' ({}, {} bytes)", file_name, mime_type, data.len());
            image = Some(ImagePart { mime_type, data });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::Validation(format!("Field '{name}' is not valid text: {e}")))?;
            fields.insert(name, value);
        }
    }

    let image = image.ok_or_else(|| AppError::Validation("No image file was uploaded.".to_string()))?;
    Ok(UploadForm { image, fields })
}

/// Trusts an `image/*` content type, otherwise sniffs the bytes.
fn resolve_mime_type(declared: Option<&str>, data: &[u8]) -> String {
    match declared {
        Some(mime) if mime.starts_with("image/") => mime.to_string(),
        _ => sniff_mime_type(data)
            .or(declared)
            .unwrap_or(FALLBACK_MIME_TYPE)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_declared_image_type_is_trusted() {
        assert_eq!(resolve_mime_type(Some("image/webp"), b"xx"), "image/webp");
    }

    #[test]
    fn test_generic_type_is_sniffed() {
        assert_eq!(
            resolve_mime_type(Some("application/octet-stream"), PNG_MAGIC),
            "image/png"
        );
        assert_eq!(resolve_mime_type(None, PNG_MAGIC), "image/png");
    }

    #[test]
    fn test_unknown_bytes_fall_back() {
        assert_eq!(resolve_mime_type(Some("text/plain"), b"hello"), "text/plain");
        assert_eq!(resolve_mime_type(None, b"hello"), FALLBACK_MIME_TYPE);
    }
}
