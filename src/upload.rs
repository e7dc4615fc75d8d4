use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;

use crate::error::UploadError;
use crate::preview;
use crate::types::ExtractionResponse;

/// Remote OCR/structure-extraction service.
pub trait BillExtractionService: Send + Sync {
    /// Upload one bill image and return the parsed extraction response.
    fn extract(&self, image_path: &Path) -> Result<ExtractionResponse, UploadError>;
}

/// HTTP implementation posting the image as a multipart form to the
/// backend's `/upload` endpoint.
pub struct HttpExtractionService {
    endpoint: String,
}

impl HttpExtractionService {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::upload_endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BillExtractionService for HttpExtractionService {
    fn extract(&self, image_path: &Path) -> Result<ExtractionResponse, UploadError> {
        let bytes = fs::read(image_path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                UploadError::File("File not found.".to_string())
            } else {
                UploadError::File(format!("Could not read file: {}", e))
            }
        })?;

        let file_name = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("bill")
            .to_string();
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(preview::image_mime(image_path))
            .map_err(|e| UploadError::Transfer(e.to_string()))?;
        let form = Form::new().part("image", part);

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| UploadError::Transfer(e.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    UploadError::Transfer(format!(
                        "Check your internet connection and try again. ({})",
                        e
                    ))
                } else {
                    UploadError::Transfer(format!("Network error: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(UploadError::Backend(format!(
                "Extraction failed ({}): {}",
                status,
                if body.is_empty() {
                    "Is the backend running?"
                } else {
                    body.as_str()
                }
            )));
        }

        response
            .json::<ExtractionResponse>()
            .map_err(|e| UploadError::Parse(format!("Invalid JSON: {}", e)))
    }
}
