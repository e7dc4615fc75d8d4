use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fs;
use std::io;
use std::path::Path;

/// Reads a selected file into something the preview surface can display.
pub trait FileReadingService: Send + Sync {
    /// Decode the file into a `data:` URI suitable for an `img` element.
    fn read_as_data_uri(&self, path: &Path) -> Result<String, String>;
}

/// Disk-backed reader used by the running application.
pub struct LocalFileReader;

impl FileReadingService for LocalFileReader {
    fn read_as_data_uri(&self, path: &Path) -> Result<String, String> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                "File not found.".to_string()
            } else {
                format!("Could not read file: {}", e)
            }
        })?;
        Ok(data_uri(path, &bytes))
    }
}

/// `data:<mime>;base64,<payload>` for the given file contents.
pub fn data_uri(path: &Path, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", image_mime(path), BASE64.encode(bytes))
}

/// MIME type by file extension; octet-stream when unknown.
pub fn image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _ => "application/octet-stream",
    }
}
