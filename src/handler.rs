use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use crate::error::UploadError;
use crate::page::BillPage;
use crate::preview::FileReadingService;
use crate::render;
use crate::upload::BillExtractionService;

/// The flow behind the page's upload button: validate the selection, kick
/// off the local preview, post the image to the extraction service and swap
/// the rendered result into the page.
///
/// The preview decode and the upload are independent; neither waits for the
/// other, and the details render only after the response is fully parsed.
/// Failures are alerted on the page and never propagate to the caller, so a
/// previously rendered result stays up when a later attempt fails.
pub fn upload_bill(
    page: Arc<dyn BillPage>,
    reader: Arc<dyn FileReadingService>,
    service: &dyn BillExtractionService,
) {
    let file = match page.selected_file() {
        Some(f) => f,
        None => {
            page.alert(&UploadError::NoFileSelected.to_string());
            return;
        }
    };

    spawn_preview(page.clone(), reader, file.clone());

    match service.extract(&file) {
        Ok(response) => page.set_details(render::render_bill_details(&response)),
        Err(e) => {
            tracing::error!(target: "frontend", error = %e, "bill upload failed");
            page.alert(&e.to_string());
        }
    }
}

/// Decode the preview off-thread; the upload does not wait for it. A file
/// that cannot be decoded leaves the preview untouched.
fn spawn_preview(page: Arc<dyn BillPage>, reader: Arc<dyn FileReadingService>, file: PathBuf) {
    thread::spawn(move || match reader.read_as_data_uri(&file) {
        Ok(uri) => page.set_preview(uri),
        Err(e) => tracing::debug!(error = %e, "preview decode failed"),
    });
}
