use std::path::PathBuf;
use std::sync::Arc;

use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::DialogExt;

use crate::config;
use crate::handler;
use crate::page::{BillPage, WebviewPage};
use crate::preview::{FileReadingService, LocalFileReader};
use crate::upload::HttpExtractionService;

#[tauri::command]
pub fn get_app_version(app: AppHandle) -> String {
    app.package_info().version.to_string()
}

#[tauri::command]
pub fn get_backend_status() -> String {
    config::backend_status().to_string()
}

/// Native file picker for the page's "Choose image" button.
#[tauri::command]
pub fn pick_bill_image(app: AppHandle) -> Option<String> {
    app.dialog()
        .file()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp"])
        .blocking_pick_file()
        .and_then(|f| f.into_path().ok())
        .map(|p| p.to_string_lossy().into_owned())
}

/// The page's upload button. The whole flow runs off the webview thread;
/// failures are alerted and logged there rather than returned.
#[tauri::command]
pub async fn upload_bill(app: AppHandle, file_path: Option<String>) -> Result<(), String> {
    tauri::async_runtime::spawn_blocking(move || {
        let page: Arc<dyn BillPage> =
            Arc::new(WebviewPage::new(app, file_path.map(PathBuf::from)));
        let reader: Arc<dyn FileReadingService> = Arc::new(LocalFileReader);
        let service = HttpExtractionService::from_env();
        handler::upload_bill(page, reader, &service);
    })
    .await
    .map_err(|e| e.to_string())
}
