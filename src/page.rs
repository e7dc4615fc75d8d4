use std::path::PathBuf;

use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Event the page script listens on to fill the preview image.
pub const PREVIEW_EVENT: &str = "bill-preview";
/// Event the page script listens on to swap the rendered details in.
pub const DETAILS_EVENT: &str = "bill-details";

/// The page surfaces the upload flow writes to: the selected-file control,
/// the preview image, the details container and the alert channel. Handles
/// are passed in explicitly so the flow is not tied to one page structure.
pub trait BillPage: Send + Sync {
    /// Currently selected file, if any.
    fn selected_file(&self) -> Option<PathBuf>;
    /// Show the decoded preview in the page's image element.
    fn set_preview(&self, data_uri: String);
    /// Swap the rendered bill details into the page's container.
    fn set_details(&self, html: String);
    /// Blocking modal alert.
    fn alert(&self, message: &str);
}

/// Page backed by the running webview window.
pub struct WebviewPage {
    app: AppHandle,
    selection: Option<PathBuf>,
}

impl WebviewPage {
    pub fn new(app: AppHandle, selection: Option<PathBuf>) -> Self {
        Self { app, selection }
    }
}

impl BillPage for WebviewPage {
    fn selected_file(&self) -> Option<PathBuf> {
        self.selection.clone()
    }

    fn set_preview(&self, data_uri: String) {
        if let Err(e) = self.app.emit(PREVIEW_EVENT, data_uri) {
            tracing::warn!(error = %e, "failed to emit preview event");
        }
    }

    fn set_details(&self, html: String) {
        if let Err(e) = self.app.emit(DETAILS_EVENT, html) {
            tracing::warn!(error = %e, "failed to emit details event");
        }
    }

    fn alert(&self, message: &str) {
        self.app
            .dialog()
            .message(message)
            .kind(MessageDialogKind::Error)
            .title("Bill Scanner")
            .blocking_show();
    }
}
