mod commands;
mod config;
mod error;
mod handler;
mod page;
mod preview;
mod render;
mod types;
mod upload;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir().map_err(|e| e.to_string())?;
            // Load .env from the app data dir so packaged builds can point at
            // a non-default backend.
            let env_path = app_data_dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_version,
            commands::get_backend_status,
            commands::pick_bill_image,
            commands::upload_bill,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
