/// Default extraction endpoint, the backend's local development address.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/upload";

fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Upload endpoint: `BILL_OCR_ENDPOINT` from the environment (or `.env`),
/// falling back to the local default.
pub fn upload_endpoint() -> String {
    load_env();
    match std::env::var("BILL_OCR_ENDPOINT") {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

/// "configured" when a custom endpoint is set, "default" otherwise.
pub fn backend_status() -> &'static str {
    load_env();
    match std::env::var("BILL_OCR_ENDPOINT") {
        Ok(v) if !v.trim().is_empty() => "configured",
        _ => "default",
    }
}
