use thiserror::Error;

/// Everything that can go wrong between picking a file and rendering the
/// response. The message of each variant is what the user sees in the alert.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Please select an image first.")]
    NoFileSelected,
    /// The selected file could not be read for upload.
    #[error("{0}")]
    File(String),
    /// The request never produced a usable response.
    #[error("{0}")]
    Transfer(String),
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Backend(String),
    /// The response body was not valid extraction JSON.
    #[error("{0}")]
    Parse(String),
}
