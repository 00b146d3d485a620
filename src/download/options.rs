use std::time::Duration;

/// Default timeout for download operations
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Maximum allowed download size (64MB); tncc.jar is a few MB at most
pub const MAX_DOWNLOAD_SIZE: u64 = 64 * 1024 * 1024;

/// Options for configuring download behavior
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Maximum allowed file size
    pub max_size: u64,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            max_size: MAX_DOWNLOAD_SIZE,
        }
    }
}
