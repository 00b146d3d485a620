//! Fetching `tncc.jar` from the VPN gateway.
//!
//! A single unauthenticated GET with no retry. The body is streamed into a
//! temporary file beside the destination and renamed into place once complete.
mod client;
mod http_file_downloader;
mod options;

pub use client::{AttohttpcClient, HttpClient, HttpResponse};
pub use http_file_downloader::HttpFileDownloader;
pub use options::{DEFAULT_TIMEOUT, DownloadOptions, MAX_DOWNLOAD_SIZE};

use crate::config::DownloadConfig;
use std::time::Duration;

/// Build the production downloader from the `[download]` configuration section
pub fn downloader_from_config(config: &DownloadConfig) -> HttpFileDownloader {
    let client = AttohttpcClient::new(config.accept_invalid_certs)
        .with_timeout(Duration::from_secs(config.timeout_secs));
    HttpFileDownloader::with_client(Box::new(client))
}

/// Download options matching the `[download]` configuration section
pub fn options_from_config(config: &DownloadConfig) -> DownloadOptions {
    DownloadOptions {
        max_size: config.max_size,
    }
}
