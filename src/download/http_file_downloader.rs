use crate::download::client::{HttpClient, HttpResponse};
use crate::download::options::DownloadOptions;
use crate::error::{Result, TnccError};
use crate::paths::shared::ensure_parent_directory;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub struct HttpFileDownloader {
    pub(crate) http_client: Box<dyn HttpClient>,
}

impl HttpFileDownloader {
    pub fn with_client(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Download `url` to `destination`, replacing any existing file only once
    /// the whole body has been received.
    pub fn download(
        &self,
        url: &str,
        destination: &Path,
        options: &DownloadOptions,
    ) -> Result<PathBuf> {
        ensure_parent_directory(destination)?;

        let response = self.http_client.get(url)?;
        validate_response(response.as_ref(), options.max_size)?;

        // The temp file is removed on drop if anything below fails
        let dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let temp_file = NamedTempFile::new_in(dir)?;

        let written = copy_body(response, &temp_file, options.max_size)?;
        log::debug!("Received {written} bytes from {url}");

        temp_file
            .persist(destination)
            .map_err(|e| TnccError::Io(e.error))?;

        Ok(destination.to_path_buf())
    }
}

fn validate_response(response: &dyn HttpResponse, max_size: u64) -> Result<()> {
    let status = response.status();

    if !(200..300).contains(&status) {
        return Err(TnccError::Download(format!(
            "server responded with status {status}"
        )));
    }

    if let Some(length) = content_length(response) {
        if length > max_size {
            return Err(TnccError::Download(format!(
                "response of {length} bytes exceeds maximum allowed size {max_size}"
            )));
        }
    }

    Ok(())
}

fn content_length(response: &dyn HttpResponse) -> Option<u64> {
    response.header("Content-Length")?.trim().parse().ok()
}

fn copy_body(
    mut response: Box<dyn HttpResponse>,
    file: &NamedTempFile,
    max_size: u64,
) -> Result<u64> {
    let mut writer = BufWriter::new(file.as_file());
    let mut downloaded: u64 = 0;
    let mut buffer = vec![0; DOWNLOAD_CHUNK_SIZE];

    loop {
        match response.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                downloaded += n as u64;
                if downloaded > max_size {
                    return Err(TnccError::Download(format!(
                        "response exceeds maximum allowed size {max_size}"
                    )));
                }
                writer.write_all(&buffer[..n])?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    writer.flush()?;
    Ok(downloaded)
}

#[cfg(test)]
#[path = "http_file_downloader_tests.rs"]
mod http_file_downloader_tests;
