// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::TnccError;

/// Suggestion and details shown beneath an error message
pub struct ErrorContext {
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(error: &TnccError) -> Self {
        let (suggestion, details) = match error {
            TnccError::InvalidHost { .. } => {
                let suggestion = Some(
                    "Pass the bare VPN gateway host name, e.g. 'vpn.example.com' or \
                     'vpn.example.com:8443'."
                        .to_string(),
                );
                (suggestion, None)
            }
            TnccError::Download(msg) => {
                let suggestion = Some(
                    "Check that the VPN host is reachable and serves /dana-cached/hc/tncc.jar."
                        .to_string(),
                );
                let details = Some(format!("Download failed: {msg}"));
                (suggestion, details)
            }
            TnccError::InvalidArchive { reason, .. } => {
                let suggestion = Some(
                    "Delete the cached tncc.jar and run again to fetch a fresh copy.".to_string(),
                );
                let details = Some(format!("Archive check failed: {reason}"));
                (suggestion, details)
            }
            TnccError::ClassNotFound { candidates, .. } => {
                let suggestion = Some(
                    "The gateway may ship an unsupported host checker version. Delete the \
                     cached tncc.jar to download it again."
                        .to_string(),
                );
                let details = Some(format!(
                    "Looked for:\n{}",
                    candidates
                        .iter()
                        .map(|c| format!("  - {c}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                ));
                (suggestion, details)
            }
            TnccError::JavaNotFound { searched } => {
                let suggestion = Some(
                    "Install a Java runtime, set JAVA_HOME, or set 'java' in config.toml."
                        .to_string(),
                );
                let details = if searched.is_empty() {
                    None
                } else {
                    Some(format!(
                        "Searched in:\n{}",
                        searched
                            .iter()
                            .map(|p| format!("  - {p}"))
                            .collect::<Vec<_>>()
                            .join("\n")
                    ))
                };
                (suggestion, details)
            }
            TnccError::HomeNotFound => {
                let suggestion =
                    Some("Set TNCC_HOME to the directory holding tncc.jar.".to_string());
                (suggestion, None)
            }
            TnccError::ConfigError(msg) => {
                let suggestion = Some("Fix or remove config.toml and try again.".to_string());
                let details = Some(msg.clone());
                (suggestion, details)
            }
            TnccError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.to_lowercase().contains("timeout") {
                    Some("Increase [download] timeout_secs in config.toml.".to_string())
                } else if error_string.contains("404") {
                    Some("The gateway does not serve tncc.jar at the expected path.".to_string())
                } else {
                    Some("Check your network connection and try again.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            TnccError::Zip(zip_err) => {
                let suggestion = Some(
                    "Delete the cached tncc.jar and run again to fetch a fresh copy.".to_string(),
                );
                let details = Some(format!("Zip error: {zip_err}"));
                (suggestion, details)
            }
            TnccError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check permissions of the configuration directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            suggestion,
            details,
        }
    }
}
