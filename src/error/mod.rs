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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_with_color;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TnccError {
    #[error("Invalid VPN host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("Failed to download tncc.jar: {0}")]
    Download(String),

    #[error("Invalid archive {path}: {reason}")]
    InvalidArchive { path: String, reason: String },

    #[error("Could not find host checker class name in {archive}")]
    ClassNotFound {
        archive: String,
        candidates: Vec<String>,
    },

    #[error("Java executable not found")]
    JavaNotFound { searched: Vec<String> },

    #[error("Failed to start host checker: {0}")]
    SpawnFailed(String),

    #[error("Unable to determine home directory")]
    HomeNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Security error: {0}")]
    SecurityError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, TnccError>;
