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

//! Locating the Java interpreter that runs the host checker.

use crate::error::{Result, TnccError};
use crate::platform::with_executable_extension;
use std::path::{Path, PathBuf};

/// Resolve the Java interpreter.
///
/// Order: the explicitly configured path, `$JAVA_HOME/bin/java`, then `java`
/// on `PATH`.
pub fn find_java(configured: Option<&Path>) -> Result<PathBuf> {
    find_java_with(
        configured,
        std::env::var_os("JAVA_HOME").map(PathBuf::from).as_deref(),
        |name| which::which(name).ok(),
    )
}

fn find_java_with<F>(
    configured: Option<&Path>,
    java_home: Option<&Path>,
    search_path: F,
) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let java_name = with_executable_extension("java");
    let mut searched = Vec::new();

    if let Some(path) = configured {
        if path.is_file() {
            log::debug!("Using configured Java at {}", path.display());
            return Ok(path.to_path_buf());
        }
        // A bare name such as "java8" is looked up on PATH
        if path.components().count() == 1 {
            if let Some(found) = search_path(&path.to_string_lossy()) {
                return Ok(found);
            }
        }
        searched.push(path.display().to_string());
        return Err(TnccError::JavaNotFound { searched });
    }

    if let Some(home) = java_home {
        let candidate = home.join("bin").join(&java_name);
        if candidate.is_file() {
            log::debug!("Using Java from JAVA_HOME at {}", candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate.display().to_string());
    }

    if let Some(found) = search_path(&java_name) {
        log::debug!("Using Java from PATH at {}", found.display());
        return Ok(found);
    }
    searched.push(format!("{java_name} on PATH"));

    Err(TnccError::JavaNotFound { searched })
}
