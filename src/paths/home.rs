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

use crate::error::{Result, TnccError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration directory
pub const TNCC_HOME_ENV: &str = "TNCC_HOME";

/// Configuration directory name under the user's home. Very old host checker
/// builds look in `~/.juniper_networks` instead.
pub const TNCC_DIR_NAME: &str = ".pulse_secure";

pub const TNCC_JAR: &str = "tncc.jar";
pub const TNCC_PRELOAD: &str = "tncc_preload.so";
pub const CONFIG_FILE: &str = "config.toml";

/// System-wide IcedTea web plugin archive added to the classpath when present
pub const DEFAULT_PLUGIN_JAR: &str = "/usr/share/icedtea-web/plugin.jar";

pub fn user_home() -> Result<PathBuf> {
    dirs::home_dir().ok_or(TnccError::HomeNotFound)
}

/// Resolve the configuration directory: an absolute `TNCC_HOME` wins,
/// otherwise `~/.pulse_secure`.
pub fn resolve_tncc_home() -> Result<PathBuf> {
    if let Ok(tncc_home) = std::env::var(TNCC_HOME_ENV) {
        let path = PathBuf::from(tncc_home);
        if path.is_absolute() {
            return Ok(path);
        }
        log::warn!(
            "Ignoring {TNCC_HOME_ENV}={} because it is not an absolute path",
            path.display()
        );
    }

    user_home().map(|home| home.join(TNCC_DIR_NAME))
}

pub fn tncc_jar_path(tncc_home: &Path) -> PathBuf {
    tncc_home.join(TNCC_JAR)
}

pub fn preload_path(tncc_home: &Path) -> PathBuf {
    tncc_home.join(TNCC_PRELOAD)
}

pub fn config_path(tncc_home: &Path) -> PathBuf {
    tncc_home.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn file_helpers_join_expected_paths() {
        let home = Path::new("/tmp/pulse");
        assert_eq!(tncc_jar_path(home), PathBuf::from("/tmp/pulse/tncc.jar"));
        assert_eq!(
            preload_path(home),
            PathBuf::from("/tmp/pulse/tncc_preload.so")
        );
        assert_eq!(config_path(home), PathBuf::from("/tmp/pulse/config.toml"));
    }

    #[test]
    #[serial]
    fn resolve_tncc_home_prefers_absolute_env() {
        let temp = TempDir::new().unwrap();
        unsafe {
            env::set_var(TNCC_HOME_ENV, temp.path());
        }

        let resolved = resolve_tncc_home().unwrap();

        unsafe {
            env::remove_var(TNCC_HOME_ENV);
        }
        assert_eq!(resolved, temp.path());
    }

    #[test]
    #[serial]
    fn resolve_tncc_home_ignores_relative_env() {
        unsafe {
            env::set_var(TNCC_HOME_ENV, "relative/dir");
        }

        let resolved = resolve_tncc_home();

        unsafe {
            env::remove_var(TNCC_HOME_ENV);
        }
        if let Ok(path) = resolved {
            assert!(path.ends_with(TNCC_DIR_NAME));
        }
    }
}
