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

//! Preparing and starting the TNCC host checker.
//!
//! The launcher moves through three states, each a distinct type:
//!
//! - [`HostChecker`]: host validated, nothing on disk touched yet.
//! - [`PreparedHostChecker`]: `tncc.jar` is present and valid, the entry
//!   class is resolved and optional companions have been checked.
//! - [`RunningHostChecker`]: the Java process has been started. It is not
//!   supervised; this tool exits right after.
//!
//! Transitions consume the previous state, so there is no way back.

mod launch_spec;

pub use launch_spec::LaunchSpec;

use crate::archive;
use crate::config::TnccConfig;
use crate::download::{self, DownloadOptions, HttpFileDownloader};
use crate::error::{Result, TnccError};
use crate::paths::home::{TNCC_JAR, preload_path, tncc_jar_path, user_home};
use crate::platform::java::find_java;
use crate::platform::process::{DetachedSpawner, ProcessSpawner};
use crate::security;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Entry class of current host checker builds
pub const LINUX_HTTP_NAR_CLASS: &str = "net.juniper.tnc.NARPlatform.linux.LinuxHttpNAR";
/// Entry class of older host checker builds
pub const HTTP_NAR_CLASS: &str = "net.juniper.tnc.HttpNAR.HttpNAR";

/// Candidate entry classes in priority order
pub const HOST_CHECKER_CLASSES: [&str; 2] = [LINUX_HTTP_NAR_CLASS, HTTP_NAR_CLASS];

const ARCHIVE_URL_PATH: &str = "/dana-cached/hc/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    Uninitialized,
    ArchiveReady,
    Running,
}

impl fmt::Display for LauncherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LauncherState::Uninitialized => "uninitialized",
            LauncherState::ArchiveReady => "archive ready",
            LauncherState::Running => "running",
        };
        f.write_str(name)
    }
}

/// The cached host checker archive and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReference {
    pub path: PathBuf,
    pub source_url: String,
}

impl ArchiveReference {
    pub fn new(tncc_home: &Path, host: &str) -> Self {
        Self {
            path: tncc_jar_path(tncc_home),
            source_url: archive_url(host),
        }
    }

    pub fn is_valid(&self) -> bool {
        archive::is_valid_archive(&self.path)
    }
}

/// Optional files that extend the host checker when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionArtifacts {
    pub preload: Option<PathBuf>,
    pub plugin_jar: Option<PathBuf>,
}

pub fn archive_url(host: &str) -> String {
    format!("https://{host}{ARCHIVE_URL_PATH}{TNCC_JAR}")
}

/// Make sure a valid `tncc.jar` is cached, fetching it from the gateway when
/// it is missing or fails the integrity check. Returns whether a download
/// happened.
pub fn ensure_archive(
    reference: &ArchiveReference,
    downloader: &HttpFileDownloader,
    options: &DownloadOptions,
) -> Result<bool> {
    if reference.is_valid() {
        log::debug!("Using cached archive at {}", reference.path.display());
        return Ok(false);
    }

    security::verify_https_security(&reference.source_url)?;

    println!("Downloading {TNCC_JAR}...");
    log::info!(
        "Fetching {} into {}",
        reference.source_url,
        reference.path.display()
    );
    downloader.download(&reference.source_url, &reference.path, options)?;

    archive::verify_integrity(&reference.path)?;
    Ok(true)
}

/// Find which known entry class the archive provides.
pub fn resolve_class_name(archive_path: &Path) -> Result<&'static str> {
    archive::find_class(archive_path, &HOST_CHECKER_CLASSES)?.ok_or_else(|| {
        TnccError::ClassNotFound {
            archive: archive_path.display().to_string(),
            candidates: HOST_CHECKER_CLASSES.iter().map(|c| c.to_string()).collect(),
        }
    })
}

/// Presence check for an optional artifact. Absence only warns.
pub fn check_optional_companion(path: &Path, description: &str) -> Option<PathBuf> {
    if path.is_file() {
        log::debug!("Found {description} at {}", path.display());
        Some(path.to_path_buf())
    } else {
        log::warn!("No {description} found at {}", path.display());
        None
    }
}

pub fn check_companions(tncc_home: &Path, config: &TnccConfig) -> CompanionArtifacts {
    CompanionArtifacts {
        preload: check_optional_companion(&preload_path(tncc_home), "tncc_preload"),
        plugin_jar: check_optional_companion(&config.plugin_jar, "IcedTea Java web plugin JAR"),
    }
}

/// Initial state: a validated host and the configuration to use.
#[derive(Debug)]
pub struct HostChecker {
    host: String,
    tncc_home: PathBuf,
    config: TnccConfig,
}

impl HostChecker {
    pub fn new(host: &str, tncc_home: PathBuf, config: TnccConfig) -> Result<Self> {
        security::validate_host(host)?;
        Ok(Self {
            host: host.to_string(),
            tncc_home,
            config,
        })
    }

    pub fn state(&self) -> LauncherState {
        LauncherState::Uninitialized
    }

    pub fn archive(&self) -> ArchiveReference {
        ArchiveReference::new(&self.tncc_home, &self.host)
    }

    /// Fetch or verify the archive, resolve its entry class and look for
    /// optional companions.
    pub fn prepare(self, downloader: &HttpFileDownloader) -> Result<PreparedHostChecker> {
        let archive = self.archive();
        let options = download::options_from_config(&self.config.download);

        ensure_archive(&archive, downloader, &options)?;
        let class_name = resolve_class_name(&archive.path)?;
        log::info!("Host checker entry class: {class_name}");

        let companions = check_companions(&self.tncc_home, &self.config);

        Ok(PreparedHostChecker {
            host: self.host,
            config: self.config,
            archive,
            class_name,
            companions,
        })
    }
}

/// Archive is in place and the entry class is known.
#[derive(Debug)]
pub struct PreparedHostChecker {
    host: String,
    config: TnccConfig,
    archive: ArchiveReference,
    class_name: &'static str,
    companions: CompanionArtifacts,
}

impl PreparedHostChecker {
    pub fn state(&self) -> LauncherState {
        LauncherState::ArchiveReady
    }

    pub fn archive(&self) -> &ArchiveReference {
        &self.archive
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn companions(&self) -> &CompanionArtifacts {
        &self.companions
    }

    pub fn launch_spec(&self, java: PathBuf, home_dir: &Path) -> LaunchSpec {
        let mut classpath = vec![self.archive.path.clone()];
        classpath.extend(self.companions.plugin_jar.clone());

        let host_checker = &self.config.host_checker;
        let parameters = vec![
            ("log_level", OsString::from(host_checker.log_level.to_string())),
            (
                "postRetries",
                OsString::from(host_checker.post_retries.to_string()),
            ),
            ("ivehost", OsString::from(&self.host)),
            ("home_dir", home_dir.as_os_str().to_os_string()),
            ("Parameter0", OsString::new()),
            ("user_agent", OsString::from(&host_checker.user_agent)),
        ];

        LaunchSpec {
            program: java,
            class_name: self.class_name,
            classpath,
            preload: self.companions.preload.clone(),
            parameters,
        }
    }

    /// Start the host checker. The process is not waited on.
    pub fn start(
        self,
        java: PathBuf,
        home_dir: &Path,
        spawner: &mut dyn ProcessSpawner,
    ) -> Result<RunningHostChecker> {
        let spec = self.launch_spec(java, home_dir);
        let mut command = spec.to_command()?;
        log::debug!("Command: {command:?}");

        let pid = spawner.spawn(&mut command)?;
        log::info!("Started host checker {} (pid {pid})", spec.class_name);

        Ok(RunningHostChecker { pid, spec })
    }
}

/// Handed off to the external process; terminal for this tool.
#[derive(Debug)]
pub struct RunningHostChecker {
    pub pid: u32,
    pub spec: LaunchSpec,
}

impl RunningHostChecker {
    pub fn state(&self) -> LauncherState {
        LauncherState::Running
    }
}

/// Run the whole sequence for `host` with production collaborators.
pub fn launch(host: &str, tncc_home: PathBuf, config: TnccConfig) -> Result<RunningHostChecker> {
    let checker = HostChecker::new(host, tncc_home, config)?;
    let downloader = download::downloader_from_config(&checker.config.download);
    log::debug!("Launcher state: {}", checker.state());

    let prepared = checker.prepare(&downloader)?;
    log::debug!("Launcher state: {}", prepared.state());

    let java = find_java(prepared.config.java.as_deref())?;
    let home_dir = user_home()?;

    let running = prepared.start(java, &home_dir, &mut DetachedSpawner)?;
    log::debug!("Launcher state: {}", running.state());
    Ok(running)
}
