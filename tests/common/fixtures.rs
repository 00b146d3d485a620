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

/// Shared fixtures for host checker archives and fake interpreters
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

pub const LINUX_HTTP_NAR_ENTRY: &str = "net/juniper/tnc/NARPlatform/linux/LinuxHttpNAR.class";
#[allow(dead_code)]
pub const HTTP_NAR_ENTRY: &str = "net/juniper/tnc/HttpNAR/HttpNAR.class";

/// Builds an in-memory jar containing the given entries
pub fn jar_bytes(entries: &[&str]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for entry in entries {
        zip.start_file(*entry, options).expect("Failed to start jar entry");
        zip.write_all(b"\xca\xfe\xba\xbe")
            .expect("Failed to write jar entry");
    }
    zip.finish().expect("Failed to finish jar").into_inner()
}

/// Writes `tncc.jar` with the given entries into the configuration directory
#[allow(dead_code)]
pub fn create_tncc_jar(tncc_home: &Path, entries: &[&str]) -> PathBuf {
    fs::create_dir_all(tncc_home).expect("Failed to create tncc home");
    let jar = tncc_home.join("tncc.jar");
    fs::write(&jar, jar_bytes(entries)).expect("Failed to write tncc.jar");
    jar
}

/// Writes config.toml pointing at a fake interpreter and an absent plugin jar
#[allow(dead_code)]
pub fn write_config(tncc_home: &Path, java: &Path) {
    let contents = format!(
        "java = {:?}\nplugin_jar = {:?}\n",
        java.display().to_string(),
        tncc_home.join("absent-plugin.jar").display().to_string()
    );
    fs::write(tncc_home.join("config.toml"), contents).expect("Failed to write config.toml");
}

/// Creates a shell script standing in for `java`. It records LD_PRELOAD and its
/// arguments into `$TNCC_TEST_OUT`.
#[cfg(unix)]
#[allow(dead_code)]
pub fn create_fake_java(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-java");
    fs::write(
        &script,
        r#"#!/bin/sh
{
  echo "LD_PRELOAD=${LD_PRELOAD:-}"
  for arg in "$@"; do
    echo "arg=$arg"
  done
} > "$TNCC_TEST_OUT.tmp"
mv "$TNCC_TEST_OUT.tmp" "$TNCC_TEST_OUT"
"#,
    )
    .expect("Failed to write fake java");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake java executable");
    script
}

/// Waits for the fake interpreter to record its invocation
#[allow(dead_code)]
pub fn wait_for_file(path: &Path) -> Option<String> {
    for _ in 0..100 {
        if let Ok(contents) = fs::read_to_string(path) {
            return Some(contents);
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
    None
}
