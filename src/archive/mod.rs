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
use std::fs::File;
use std::io;
use std::path::Path;
use zip::ZipArchive;

/// Zip entry name of a fully-qualified Java class, e.g.
/// `a.b.C` becomes `a/b/C.class`.
pub fn class_entry_name(class_name: &str) -> String {
    format!("{}.class", class_name.replace('.', "/"))
}

/// Full integrity check: every entry is decompressed and its CRC verified.
pub fn verify_integrity(archive_path: &Path) -> Result<()> {
    let invalid = |reason: String| TnccError::InvalidArchive {
        path: archive_path.display().to_string(),
        reason,
    };

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| invalid(e.to_string()))?;

    if archive.is_empty() {
        return Err(invalid("archive has no entries".to_string()));
    }

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| invalid(e.to_string()))?;
        let name = entry.name().to_string();
        // The zip reader checks the CRC once the entry is read to the end
        io::copy(&mut entry, &mut io::sink())
            .map_err(|e| invalid(format!("entry '{name}': {e}")))?;
    }

    log::debug!(
        "Verified {} entries in {}",
        archive.len(),
        archive_path.display()
    );
    Ok(())
}

/// Whether the file exists and passes [`verify_integrity`].
pub fn is_valid_archive(archive_path: &Path) -> bool {
    if !archive_path.is_file() {
        log::debug!("No archive at {}", archive_path.display());
        return false;
    }

    match verify_integrity(archive_path) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Cached archive is unusable: {e}");
            false
        }
    }
}

/// Return the first of `class_names` whose class file is present in the
/// archive, honouring the order given.
pub fn find_class<'a>(archive_path: &Path, class_names: &[&'a str]) -> Result<Option<&'a str>> {
    let file = File::open(archive_path)?;
    let archive = ZipArchive::new(file)?;

    Ok(class_names
        .iter()
        .copied()
        .find(|name| archive.index_for_name(&class_entry_name(name)).is_some()))
}
