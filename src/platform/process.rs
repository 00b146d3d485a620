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

//! Starting the host checker process.

use crate::error::{Result, TnccError};
use std::process::Command;

/// Seam between assembling a command and actually starting it.
pub trait ProcessSpawner {
    /// Start the command and return the child's process id.
    fn spawn(&mut self, command: &mut Command) -> Result<u32>;
}

/// Starts the child with inherited stdio and does not wait for it.
///
/// The `Child` handle is dropped right away; on Unix this leaves the process
/// running and it is reparented once this tool exits.
#[derive(Debug, Default)]
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn(&mut self, command: &mut Command) -> Result<u32> {
        let child = command.spawn().map_err(|e| {
            TnccError::SpawnFailed(format!("{:?}: {e}", command.get_program()))
        })?;
        Ok(child.id())
    }
}
