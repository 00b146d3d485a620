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
use crate::platform::PRELOAD_ENV;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

/// Everything needed to start the host checker, assembled once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Java interpreter
    pub program: PathBuf,
    /// Entry point resolved from the archive
    pub class_name: &'static str,
    /// `tncc.jar`, optionally followed by the browser plugin archive
    pub classpath: Vec<PathBuf>,
    /// Library injected through `LD_PRELOAD`
    pub preload: Option<PathBuf>,
    /// Ordered key/value pairs the host checker reads from its argv
    pub parameters: Vec<(&'static str, OsString)>,
}

impl LaunchSpec {
    pub fn classpath_string(&self) -> Result<OsString> {
        std::env::join_paths(&self.classpath).map_err(|e| {
            TnccError::ValidationError(format!("Invalid classpath entry: {e}"))
        })
    }

    /// Arguments after the interpreter: `-classpath <cp> <class> k1 v1 k2 v2 ...`
    pub fn arguments(&self) -> Result<Vec<OsString>> {
        let mut args = vec![
            OsString::from("-classpath"),
            self.classpath_string()?,
            OsString::from(self.class_name),
        ];
        for (key, value) in &self.parameters {
            args.push(OsString::from(key));
            args.push(value.clone());
        }
        Ok(args)
    }

    /// Value of a named parameter, if present.
    pub fn parameter(&self, key: &str) -> Option<&OsStr> {
        self.parameters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_os_str())
    }

    pub fn to_command(&self) -> Result<Command> {
        let mut command = Command::new(&self.program);
        command.args(self.arguments()?);

        // An inherited LD_PRELOAD must not leak into the host checker
        match &self.preload {
            Some(preload) => command.env(PRELOAD_ENV, preload),
            None => command.env_remove(PRELOAD_ENV),
        };

        Ok(command)
    }
}
