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

use clap::Parser;
use std::io::IsTerminal;
use tncc_wrapper::config::TnccConfig;
use tncc_wrapper::error::{Result, TnccError, format_error_with_color, get_exit_code};
use tncc_wrapper::launcher;
use tncc_wrapper::logging;
use tncc_wrapper::paths::home::resolve_tncc_home;

#[derive(Parser)]
#[command(name = "tncc-wrapper")]
#[command(
    version,
    about = "Fetch tncc.jar from a VPN gateway and start the TNCC host checker",
    long_about = "Fetch tncc.jar from a VPN gateway and start the TNCC host checker

Files are kept in ~/.pulse_secure (override with TNCC_HOME):
  tncc.jar          downloaded from https://<host>/dana-cached/hc/tncc.jar
  tncc_preload.so   optional, injected with LD_PRELOAD
  config.toml       optional settings

Set TNCC_VERBOSE=1..3 for more log output."
)]
struct Cli {
    /// VPN gateway host name (e.g. "vpn.example.com")
    host: String,
}

fn run(cli: &Cli) -> Result<()> {
    let tncc_home = resolve_tncc_home()?;
    let config = TnccConfig::load(&tncc_home)?;

    let running = launcher::launch(&cli.host, tncc_home, config)?;
    log::info!("Host checker running with pid {}", running.pid);
    Ok(())
}

fn report(error: &TnccError) -> ! {
    eprint!(
        "{}",
        format_error_with_color(error, std::io::stderr().is_terminal())
    );
    std::process::exit(get_exit_code(error));
}

fn main() {
    // Missing host: clap prints usage and exits with status 2
    let cli = Cli::parse();

    logging::setup_logger(logging::verbosity_from_env());

    if let Err(e) = run(&cli) {
        report(&e);
    }
}
