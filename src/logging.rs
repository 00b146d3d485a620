/// Environment variable selecting the log verbosity (0-3)
pub const VERBOSE_ENV: &str = "TNCC_VERBOSE";

/// Initialize the logger with the specified verbosity level
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
pub fn setup_logger(verbose: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter_for_verbosity(verbose)),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false)
    .init();
}

/// Read the verbosity level from `TNCC_VERBOSE`, defaulting to 0
pub fn verbosity_from_env() -> u8 {
    parse_verbosity(std::env::var(VERBOSE_ENV).ok().as_deref())
}

fn parse_verbosity(value: Option<&str>) -> u8 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "tncc_wrapper=warn",
        1 => "tncc_wrapper=info",
        2 => "tncc_wrapper=debug",
        _ => "tncc_wrapper=trace",
    }
}
