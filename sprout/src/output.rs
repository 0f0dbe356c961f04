//! Terminal output: colored status lines for the user, `tracing` for diagnostics.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "SPROUT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber, writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn info(msg: &str) {
    println!("{} {msg}", "[INFO]".blue().bold());
}

pub fn success(msg: &str) {
    println!("{} {msg}", "[SUCCESS]".green().bold());
}

pub fn warn(msg: &str) {
    println!("{} {msg}", "[WARN]".yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "[ERROR]".red().bold());
}
