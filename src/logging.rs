// Tracing subscriber setup. Logs go to stderr so stdout carries only the
// report and stays safe to pipe.

use crate::config::Config;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the `-v` level when
/// set. ANSI styling follows the same rules as the report: off when stderr
/// is not a terminal or color is disabled. Calling this twice is harmless;
/// the second call is ignored.
pub fn init_logging(config: &Config) {
    let ansi = !config.color_disabled() && std::io::stderr().is_tty();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init();
}
