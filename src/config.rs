// Runtime configuration: command-line flags with environment fallbacks.

use clap::Parser;
use std::ffi::OsStr;
use std::time::Duration;

/// Endpoint queried when neither `--url` nor `GEOBLOCK_URL` is set.
pub const DEFAULT_ENDPOINT: &str = "https://polymarket.com/api/geoblock";

/// Request timeout used when neither `--timeout` nor `GEOBLOCK_TIMEOUT` is set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest accepted timeout. Keeps request deadlines far from `Instant`
/// overflow.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

/// Check whether your current location may access Polymarket.
///
/// Exits 0 when allowed, 1 when blocked and 2 when the status could not be
/// determined.
#[derive(Parser, Debug, Clone)]
#[command(name = "geoblock-check", version, about)]
pub struct Config {
    /// Geoblock status endpoint
    #[arg(long, env = "GEOBLOCK_URL", default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Request timeout in seconds [default: 10, max: 3600]
    #[arg(long, env = "GEOBLOCK_TIMEOUT", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Config for a given endpoint with every other setting at its default.
    pub fn with_url(url: impl Into<String>) -> Self {
        Config {
            url: url.into(),
            timeout: None,
            no_color: false,
            verbose: 0,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Whether color was turned off by `--no-color` or the `NO_COLOR`
    /// environment variable.
    pub fn color_disabled(&self) -> bool {
        color_disabled(self.no_color, std::env::var_os("NO_COLOR").as_deref())
    }

    /// Log filter directive derived from `-v` occurrences.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Any non-empty `NO_COLOR` value disables color, whatever it says.
fn color_disabled(flag: bool, no_color_env: Option<&OsStr>) -> bool {
    flag || no_color_env.is_some_and(|value| !value.is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    let secs: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number of seconds"))?;
    if secs.is_nan() || secs <= 0.0 {
        return Err("timeout must be a positive number of seconds".into());
    }
    let timeout = Duration::try_from_secs_f64(secs).map_err(|err| err.to_string())?;
    if timeout > MAX_TIMEOUT {
        return Err(format!(
            "timeout must be at most {} seconds",
            MAX_TIMEOUT.as_secs()
        ));
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["geoblock-check"]).unwrap();
        // GEOBLOCK_URL may leak in from the environment running the tests.
        if std::env::var_os("GEOBLOCK_URL").is_none() {
            assert_eq!(config.url, DEFAULT_ENDPOINT);
        }
        if std::env::var_os("GEOBLOCK_TIMEOUT").is_none() {
            assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        }
    }

    #[test]
    fn flags_override() {
        let config = Config::try_parse_from([
            "geoblock-check",
            "--url",
            "http://127.0.0.1:9/api/geoblock",
            "--timeout",
            "0.5",
            "--no-color",
            "-vv",
        ])
        .unwrap();
        assert_eq!(config.url, "http://127.0.0.1:9/api/geoblock");
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert!(config.no_color);
        assert!(config.color_disabled());
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_non_positive_timeout() {
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "0"]).is_err());
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "-3"]).is_err());
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "soon"]).is_err());
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "NaN"]).is_err());
    }

    #[test]
    fn rejects_oversized_timeout() {
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "1e300"]).is_err());
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "inf"]).is_err());
        assert!(Config::try_parse_from(["geoblock-check", "--timeout", "3601"]).is_err());

        let config = Config::try_parse_from(["geoblock-check", "--timeout", "3600"]).unwrap();
        assert_eq!(config.timeout(), MAX_TIMEOUT);
    }

    #[test]
    fn any_non_empty_no_color_disables_color() {
        assert!(color_disabled(false, Some(OsStr::new("1"))));
        assert!(color_disabled(false, Some(OsStr::new("0"))));
        assert!(color_disabled(false, Some(OsStr::new("false"))));
        assert!(!color_disabled(false, Some(OsStr::new(""))));
        assert!(!color_disabled(false, None));
        assert!(color_disabled(true, None));
    }

    #[test]
    fn with_url_keeps_defaults() {
        let config = Config::with_url("http://localhost/x");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.log_level(), "warn");
    }
}
