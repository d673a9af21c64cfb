// Error taxonomy for a geoblock check.
// Every variant ends the run: nothing is retried and there is no fallback
// endpoint. They all share one exit code so scripts can tell "check failed"
// apart from "confirmed blocked".

use reqwest::StatusCode;
use std::time::Duration;

/// Exit code used whenever the status could not be determined.
pub const CHECK_FAILED_EXIT_CODE: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// DNS failure, refused/reset connection, timeout or a broken body read.
    #[error("network error: could not reach {url}: {}", describe_network(.source, .timeout))]
    Network {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed with status {status}")]
    HttpStatus { status: StatusCode },

    /// Body is not JSON, or lacks a boolean `blocked` field.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckError {
    pub fn exit_code(&self) -> u8 {
        CHECK_FAILED_EXIT_CODE
    }
}

fn describe_network(source: &reqwest::Error, timeout: &Duration) -> String {
    if source.is_timeout() {
        format!("timed out after {}s", timeout.as_secs_f64())
    } else if source.is_connect() {
        "connection failed".to_string()
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_includes_code() {
        let err = CheckError::HttpStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "HTTP request failed with status 503 Service Unavailable"
        );
        assert_eq!(err.exit_code(), CHECK_FAILED_EXIT_CODE);
    }

    #[test]
    fn decode_message_is_marked_malformed() {
        let err: CheckError = serde_json::from_str::<bool>("not json").unwrap_err().into();
        assert!(err.to_string().starts_with("malformed response:"));
    }

    #[test]
    fn failure_code_differs_from_blocked() {
        assert_ne!(CHECK_FAILED_EXIT_CODE, 1);
        assert_ne!(CHECK_FAILED_EXIT_CODE, 0);
    }
}
