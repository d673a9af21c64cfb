// Data returned by the geoblock endpoint and the decision derived from it.

use serde::Deserialize;

/// Decoded geoblock payload. Built fresh for each run and dropped after the
/// report is printed.
///
/// Only `blocked` is required. `ip`, `country` and `region` are shown to the
/// user but never influence the outcome; any other fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeoStatus {
    pub blocked: bool,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl GeoStatus {
    /// Parse a response body. Fails when the body is not JSON or `blocked`
    /// is missing or not a boolean.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from(self)
    }
}

/// Two-valued answer reported by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Blocked,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Allowed => 0,
            Outcome::Blocked => 1,
        }
    }
}

impl From<&GeoStatus> for Outcome {
    fn from(status: &GeoStatus) -> Self {
        if status.blocked {
            Outcome::Blocked
        } else {
            Outcome::Allowed
        }
    }
}
