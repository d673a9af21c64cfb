// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper around these modules.
//
// Module responsibilities:
// - `config`: command-line flags and environment fallbacks.
// - `api`: the single HTTP call to the geoblock endpoint and its decoding.
// - `status`: the decoded payload and the allowed/blocked outcome.
// - `error`: failure taxonomy and the exit code used for failed checks.
// - `ui`: report rendering and terminal output.
// - `logging`: tracing subscriber setup.
//
// Network access, parsing and exit-code mapping are kept in separate
// modules so each can be tested without the others.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod status;
pub mod ui;

pub use api::StatusChecker;
pub use config::Config;
pub use error::{CheckError, CHECK_FAILED_EXIT_CODE};
pub use status::{GeoStatus, Outcome};
