// UI layer: turns a `GeoStatus` into the text report and handles the bits of
// terminal output around it (preamble, spinner, color detection).
// `render_report` is pure so the same status always yields the same bytes.

use crate::status::{GeoStatus, Outcome};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

const RULE_WIDTH: usize = 50;
const UNKNOWN: &str = "Unknown";

/// Build the report for `status`. With `color` set, the status line is
/// painted green (allowed) or red (blocked); the text is otherwise identical.
pub fn render_report(status: &GeoStatus, color: bool) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let (label, context) = match status.outcome() {
        Outcome::Allowed => ("✓ ALLOWED", "Your location can access Polymarket!\n"),
        Outcome::Blocked => (
            "🚫 BLOCKED",
            "Your location is restricted from accessing Polymarket.\n\
             This may be due to regulatory requirements or compliance\n\
             with international sanctions.\n",
        ),
    };
    let label = match (color, status.outcome()) {
        (false, _) => label.to_string(),
        (true, Outcome::Allowed) => label.green().bold().to_string(),
        (true, Outcome::Blocked) => label.red().bold().to_string(),
    };

    format!(
        "{rule}\n\
         Polymarket Geoblock Check Results\n\
         {rule}\n\
         \n\
         IP Address:  {ip}\n\
         Country:     {country}\n\
         Region:      {region}\n\
         \n\
         Status:      {label}\n\
         \n\
         {context}\
         {rule}\n",
        ip = display_field(status.ip.as_deref()),
        country = display_field(status.country.as_deref()),
        region = display_field(status.region.as_deref()),
    )
}

/// Absent, null and empty values all show as the placeholder.
fn display_field(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN,
    }
}

/// Color is used only on a terminal and only when not disabled.
pub fn use_color(disabled: bool) -> bool {
    !disabled && std::io::stdout().is_tty()
}

/// Line printed before the request goes out.
pub fn print_preamble() {
    println!("Checking Polymarket geoblock status...");
    println!();
}

/// Spinner shown on stderr while the request is in flight. indicatif hides
/// it on its own when stderr is not a terminal.
pub fn start_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Contacting geoblock endpoint...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn print_report(report: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()
}
