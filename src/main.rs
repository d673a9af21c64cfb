// Entrypoint for the CLI application.
// - Keeps `main` small: parse config, run one check, print the report.
// - Exit code: 0 allowed, 1 blocked, 2 when the check itself failed.

use clap::Parser;
use geoblock_check::{logging, ui, Config, StatusChecker, CHECK_FAILED_EXIT_CODE};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    logging::init_logging(&config);

    match run(&config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(CHECK_FAILED_EXIT_CODE)
        }
    }
}

fn run(config: &Config) -> anyhow::Result<u8> {
    ui::print_preamble();

    let checker = StatusChecker::new(config)?;

    let spinner = ui::start_spinner();
    let result = checker.check();
    spinner.finish_and_clear();

    let (status, outcome) = match result {
        Ok(checked) => checked,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(err.exit_code());
        }
    };

    let report = ui::render_report(&status, ui::use_color(config.color_disabled()));
    ui::print_report(&report)?;
    Ok(outcome.exit_code())
}
