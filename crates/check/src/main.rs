//! `contracts-check` -- validate a contract form file from the command line.
//!
//! Usage: `contracts-check [FORM.json]`. See [`contracts_check::config`] for
//! the environment variables.
//!
//! Exit status: `0` valid form, `1` form has errors, `2` the check could not
//! run (bad configuration, unreadable or malformed file).

use std::process::ExitCode;

use contracts_check::config::CheckConfig;
use contracts_check::report;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contracts_check=info,contracts_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match CheckConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    let result = match contracts_check::run(&config) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(path = %config.form_path.display(), error = %e, "Check failed");
            return ExitCode::from(2);
        }
    };

    match report::render(&result, config.output) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render report");
            return ExitCode::from(2);
        }
    }

    if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
