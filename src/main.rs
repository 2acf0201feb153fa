//! Main entry point for the deathtest binary
//!
//! Launches the target executable, waits for it to terminate and writes a
//! JUnit XML report recording whether it died as expected. Exit status 0
//! means the child died (test passed), 1 means it survived or the
//! invocation was incomplete.

use clap::Parser;
use std::process::ExitCode;

use deathtest::config::{Args, InvocationSpec};
use deathtest::report;
use deathtest::runner::{self, DeathVerdict};
use deathtest::RunnerResult;

#[tokio::main]
async fn main() -> RunnerResult<ExitCode> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    let spec = match InvocationSpec::try_from(args) {
        Ok(spec) => spec,
        Err(e) => {
            // Usage errors report on stdout and exit 1, outside the error path
            println!("{e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    // Launch and wait failures propagate without producing a report
    let verdict = runner::run(&spec).await?;

    match verdict {
        DeathVerdict::Died => tracing::info!("Successful death"),
        DeathVerdict::Survived => tracing::error!("Error, no death"),
    }

    report::write(&spec, verdict).await?;

    Ok(match verdict {
        DeathVerdict::Died => ExitCode::SUCCESS,
        DeathVerdict::Survived => ExitCode::FAILURE,
    })
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::new(format!("deathtest={log_level}")))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
