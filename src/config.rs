//! Invocation configuration
//!
//! Command-line surface for the runner and its validation into an immutable
//! invocation spec. The three required values are optional at the parser
//! level and checked here, so a missing flag reports a plain usage error
//! with exit status 1 instead of the parser's own usage handling.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{RunnerError, RunnerResult};

/// Death-test runner for CI suites
#[derive(Parser, Debug)]
#[command(name = "deathtest")]
#[command(about = "Runs an executable and reports whether it died as expected")]
pub struct Args {
    /// The executable to launch
    #[arg(long, value_name = "program")]
    pub exe: Option<PathBuf>,

    /// Name of the test
    #[arg(long, value_name = "string")]
    pub name: Option<String>,

    /// The junit xml file to write
    #[arg(long, value_name = "filename")]
    pub xml: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Arguments forwarded verbatim to the executable
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub forwarded: Vec<String>,
}

/// Validated invocation, immutable once built
#[derive(Debug, Clone)]
pub struct InvocationSpec {
    /// Executable to launch as the child process
    pub executable: PathBuf,
    /// Test name embedded in the report
    pub test_name: String,
    /// Path the report file is written to
    pub report_path: PathBuf,
    /// Trailing arguments, forwarded to the child in order
    pub forwarded_args: Vec<String>,
}

impl TryFrom<Args> for InvocationSpec {
    type Error = RunnerError;

    fn try_from(args: Args) -> RunnerResult<Self> {
        let executable = args.exe.ok_or(RunnerError::MissingArgument { flag: "--exe" })?;
        let test_name = args.name.ok_or(RunnerError::MissingArgument { flag: "--name" })?;
        let report_path = args.xml.ok_or(RunnerError::MissingArgument { flag: "--xml" })?;

        Ok(Self {
            executable,
            test_name,
            report_path,
            forwarded_args: args.forwarded,
        })
    }
}
