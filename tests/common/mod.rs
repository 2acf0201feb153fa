//! Shared helpers for integration tests that drive the compiled runner

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the runner binary built for this test run
pub fn runner_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deathtest"))
}

/// Invoke the runner with the given arguments and wait for it to exit
pub fn run_runner<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(runner_binary())
        .args(args)
        .output()
        .expect("runner binary should be invocable")
}

/// Read the report file produced at `path`
pub fn read_report(path: &Path) -> String {
    std::fs::read_to_string(path).expect("report file should exist")
}
