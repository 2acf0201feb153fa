//! Child-process launch and wait
//!
//! Spawns the target executable and blocks on a single awaited
//! child-completion future. There is no timeout and no cancellation: a hung
//! child suspends the runner until the OS reports its exit status.

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::InvocationSpec;
use crate::error::{RunnerError, RunnerResult};

/// Observed outcome of a completed death test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathVerdict {
    /// The child terminated abnormally (non-zero exit or signal)
    Died,
    /// The child exited with status zero, which fails the test
    Survived,
}

/// Launch the target executable and wait for it to terminate
pub async fn run(spec: &InvocationSpec) -> RunnerResult<DeathVerdict> {
    info!(
        "Calling {} {:?}",
        spec.executable.display(),
        spec.forwarded_args
    );

    let mut cmd = Command::new(&spec.executable);
    cmd.args(&spec.forwarded_args);

    // The child shares the runner's streams, nothing is captured
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| RunnerError::LaunchFailed {
        executable: spec.executable.display().to_string(),
        source,
    })?;

    let status = child.wait().await.map_err(|source| RunnerError::WaitFailed {
        executable: spec.executable.display().to_string(),
        source,
    })?;

    debug!("retcode={:?}", status.code());

    // A signal-killed child has no exit code but still counts as a death
    if status.success() {
        Ok(DeathVerdict::Survived)
    } else {
        Ok(DeathVerdict::Died)
    }
}
