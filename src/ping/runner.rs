//! Child-process execution with a wall-clock budget.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use super::{CommandLine, PingError};

/// Run a command to completion, capturing stdout and stderr as text.
///
/// The child never outlives this call: the process handle is created with
/// `kill_on_drop`, so abandoning the wait on timeout also terminates the
/// child.
///
/// # Errors
/// - [`PingError::Io`] if the process cannot be started or awaited.
/// - [`PingError::Execution`] with captured stderr on a non-zero exit.
/// - [`PingError::Timeout`] if the budget elapses first.
pub async fn run_command(cmd: &CommandLine, budget: Duration) -> Result<String, PingError> {
    let child = Command::new(&cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    let output = match timeout(budget, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => return Err(PingError::Timeout(budget)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(PingError::Execution { stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
