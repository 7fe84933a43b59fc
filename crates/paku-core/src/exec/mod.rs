//! Process helpers: interactive spawning and root privilege isolation.

use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::Context;
use tracing::debug;

/// Run a command with inherited stdio, blocking until it exits.
pub fn spawn_interactive(cmd: &[String]) -> anyhow::Result<ExitStatus> {
    let (program, args) = cmd
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("Cannot spawn an empty command"))?;
    debug!(command = %cmd.join(" "), "spawning interactive command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to spawn command: {program}"))?;
    Ok(status)
}

/// Whether the current process runs with an effective uid of root.
#[cfg(unix)]
pub fn running_as_root() -> bool {
    use std::os::unix::fs::MetadataExt;
    // /proc/<pid> is owned by the task's effective uid.
    std::fs::metadata("/proc/self")
        .map(|meta| meta.uid() == 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn running_as_root() -> bool {
    false
}

/// When running as root, prefix `cmd` with a dynamic-user systemd-run
/// launcher so package sources are never fetched or built with root
/// privileges. Returns `cmd` unchanged otherwise.
pub fn isolate_root_cmd(cmd: &[String], cwd: Option<&Path>) -> Vec<String> {
    isolate_cmd(cmd, cwd, running_as_root())
}

fn isolate_cmd(cmd: &[String], cwd: Option<&Path>, as_root: bool) -> Vec<String> {
    if !as_root {
        return cmd.to_vec();
    }
    let mut isolated: Vec<String> = [
        "systemd-run",
        "--pipe",
        "--wait",
        "-p",
        "DynamicUser=yes",
        "-p",
        "CacheDirectory=paku",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if let Some(cwd) = cwd {
        isolated.push("-p".to_string());
        isolated.push(format!("WorkingDirectory={}", cwd.display()));
    }
    isolated.extend(cmd.iter().cloned());
    isolated
}
