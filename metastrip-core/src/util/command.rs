//! External command execution bounded by a [`Deadline`].

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error};
use crate::util::Deadline;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Logs a command line at debug level.
pub fn log_command(cmd: &Command) {
    debug!("Executing command: {}", describe(cmd));
}

/// Renders a command the way a user would type it.
pub fn describe(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Runs a command to completion with whatever stdio the caller configured.
///
/// The child is killed if `deadline` expires first. A non-zero exit is not an
/// error here; callers inspect the returned status.
pub fn run_with_deadline(cmd: &mut Command, deadline: &Deadline) -> CoreResult<ExitStatus> {
    log_command(cmd);
    let name = program_name(cmd);
    if deadline.is_expired() {
        return Err(timeout_error(&name, deadline));
    }

    let mut child = cmd.spawn().map_err(|e| command_start_error(&name, e))?;
    wait_with_deadline(&mut child, &name, deadline)
}

/// Runs a command capturing stdout and stderr. A non-zero exit is an error.
pub fn run_captured(cmd: &mut Command, deadline: &Deadline) -> CoreResult<Output> {
    log_command(cmd);
    let name = program_name(cmd);
    if deadline.is_expired() {
        return Err(timeout_error(&name, deadline));
    }

    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| command_start_error(&name, e))?;

    // Drain both pipes concurrently so a chatty child cannot block on a full pipe.
    let stdout_handle = spawn_reader(child.stdout.take());
    let stderr_handle = spawn_reader(child.stderr.take());

    let status = wait_with_deadline(&mut child, &name, deadline);

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();
    let status = status?;

    if !status.success() {
        let stderr_text = String::from_utf8_lossy(&stderr).trim().to_string();
        return Err(command_failed_error(name, status, stderr_text));
    }

    Ok(Output {
        status,
        stdout,
        stderr,
    })
}

/// Runs `program <version_arg>` silently; exit status 0 means the program is usable.
pub fn is_command_available(program: &std::path::Path, version_arg: &str) -> bool {
    let result = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            debug!("Found dependency: {}", program.display());
            true
        }
        Ok(status) => {
            debug!("'{} {}' exited with {}", program.display(), version_arg, status);
            false
        }
        Err(e) => {
            debug!("Dependency '{}' could not be started: {}", program.display(), e);
            false
        }
    }
}

fn wait_with_deadline(child: &mut Child, name: &str, deadline: &Deadline) -> CoreResult<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if deadline.is_expired() {
                    warn!("Deadline reached, terminating '{}'", name);
                    if let Err(e) = child.kill() {
                        warn!("Failed to kill '{}': {}", name, e);
                    }
                    // Reap the child so it does not linger as a zombie.
                    let _ = child.wait();
                    return Err(timeout_error(name, deadline));
                }
                thread::sleep(POLL_INTERVAL.min(deadline.remaining()));
            }
            Err(e) => return Err(command_wait_error(name, e)),
        }
    }
}

fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = source {
            if let Err(e) = reader.read_to_end(&mut buf) {
                debug!("Failed to read child output: {}", e);
            }
        }
        buf
    })
}

fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

fn timeout_error(name: &str, deadline: &Deadline) -> CoreError {
    CoreError::CommandTimeout {
        command: name.to_string(),
        after: deadline.budget(),
    }
}
