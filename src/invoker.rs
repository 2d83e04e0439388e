use crate::command::{CreateCommand, IPSET_BIN};
use crate::outcome::{CreateFailure, CreateOutcome};
use crate::request::CreateRequest;
use crate::runner::ProcessRunner;
use std::io::{self, ErrorKind};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Exit codes a shell would report for a program it could not start.
fn spawn_error_code(err: &io::Error) -> i32 {
    match err.kind() {
        ErrorKind::NotFound => 127,
        ErrorKind::PermissionDenied => 126,
        _ => 1,
    }
}

/// Runs an assembled command and classifies the result.
pub fn run_create(command: &CreateCommand, runner: &dyn ProcessRunner) -> CreateOutcome {
    match runner.run(command.program(), command.tokens()) {
        Ok(out) if out.success() => Ok(()),
        Ok(out) => Err(CreateFailure::from_stderr(
            &out.stderr,
            command.command_line(),
            out.exit_code,
        )),
        Err(e) => Err(CreateFailure::from_stderr(
            &e.to_string(),
            command.command_line(),
            spawn_error_code(&e),
        )),
    }
}

/// Creates the set described by `request` with `ipset create -exist`,
/// blocking until the process exits.
pub fn create_set(request: &CreateRequest, runner: &dyn ProcessRunner) -> CreateOutcome {
    run_create(&CreateCommand::new(IPSET_BIN, request), runner)
}

/// Runs `command` on a background thread.
///
/// `callback` is called exactly once with the outcome. Without a callback
/// the outcome is dropped.
pub fn spawn_create<F>(
    command: CreateCommand,
    runner: Arc<dyn ProcessRunner>,
    callback: Option<F>,
) -> JoinHandle<()>
where
    F: FnOnce(CreateOutcome) + Send + 'static,
{
    thread::spawn(move || {
        let outcome = run_create(&command, runner.as_ref());
        if let Some(cb) = callback {
            cb(outcome);
        }
    })
}

/// Non-blocking form of [`create_set`] reporting through `callback`.
///
/// The request is turned into tokens before this returns; the process
/// itself runs on a background thread whose handle is returned.
pub fn create_set_with_callback<F>(
    request: &CreateRequest,
    runner: Arc<dyn ProcessRunner>,
    callback: Option<F>,
) -> JoinHandle<()>
where
    F: FnOnce(CreateOutcome) + Send + 'static,
{
    spawn_create(CreateCommand::new(IPSET_BIN, request), runner, callback)
}
