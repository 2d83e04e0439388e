use derive_builder::Builder;
use ipset_create::{CreateCommand, CreateOutcome, ProcessRunner, spawn_create};

use std::process;
use std::sync::Arc;
use std::sync::mpsc;

#[derive(Builder)]
pub struct CreateModeParams {
    command: CreateCommand,
    #[builder(default = false)]
    dry_run: bool,
    #[builder(default = false)]
    quiet: bool,
}

pub struct CreateMode {
    runner: Arc<dyn ProcessRunner>,
    params: CreateModeParams,
}

impl CreateMode {
    pub fn new(runner: Arc<dyn ProcessRunner>, params: CreateModeParams) -> Self {
        Self { runner, params }
    }
    /// Runs the command and returns the outcome, or `None` when nothing was
    /// reported (dry run, or quiet mode without a callback).
    pub fn run(&self) -> Option<CreateOutcome> {
        let params = &self.params;
        if params.dry_run {
            println!("{}", params.command);
            return None;
        }
        let command = params.command.clone();
        if params.quiet {
            let handle = spawn_create(command, self.runner.clone(), None::<fn(CreateOutcome)>);
            if handle.join().is_err() {
                log::error!("Create thread panicked");
            }
            return None;
        }
        let (tx, rx) = mpsc::channel();
        let handle = spawn_create(
            command,
            self.runner.clone(),
            Some(move |outcome: CreateOutcome| {
                // Receiver outlives the thread, send can't fail
                let _ = tx.send(outcome);
            }),
        );
        if handle.join().is_err() {
            log::error!("Create thread panicked");
        }
        rx.recv().ok()
    }
}

/// Process exit status for a failed create.
fn exit_status(code: i32) -> i32 {
    code.clamp(1, 255)
}

pub struct CreateModeCommand {
    mode: CreateMode,
}

impl CreateModeCommand {
    pub fn new(mode: CreateMode) -> Self {
        Self { mode }
    }
}

impl super::Command for CreateModeCommand {
    fn execute(&mut self) {
        if let Some(Err(failure)) = self.mode.run() {
            eprintln!("{failure}");
            process::exit(exit_status(failure.code));
        }
    }
}
