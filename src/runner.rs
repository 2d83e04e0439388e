use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// What a finished process left behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs an external program with a discrete argument list.
///
/// An `Err` means the process could not be started or waited for. A process
/// that ran and exited non-zero is an `Ok` with its exit code.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput>;
}

/// Maps a process status to an exit code, signals become 128+N on Unix.
fn exit_code_from_status(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .unwrap_or_else(|| status.signal().map_or(1, |s| 128 + s))
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(1)
    }
}

/// Spawns real processes. No shell is involved.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        Ok(RunOutput {
            exit_code: exit_code_from_status(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Logs every run of the wrapped runner.
pub struct TraceRunner {
    runner: Box<dyn ProcessRunner>,
}

impl TraceRunner {
    pub fn new(runner: Box<dyn ProcessRunner>) -> Self {
        Self { runner }
    }
}

impl ProcessRunner for TraceRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        log::debug!("Running: {} {}", program, args.join(" "));
        let res = self.runner.run(program, args);
        match &res {
            Ok(out) if out.success() => log::debug!("{program} finished successfully"),
            Ok(out) => log::debug!(
                "{} exited with code {}: {}",
                program,
                out.exit_code,
                out.stderr.trim_end()
            ),
            Err(e) => log::debug!("Failed to start {program}: {e}"),
        }
        if let Ok(out) = &res {
            if !out.stdout.is_empty() {
                log::trace!("{} stdout:\n{}", program, out.stdout);
            }
        }
        res
    }
}
