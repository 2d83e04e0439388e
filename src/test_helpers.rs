use crate::runner::{ProcessRunner, RunOutput};
use std::io;
use std::sync::{Arc, Mutex};

pub type RecordedCalls = Arc<Mutex<Vec<(String, Vec<String>)>>>;

/// Runner returning a canned result and recording every call.
pub struct FakeRunner {
    result: Result<RunOutput, io::ErrorKind>,
    calls: RecordedCalls,
}

impl FakeRunner {
    pub fn succeeding() -> Self {
        Self::with_result(Ok(RunOutput::default()))
    }
    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::with_result(Ok(RunOutput {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }))
    }
    pub fn unstartable(kind: io::ErrorKind) -> Self {
        Self::with_result(Err(kind))
    }
    fn with_result(result: Result<RunOutput, io::ErrorKind>) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
    pub fn calls(&self) -> RecordedCalls {
        self.calls.clone()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        match &self.result {
            Ok(out) => Ok(out.clone()),
            Err(kind) => Err(io::Error::new(*kind, format!("fake {kind:?}"))),
        }
    }
}
