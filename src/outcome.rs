use std::error::Error;
use std::fmt;

/// Failed `ipset create` run, as reported to the completion callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateFailure {
    /// First line of the process's standard error
    pub msg: String,
    /// Command line that was executed
    pub cmd: String,
    /// Exit code of the process
    pub code: i32,
}

impl CreateFailure {
    /// Builds a failure keeping only the first line of `stderr`.
    pub fn from_stderr(stderr: &str, cmd: impl Into<String>, code: i32) -> Self {
        Self {
            msg: first_line(stderr).to_string(),
            cmd: cmd.into(),
            code,
        }
    }
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

impl fmt::Display for CreateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` failed with code {}: {}", self.cmd, self.code, self.msg)
    }
}

impl Error for CreateFailure {}

/// Single result of one create call. `Ok(())` means the set exists.
pub type CreateOutcome = Result<(), CreateFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_only() {
        let f = CreateFailure::from_stderr(
            "set already exists with different type\nextra line",
            "ipset create -exist s hash:ip",
            1,
        );
        assert_eq!(f.msg, "set already exists with different type");
        assert_eq!(f.cmd, "ipset create -exist s hash:ip");
        assert_eq!(f.code, 1);
    }

    #[test]
    fn test_empty_stderr() {
        let f = CreateFailure::from_stderr("", "ipset create -exist", 2);
        assert_eq!(f.msg, "");
    }

    #[test]
    fn test_leading_newline_gives_empty_message() {
        let f = CreateFailure::from_stderr("\nsecond", "ipset create -exist", 2);
        assert_eq!(f.msg, "");
    }

    #[test]
    fn test_display() {
        let f = CreateFailure::from_stderr("boom\n", "ipset create -exist s", 3);
        assert_eq!(f.to_string(), "`ipset create -exist s` failed with code 3: boom");
    }
}
