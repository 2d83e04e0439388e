use crate::request::CreateRequest;
use std::fmt;

/// Default name of the ipset binary, resolved through `PATH`.
pub const IPSET_BIN: &str = "ipset";

/// Subcommand and idempotency flag, always placed before the request tokens.
const CREATE_PREFIX: [&str; 2] = ["create", "-exist"];

/// A fully assembled `ipset create` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateCommand {
    program: String,
    tokens: Vec<String>,
}

impl CreateCommand {
    pub fn new(program: impl Into<String>, request: &CreateRequest) -> Self {
        let mut tokens: Vec<String> = CREATE_PREFIX.iter().map(|t| t.to_string()).collect();
        if let Some(name) = &request.set_name {
            tokens.push(name.clone());
        }
        if let Some(set_type) = &request.set_type {
            tokens.push(set_type.clone());
        }
        for (flag, value) in request.create_options.iter() {
            tokens.push(flag.to_string());
            tokens.push(value.to_string());
        }
        Self {
            program: program.into(),
            tokens,
        }
    }
    pub fn program(&self) -> &str {
        self.program.as_str()
    }
    /// Arguments passed to the program, one token per argument.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
    /// Program and tokens joined with single spaces. Nothing is quoted, so
    /// this is for reporting only; execution always uses [`Self::tokens`].
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for token in &self.tokens {
            line.push(' ');
            line.push_str(token);
        }
        line
    }
}

impl fmt::Display for CreateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CreateRequestBuilder;

    #[test]
    fn test_name_and_type_only() {
        let req = CreateRequestBuilder::default()
            .set_name("blocked")
            .set_type("hash:ip")
            .build()
            .unwrap();
        let cmd = CreateCommand::new(IPSET_BIN, &req);
        assert_eq!(cmd.command_line(), "ipset create -exist blocked hash:ip");
        assert_eq!(cmd.tokens(), ["create", "-exist", "blocked", "hash:ip"]);
    }

    #[test]
    fn test_options_follow_type_in_order() {
        let req = CreateRequestBuilder::default()
            .set_name("blocked")
            .set_type("hash:ip")
            .create_option("a", "1")
            .create_option("b", "2")
            .build()
            .unwrap();
        let cmd = CreateCommand::new(IPSET_BIN, &req);
        assert_eq!(cmd.command_line(), "ipset create -exist blocked hash:ip a 1 b 2");
    }

    #[test]
    fn test_empty_request_keeps_prefix() {
        let cmd = CreateCommand::new(IPSET_BIN, &CreateRequest::default());
        assert_eq!(cmd.command_line(), "ipset create -exist");
        assert_eq!(cmd.program(), "ipset");
    }

    #[test]
    fn test_type_without_name() {
        let req = CreateRequestBuilder::default()
            .set_type("bitmap:port")
            .create_option("range", "0-1024")
            .build()
            .unwrap();
        let cmd = CreateCommand::new(IPSET_BIN, &req);
        assert_eq!(cmd.to_string(), "ipset create -exist bitmap:port range 0-1024");
    }

    #[test]
    fn test_values_with_spaces_stay_single_tokens() {
        let req = CreateRequestBuilder::default()
            .set_name("my set")
            .set_type("list:set")
            .create_option("comment", "a; rm -rf /")
            .build()
            .unwrap();
        let cmd = CreateCommand::new("/usr/sbin/ipset", &req);
        assert_eq!(
            cmd.tokens(),
            ["create", "-exist", "my set", "list:set", "comment", "a; rm -rf /"]
        );
        assert_eq!(
            cmd.command_line(),
            "/usr/sbin/ipset create -exist my set list:set comment a; rm -rf /"
        );
    }
}
