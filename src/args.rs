use crate::modes::Command;
use crate::modes::create::{CreateMode, CreateModeCommand, CreateModeParamsBuilder};
use crate::modes::schema::SchemaModeCommand;

use ipset_create::{CreateCommand, CreateRequest, IPSET_BIN, SystemRunner, TraceRunner};

use clap::{Parser, Subcommand};

use std::process;
use std::sync::Arc;

/// Splits a `FLAG=VALUE` argument at the first `=`.
fn parse_option_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((flag, value)) if !flag.is_empty() => Ok((flag.to_string(), value.to_string())),
        _ => Err(format!("expected FLAG=VALUE, got `{s}`")),
    }
}

#[derive(clap::Args, Clone)]
struct CreateArgs {
    /// Name of the set to create
    #[arg(short = 'n', long = "setname")]
    set_name: Option<String>,
    /// Set type, e.g. hash:ip, hash:net, bitmap:port, list:set
    #[arg(short = 't', long = "type")]
    set_type: Option<String>,
    /// Create option as FLAG=VALUE, may be repeated (order is kept)
    #[arg(short = 'o', long = "option", value_parser = parse_option_pair)]
    options: Vec<(String, String)>,
    /// Whole request as a JSON object (see the `schema` subcommand)
    #[arg(long)]
    request: Option<String>,
    /// ipset binary to run
    #[arg(long, default_value = IPSET_BIN)]
    ipset_bin: String,
    /// Print the command line instead of running it
    #[arg(long, default_value_t = false)]
    dry_run: bool,
    /// Run without reporting the outcome
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl CreateArgs {
    /// Merges the JSON request with the explicit arguments, which win.
    fn to_request(&self) -> std::io::Result<CreateRequest> {
        let mut req = match &self.request {
            Some(json) => CreateRequest::from_json(json)?,
            None => CreateRequest::default(),
        };
        if let Some(name) = &self.set_name {
            req.set_name = Some(name.clone());
        }
        if let Some(set_type) = &self.set_type {
            req.set_type = Some(set_type.clone());
        }
        req.create_options.extend(self.options.iter().cloned());
        Ok(req)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a set (`ipset create -exist ...`)
    Create(CreateArgs),
    /// Print the JSON schema of a create request
    Schema {},
}

#[derive(Parser)]
#[command(version, about)]
pub struct IpsetCreateArgs {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

impl IpsetCreateArgs {
    pub fn get_scenario() -> Box<dyn Command> {
        let args = Self::parse();
        match &args.command {
            Commands::Create(args) => Self::get_create_command(args),
            Commands::Schema {} => Box::new(SchemaModeCommand::new()),
        }
    }
    fn get_create_command(args: &CreateArgs) -> Box<dyn Command> {
        let request = args.to_request().unwrap_or_else(|e| {
            eprintln!("{e}");
            process::exit(1)
        });
        let params = CreateModeParamsBuilder::default()
            .command(CreateCommand::new(args.ipset_bin.as_str(), &request))
            .dry_run(args.dry_run)
            .quiet(args.quiet)
            .build()
            .unwrap_or_else(|e| {
                eprintln!("Create command parameters building failed: {e}");
                process::exit(1)
            });
        let runner = Arc::new(TraceRunner::new(Box::new(SystemRunner::new())));
        Box::new(CreateModeCommand::new(CreateMode::new(runner, params)))
    }
}
