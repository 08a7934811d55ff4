//! CLI argument parsing for agent-forge.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! command implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Agent Forge: build AI agents from declarative configuration.
///
/// Agent records live in `.agent-forge/agents/` as Markdown files with YAML
/// front matter or as plain YAML files. The sample agents shipped with the
/// tool are available unless `include_builtin_agents = false`.
#[derive(Parser, Debug)]
#[command(name = "agent-forge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing the `.agent-forge/` directory.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for agent-forge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every configured agent.
    List(OutputArgs),

    /// Summarize an agent's configuration without building it.
    Describe(DescribeArgs),

    /// Build an agent from its configuration and report the result.
    Build(BuildArgs),

    /// Create a `.agent-forge/` directory with the sample agents.
    Init(InitArgs),

    /// Serve agents over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Agent identifier.
    pub agent_id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Agent identifier.
    pub agent_id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing `.agent-forge/` directory.
    #[arg(long)]
    pub force: bool,

    /// Only write `config.toml` and a single agent.
    #[arg(long)]
    pub minimal: bool,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind; defaults to `server.host` from `config.toml`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind; defaults to `server.port` from `config.toml`.
    #[arg(long)]
    pub port: Option<u16>,
}
