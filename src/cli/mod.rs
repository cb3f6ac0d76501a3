//! Command-line interface.

pub mod compare;
pub mod completions;
pub mod export;
pub mod list;
pub mod output;
pub mod resolve;
pub mod search;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::catalog::SearchQuery;

/// capi - search, list, export and compare Azure DevOps variable groups.
#[derive(Parser)]
#[command(
    name = "capi",
    about = "Search, list, export and compare Azure DevOps variable groups",
    version,
    after_help = "Requires the Azure CLI (`az login`) with the azure-devops extension."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Organization URL (e.g., https://dev.azure.com/my-org)
    #[arg(
        short,
        long,
        global = true,
        env = "CAPI_ORGANIZATION",
        alias = "organizacao"
    )]
    pub organization: Option<String>,

    /// Path to the az executable (default: found on PATH)
    #[arg(long, global = true, env = "CAPI_AZ", value_name = "PATH")]
    pub az: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Where a finished report goes.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Save the result to a file
    #[arg(long, value_name = "PATH", alias = "salvar")]
    pub save: Option<PathBuf>,

    /// Also print the result when saving
    #[arg(long)]
    pub out: bool,
}

impl OutputArgs {
    /// Whether the report should be printed to stdout.
    pub fn prints(&self) -> bool {
        self.out || self.save.is_none()
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find variables whose value contains a term
    #[command(alias = "pesquisar")]
    Search {
        /// Text to look for in variable values
        #[arg(short, long, alias = "termo")]
        term: String,
        /// Project name filter (substring)
        #[arg(short, long, alias = "projeto")]
        project: Option<String>,
        /// Environment filter on group names (e.g., DEV, QAS, PRD)
        #[arg(short, long, alias = "ambiente", value_parser = parse_env)]
        env: Option<String>,
        /// Case-insensitive match on values
        #[arg(short, long)]
        ignore_case: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List variable groups
    #[command(alias = "listar")]
    List {
        /// Project name filter (substring)
        #[arg(short, long, alias = "projeto")]
        project: Option<String>,
        /// Environment filter on group names
        #[arg(short, long, alias = "ambiente", value_parser = parse_env)]
        env: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Export a variable group as a .env file
    #[command(alias = "baixar")]
    Export {
        /// Project (or substring) holding the group
        #[arg(short, long, alias = "projeto")]
        project: String,
        /// Variable group name (e.g., My-App.QAS)
        #[arg(short, long)]
        lib: String,
        /// Environment filter on group names
        #[arg(short, long, alias = "ambiente", value_parser = parse_env)]
        env: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the variables exclusive to each of two groups
    #[command(alias = "comparar")]
    Compare {
        /// Project name filter (substring)
        #[arg(short, long, alias = "projeto")]
        project: Option<String>,
        /// Group name; pass exactly twice (--lib A --lib B)
        #[arg(short, long, required = true)]
        lib: Vec<String>,
        /// Environment filter on group names
        #[arg(short, long, alias = "ambiente", value_parser = parse_env)]
        env: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Environment filters are matched upper-case.
fn parse_env(raw: &str) -> Result<String, String> {
    Ok(raw.to_uppercase())
}

/// Execute a command.
///
/// # Errors
///
/// Returns the first error raised by the command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    let global = cli.global;
    match cli.command {
        Search {
            term,
            project,
            env,
            ignore_case,
            json,
            output,
        } => {
            let query = SearchQuery {
                term,
                project,
                env,
                ignore_case,
            };
            search::execute(&global, &query, json, &output)
        }
        List {
            project,
            env,
            json,
            output,
        } => list::execute(&global, project.as_deref(), env.as_deref(), json, &output),
        Export {
            project,
            lib,
            env,
            output,
        } => export::execute(&global, &project, &lib, env.as_deref(), &output),
        Compare {
            project,
            lib,
            env,
            output,
        } => compare::execute(&global, project.as_deref(), &lib, env.as_deref(), &output),
        Completions { shell } => completions::execute(shell),
    }
}
