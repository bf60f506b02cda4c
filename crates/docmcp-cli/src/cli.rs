use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docmcp",
    about = "docmcp: search and fetch tools over a fixed document corpus",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Search the corpus
    Search(SearchArgs),
    /// Show one document by id
    Fetch(FetchArgs),
    /// Print the tool manifest announced to clients
    Tools,
    /// Print a health check payload
    Health(HealthArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, overriding the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Server config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Corpus file (TOML), overriding the config file
    #[arg(long)]
    pub corpus: Option<PathBuf>,
    /// Service name reported by the health check
    #[arg(long)]
    pub service_name: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query words; a document matches if it contains any of them
    pub query: Vec<String>,
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

#[derive(Args)]
pub struct FetchArgs {
    pub id: String,
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

#[derive(Args)]
pub struct HealthArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub service_name: Option<String>,
}
