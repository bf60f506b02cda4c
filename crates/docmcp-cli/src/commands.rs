use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;

use docmcp_protocol::{
    manifest, FetchRequest, HealthResponse, SearchRequest, ToolCall, ToolDescriptor,
};
use docmcp_server::{tools, DocServer, ServerConfig};
use docmcp_store::{search, DocumentStore, StaticDocumentStore};
use docmcp_types::{Document, SearchHit};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Search(args) => cmd_search(args, &format),
        Command::Fetch(args) => cmd_fetch(args, &format),
        Command::Tools => cmd_tools(&format),
        Command::Health(args) => cmd_health(args),
    }
}

/// Load the config file (or defaults) and apply command-line overrides.
pub fn resolve_config(
    config: Option<&Path>,
    bind: Option<&str>,
    corpus: Option<&Path>,
    service_name: Option<&str>,
) -> anyhow::Result<ServerConfig> {
    let mut resolved = match config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = bind {
        resolved.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    if let Some(corpus) = corpus {
        resolved.corpus_path = Some(corpus.to_path_buf());
    }
    if let Some(name) = service_name {
        resolved.service_name = name.to_string();
    }
    Ok(resolved)
}

fn open_store(corpus: Option<&Path>) -> anyhow::Result<StaticDocumentStore> {
    StaticDocumentStore::from_optional_path(corpus).context("loading corpus")
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(
        args.config.as_deref(),
        args.bind.as_deref(),
        args.corpus.as_deref(),
        args.service_name.as_deref(),
    )?;
    println!("{} docmcp server on {}", "▶".green().bold(), config.bind_addr.to_string().bold());
    DocServer::new(config).serve().await?;
    Ok(())
}

fn cmd_search(args: SearchArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let store = open_store(args.corpus.as_deref())?;
    let query = args.query.join(" ");
    match format {
        // Same envelope the HTTP tool endpoint returns.
        OutputFormat::Json => {
            let call = ToolCall::Search(SearchRequest { query });
            print_json(&tools::execute(&store, &call)?)
        }
        OutputFormat::Text => {
            print!("{}", render_hits(&search(&store, &query)));
            Ok(())
        }
    }
}

fn cmd_fetch(args: FetchArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let store = open_store(args.corpus.as_deref())?;
    match format {
        OutputFormat::Json => {
            let call = ToolCall::Fetch(FetchRequest { id: args.id.clone() });
            let response = tools::execute(&store, &call)?;
            print_json(&response)?;
            if response.is_error() {
                bail!("document '{}' not found", args.id);
            }
            Ok(())
        }
        OutputFormat::Text => match store.by_id(&args.id) {
            Some(doc) => {
                print!("{}", render_document(doc));
                Ok(())
            }
            None => bail!("document '{}' not found", args.id),
        },
    }
}

fn cmd_tools(format: &OutputFormat) -> anyhow::Result<()> {
    let descriptors = manifest();
    match format {
        OutputFormat::Json => print_json(&descriptors),
        OutputFormat::Text => {
            print!("{}", render_tools(&descriptors));
            Ok(())
        }
    }
}

fn cmd_health(args: HealthArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), None, None, args.service_name.as_deref())?;
    print_json(&HealthResponse::now(config.service_name))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No matching documents.\n".to_string();
    }
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!("{}  {}\n", hit.id.as_str().yellow().bold(), hit.title));
        if !hit.url.is_empty() {
            out.push_str(&format!("  {}\n", hit.url.blue()));
        }
        out.push_str(&format!("  {}\n", hit.text.dimmed()));
    }
    out.push_str(&format!("{} result(s)\n", hits.len()));
    out
}

pub fn render_document(doc: &Document) -> String {
    let mut out = format!("{} {}\n", doc.id.as_str().yellow().bold(), doc.title.bold());
    if !doc.url.is_empty() {
        out.push_str(&format!("  URL: {}\n", doc.url.blue()));
    }
    for (key, value) in doc.metadata.iter() {
        out.push_str(&format!("  {}: {}\n", key.cyan(), value));
    }
    out.push('\n');
    out.push_str(&doc.text);
    out.push('\n');
    out
}

pub fn render_tools(tools: &[ToolDescriptor]) -> String {
    let mut out = String::new();
    for tool in tools {
        out.push_str(&format!("{} - {}\n", tool.name.green().bold(), tool.description));
        for (name, prop) in &tool.input_schema.properties {
            let required = if tool.input_schema.required.contains(name) { " (required)" } else { "" };
            out.push_str(&format!("  {}: {}{} - {}\n", name.cyan(), prop.kind, required, prop.description));
        }
    }
    out
}
