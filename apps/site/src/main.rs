use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use routing::Params;
use shared::protocol::ResolvedLocation;
use tracing::info;

mod app_state;
mod config;
mod navigator;
mod routes;
mod views;

use app_state::AppState;
use config::load_settings;
use navigator::{write_json, write_page, Navigator, OutputFormat};
use routes::{resolve_location, route_summaries};
use views::render_location;

#[derive(Parser, Debug)]
#[command(name = "site", about = "Title listing site: route table and content store")]
struct Cli {
    /// Settings file; defaults to ./site.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Overrides the configured base path, e.g. `/Blog/`.
    #[arg(long, global = true)]
    base_path: Option<String>,
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the route table.
    Routes,
    /// Print the title collections.
    Content,
    /// Show which route a location matches.
    Resolve { location: String },
    /// Render the page for a location.
    Render { location: String },
    /// Build the URL of a named route.
    Href {
        name: String,
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Read locations from stdin and render each one.
    Browse,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(base_path) = cli.base_path {
        settings.base_path = base_path;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    info!(base_path = %settings.base_path, "settings loaded");

    let state = AppState::from_settings(&settings)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&state, cli.command, format, &mut out)
}

fn run(
    state: &AppState,
    command: Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Routes => {
            let summaries = route_summaries(&state.routes);
            match format {
                OutputFormat::Json => write_json(out, &summaries)?,
                OutputFormat::Text => {
                    for route in &summaries {
                        writeln!(
                            out,
                            "{:<8} {:<14} {:<8} props={:<5} {}",
                            route.name,
                            route.path,
                            route.view.to_string(),
                            route.props,
                            route.href.as_deref().unwrap_or("-")
                        )?;
                    }
                }
            }
        }
        Command::Content => {
            let collections = state.content.collections();
            match format {
                OutputFormat::Json => write_json(out, &collections)?,
                OutputFormat::Text => {
                    for (category, titles) in collections.iter() {
                        let titles = titles.iter().collect::<Vec<_>>().join(", ");
                        writeln!(out, "{}: {titles}", category.key())?;
                    }
                }
            }
        }
        Command::Resolve { location } => {
            let resolved = resolve_location(&state.routes, &location);
            match (format, &resolved) {
                (OutputFormat::Json, _) => write_json(out, &resolved)?,
                (OutputFormat::Text, ResolvedLocation::Matched { name, view, props }) => {
                    let props = props
                        .iter()
                        .flatten()
                        .map(|(key, value)| format!(" {key}={value}"))
                        .collect::<String>();
                    writeln!(out, "{name} -> {view}{props}")?;
                }
                (OutputFormat::Text, ResolvedLocation::NotFound { path }) => {
                    writeln!(out, "not found: {path}")?;
                }
            }
        }
        Command::Render { location } => {
            write_page(out, &render_location(state, &location), format)?;
        }
        Command::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            let href = state.routes.href(&name, &params)?;
            match format {
                OutputFormat::Json => write_json(out, &serde_json::json!({ "href": href }))?,
                OutputFormat::Text => writeln!(out, "{href}")?,
            }
        }
        Command::Browse => {
            let stdin = io::stdin();
            Navigator::new(state.clone()).run(stdin.lock(), out, format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
