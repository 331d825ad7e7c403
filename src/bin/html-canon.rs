//! html-canon command line
//!
//! Normalizes an HTML document and prints the canonical tree as JSON or as an
//! indented tree. It can also query the tree with a selector or compare it
//! against a second document.

use clap::{ArgAction, Parser};
use html_canon::input::{load_config, read_file};
use html_canon::{
    compare, normalize_html, select, CanonicalNode, HtmlCanonError, InputSource,
    NormalizeConfig, OutputFormat, Result,
};
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "html-canon")]
#[command(version)]
#[command(about = "Normalize HTML into a canonical tree for comparison", long_about = None)]
struct Cli {
    /// HTML file to parse
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// HTML string to parse
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Output file for the rendered structure (defaults to stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format: json, tree
    #[arg(long, short = 'f', default_value = "json")]
    format: OutputFormat,

    /// Normalize whitespace in text nodes [default: true, or the config file's value]
    #[arg(long = "normalize-ws", value_name = "BOOL", action = ArgAction::Set)]
    normalize_ws: Option<bool>,

    /// JSON file with normalization settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only render nodes matching this selector
    #[arg(long, value_name = "SELECTOR")]
    select: Option<String>,

    /// Compare against another HTML file and report differences
    #[arg(long, value_name = "PATH", conflicts_with = "select")]
    compare_with: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NormalizeConfig::default(),
    };
    if let Some(normalize_ws) = cli.normalize_ws {
        config.normalize_whitespace = normalize_ws;
    }

    let source = InputSource::choose(cli.file, cli.html, !io::stdin().is_terminal())?;
    let html = source.read()?;
    let root = normalize_html(&html, &config);
    log::info!("normalized document into {} node(s)", root.count_nodes());

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).map_err(HtmlCanonError::WriteOutput)?),
        None => Box::new(io::stdout().lock()),
    };

    let code = if let Some(other) = &cli.compare_with {
        let actual = normalize_html(&read_file(other)?, &config);
        let comparison = compare(&root, &actual);
        for message in comparison.messages() {
            writeln!(out, "{}", message).map_err(HtmlCanonError::WriteOutput)?;
        }
        if comparison.is_equal() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        }
    } else if let Some(selector) = &cli.select {
        let matches = select(&root, selector);
        write_nodes(&mut out, &matches, cli.format)?;
        ExitCode::SUCCESS
    } else {
        write_nodes(&mut out, &[&root], cli.format)?;
        ExitCode::SUCCESS
    };

    out.flush().map_err(HtmlCanonError::WriteOutput)?;
    Ok(code)
}

fn write_nodes(out: &mut dyn Write, nodes: &[&CanonicalNode], format: OutputFormat) -> Result<()> {
    let rendered = match (format, nodes) {
        (OutputFormat::Json, [single]) if single.is_document() => single.to_json()?,
        (OutputFormat::Json, nodes) => serde_json::to_string_pretty(nodes)?,
        (OutputFormat::Tree, nodes) => nodes.iter().map(|n| n.to_tree_string()).collect(),
    };
    out.write_all(rendered.as_bytes())
        .map_err(HtmlCanonError::WriteOutput)?;
    if format == OutputFormat::Json {
        writeln!(out).map_err(HtmlCanonError::WriteOutput)?;
    }
    Ok(())
}
