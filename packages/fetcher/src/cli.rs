//! Command-line interface for the fetcher.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mekorot_resolver::{parse_citation, TextSource};

use crate::error::Result;
use crate::render::{render_source, Language, RenderOptions};
use crate::texts::TextsClient;

/// Mekorot - Fetch and display cited passages from the Sefaria texts API.
#[derive(Parser)]
#[command(name = "mekorot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a citation and display the resolved passage.
    Show {
        /// Citation (e.g., "Exodus 12:2") or a sefaria.org URL
        input: String,

        /// Display the Hebrew payload instead of the translation
        #[arg(long)]
        hebrew: bool,

        /// Wrap width for passage text
        #[arg(short, long)]
        width: Option<usize>,

        /// Emit the resolved segments as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },

    /// Resolve and display a saved texts-API response file.
    Resolve {
        /// Path to a JSON response file
        file: PathBuf,

        /// Display the Hebrew payload instead of the translation
        #[arg(long)]
        hebrew: bool,

        /// Wrap width for passage text
        #[arg(short, long)]
        width: Option<usize>,

        /// Emit the resolved segments as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            hebrew,
            width,
            json,
        } => show_command(&input, render_options(hebrew, width), json),
        Commands::Resolve {
            file,
            hebrew,
            width,
            json,
        } => resolve_command(&file, render_options(hebrew, width), json),
    }
}

fn render_options(hebrew: bool, width: Option<usize>) -> RenderOptions {
    let mut opts = RenderOptions::default();
    if hebrew {
        opts.language = Language::Hebrew;
    }
    if let Some(w) = width {
        opts.width = w;
    }
    opts
}

/// Execute the show command.
fn show_command(input: &str, opts: RenderOptions, json: bool) -> Result<()> {
    let citation = parse_citation(input)?;

    let client = TextsClient::new()?;
    let source = client.fetch(&citation)?;

    emit(&source, &opts, json)
}

/// Execute the resolve command.
fn resolve_command(file: &PathBuf, opts: RenderOptions, json: bool) -> Result<()> {
    let raw = fs::read_to_string(file)?;
    let source = TextSource::from_json_str(&raw)?;

    emit(&source, &opts, json)
}

fn emit(source: &TextSource, opts: &RenderOptions, json: bool) -> Result<()> {
    if json {
        let segments = match opts.language {
            Language::English => source.segments(),
            Language::Hebrew => source.hebrew_segments(),
        };
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", render_source(source, opts));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from(["mekorot", "show", "Exodus 12:2"]);

        let Commands::Show {
            input,
            hebrew,
            width,
            json,
        } = cli.command
        else {
            panic!("expected show command");
        };
        assert_eq!(input, "Exodus 12:2");
        assert!(!hebrew);
        assert!(width.is_none());
        assert!(!json);
    }

    #[test]
    fn test_cli_parse_show_with_flags() {
        let cli = Cli::parse_from(["mekorot", "show", "Genesis 1:1-3", "--hebrew", "--width", "60"]);

        let Commands::Show { hebrew, width, .. } = cli.command else {
            panic!("expected show command");
        };
        assert!(hebrew);
        assert_eq!(width, Some(60));
    }

    #[test]
    fn test_cli_parse_resolve() {
        let cli = Cli::parse_from(["mekorot", "resolve", "response.json", "--json"]);

        let Commands::Resolve { file, json, .. } = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(file, PathBuf::from("response.json"));
        assert!(json);
    }
}
