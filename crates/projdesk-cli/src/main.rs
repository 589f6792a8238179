//! projdesk CLI - document text extraction and maintenance jobs
//!
//! Two jobs live here: turning uploaded PDF/Word/Excel files into plain
//! text (`extract`), and the one-off cleanup deleting items with known junk
//! titles from the hosted backend (`purge-titles`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use projdesk_client::{purge_titles, RestClient, DEFAULT_PURGE_PATTERNS};
use projdesk_core::Config;
use projdesk_extract::TextConverter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "projdesk")]
#[command(about = "Project management tooling: document extraction and backend maintenance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract plain text from a PDF, Word or Excel document
    Extract {
        /// Input file (.pdf, .docx, .doc, .xlsx, .xls)
        input: PathBuf,

        /// Write the text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Declared MIME type; overrides extension-based detection
        #[arg(long)]
        content_type: Option<String>,
    },

    /// List supported input formats
    Formats,

    /// Delete items whose titles match the known junk patterns, together
    /// with their artifact links. Per-row failures are logged and skipped;
    /// the command always exits 0 once it has run.
    PurgeTitles,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may live in a local .env file; absence is fine, the
    // variables can come from the real environment too.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Extract {
            input,
            output,
            content_type,
        } => extract(&input, output.as_deref(), content_type.as_deref()),
        Command::Formats => {
            formats();
            Ok(())
        }
        Command::PurgeTitles => purge().await,
    }
}

fn extract(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    content_type: Option<&str>,
) -> Result<()> {
    let converter = TextConverter::new();
    let text = converter
        .extract_file_with_mime(input, content_type)
        .with_context(|| format!("extracting {}", input.display()))?;

    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} {} ({} characters)",
                "✓".green(),
                path.display(),
                text.chars().count()
            );
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn formats() {
    println!("Supported input formats:");
    for kind in TextConverter::supported_kinds() {
        let extensions = kind
            .extensions()
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<6} {}", kind.to_string().bold(), extensions);
    }
}

async fn purge() -> Result<()> {
    // Missing credentials abort before anything is touched.
    let config = Config::from_env()?;
    let client = RestClient::new(config);

    let report = purge_titles(&client, &DEFAULT_PURGE_PATTERNS).await;

    println!(
        "{} searched {} pattern(s): {} matched, {} deleted, {} failure(s)",
        if report.failures == 0 {
            "✓".green()
        } else {
            "!".yellow()
        },
        report.patterns_searched,
        report.items_matched,
        report.items_deleted,
        report.failures
    );
    // Per-row failures were logged above; the run itself still succeeds.
    Ok(())
}
