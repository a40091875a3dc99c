use std::path::PathBuf;

use clap::{Parser, Subcommand};
use conclusio_cli::answers::Answers;
use conclusio_cli::commands;
use conclusio_export::catalog::ReportCatalog;
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "conclusio", version, about = "Psychological report generator")]
struct Cli {
    /// Report catalog listing templates, field schemas and section layouts.
    #[arg(long, default_value = "reports.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List report kinds in the catalog.
    Kinds,
    /// Print the ordered form fields of a report kind as JSON.
    Fields {
        /// Report title or 1-based position in the catalog.
        #[arg(long, default_value = "1")]
        kind: String,
    },
    /// Print a plain-text preview filled from an answers file.
    Preview {
        #[arg(long, default_value = "1")]
        kind: String,
        #[arg(long)]
        answers: PathBuf,
    },
    /// Write the finished report as DOCX.
    Generate {
        #[arg(long, default_value = "1")]
        kind: String,
        #[arg(long)]
        answers: PathBuf,
        /// Output path; defaults to a name derived from the report title.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = ReportCatalog::load(&cli.catalog)?;

    match cli.command {
        Command::Kinds => println!("{}", commands::list_kinds(&catalog)),
        Command::Fields { kind } => {
            let config = catalog.load_report(catalog.find(&kind)?)?;
            let entries = commands::field_entries(&config);
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Preview { kind, answers } => {
            let config = catalog.load_report(catalog.find(&kind)?)?;
            let answers = Answers::load(&answers)?;
            println!("{}", commands::preview(&config, &answers));
        }
        Command::Generate { kind, answers, out } => {
            let report = catalog.find(&kind)?;
            let config = catalog.load_report(report)?;
            let answers = Answers::load(&answers)?;
            let path = commands::generate(&catalog, report, &config, &answers, out.as_deref())?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
