use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use tally_core::{format_table, write_csv, write_json, ParseStats, TransactionTable};
use tally_ingest::{extract_document, parse_with_stats, TransactionParser};

mod config;
mod logging;
mod state;

use config::{Config, OutputFormat};

const NO_TRANSACTIONS: &str = "No transactions found with the current parsing rules.";

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TALLY_BUILD_SHA"), ")"),
    about = "Extract transactions from statement PDFs and images"
)]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the raw text extracted from a document
    Extract {
        /// PDF, PNG/JPEG image, or plain text file
        file: PathBuf,
    },

    /// Extract text from a document and parse it into transactions
    Parse {
        /// PDF, PNG/JPEG image, or plain text file; `-` reads text from stdin
        file: PathBuf,

        /// Output format (default from config: table)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the table to a file (CSV unless --format json).
        /// Without a value, uses the configured csv_file_name.
        #[arg(long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,

        /// Print the extracted text to stderr before the table
        #[arg(long)]
        show_text: bool,
    },

    /// Manage ~/.tally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::setup_logging(&cfg.log.level, cli.verbose);

    match cli.command {
        Command::Extract { file } => {
            let extracted = extract_document(&file, &cfg.ingest_options())
                .with_context(|| format!("extracting text from {}", file.display()))?;
            print!("{}", extracted.text);
        }

        Command::Parse {
            file,
            format,
            output,
            show_text,
        } => {
            let format = format.unwrap_or(cfg.output.format);
            let output = output.map(|p| p.unwrap_or_else(|| PathBuf::from(&cfg.output.csv_file_name)));
            run_parse(&cfg, &file, format, output.as_deref(), show_text || cfg.output.show_raw_text)?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn run_parse(
    cfg: &Config,
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    show_text: bool,
) -> Result<()> {
    let (table, stats) = if file.as_os_str() == "-" {
        parse_stdin()?
    } else {
        // Acquisition failure ends the request here; nothing is parsed.
        let extracted = extract_document(file, &cfg.ingest_options())
            .with_context(|| format!("extracting text from {}", file.display()))?;

        if extracted.text.trim().is_empty() {
            eprintln!("No text extracted from {}.", file.display());
            return Ok(());
        }
        if show_text {
            eprintln!("--- extracted text ({}) ---", extracted.kind);
            eprintln!("{}", extracted.text.trim_end());
            eprintln!("---");
        }
        parse_with_stats(&extracted.text)
    };

    tracing::info!(
        records = table.len(),
        skipped = stats.skipped(),
        "parsed {}",
        file.display()
    );

    let stdout = std::io::stdout();
    match format {
        OutputFormat::Table => {
            if table.is_empty() {
                println!("{NO_TRANSACTIONS}");
            } else {
                print!("{}", format_table(&table));
                println!("{}", summary(&stats));
            }
        }
        OutputFormat::Csv => {
            write_csv(&table, stdout.lock())?;
            eprintln!("{}", summary(&stats));
        }
        OutputFormat::Json => {
            write_json(&table, stdout.lock())?;
            eprintln!("{}", summary(&stats));
        }
    }

    if let Some(path) = output {
        write_output(&table, format, path)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

fn parse_stdin() -> Result<(TransactionTable, ParseStats)> {
    let mut parser = TransactionParser::new();
    for line in std::io::stdin().lock().lines() {
        parser.push_line(&line.context("read stdin")?);
    }
    Ok(parser.finish_with_stats())
}

fn write_output(table: &TransactionTable, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Json => write_json(table, &mut writer)?,
        OutputFormat::Table | OutputFormat::Csv => write_csv(table, &mut writer)?,
    }
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn summary(stats: &ParseStats) -> String {
    if stats.emitted == 0 {
        NO_TRANSACTIONS.to_string()
    } else {
        format!("{} transactions found.", stats.emitted)
    }
}
