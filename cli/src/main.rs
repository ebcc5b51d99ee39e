//! gridsheet CLI - answer sheet conversion and validation tool

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use gridsheet::{
    blocks_to_plain_text, from_json, parse_reader_with_options, parse_to_blocks, to_json,
    Document, JsonFormat, ParseOptions, SheetStats,
};

#[derive(Parser)]
#[command(name = "gridsheet")]
#[command(version)]
#[command(about = "Convert answer-sheet text to positioned blocks and validate them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse plain text into a JSON document
    Parse {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Fail on table rows that do not match their header
        #[arg(long, env = "GRIDSHEET_STRICT")]
        strict: bool,
    },

    /// Convert a JSON document back to plain text
    Text {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate a JSON document or plain-text answer
    Validate {
        /// Input file (.json is loaded as a document, anything else is parsed)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show sheet statistics
    Info {
        /// Input file (.json is loaded as a document, anything else is parsed)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
            strict,
        } => cmd_parse(&input, output.as_deref(), compact, strict),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load a document from JSON, or parse it from plain text.
fn load_document(input: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let is_json = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        log::debug!("loading {} as a JSON document", input.display());
        Ok(from_json(&content)?)
    } else {
        log::debug!("parsing {} as plain text", input.display());
        Ok(parse_to_blocks(&content))
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = if strict {
        ParseOptions::new().strict()
    } else {
        ParseOptions::new().lenient()
    };
    let doc = parse_reader_with_options(File::open(input)?, options)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = from_json(&fs::read_to_string(input)?)?;
    write_output(output, &blocks_to_plain_text(&doc))
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let report = doc.validate();

    for error in &report.errors {
        println!("{} {}", "error:".red().bold(), error);
    }
    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    if report.is_valid {
        println!(
            "{} {} blocks, {} lines",
            "Valid".green().bold(),
            doc.block_count(),
            doc.total_lines
        );
        Ok(())
    } else {
        Err(format!("{} validation errors", report.errors.len()).into())
    }
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let stats = SheetStats::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Sheet Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Valid".bold(),
        if doc.is_valid() { "Yes" } else { "No" }
    );
    println!(
        "{}: {} / {} ({} pages)",
        "Lines".bold(),
        stats.total_lines,
        gridsheet::MAX_LINES,
        stats.pages_used
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.total_blocks);
    println!("{}: {}", "Text".bold(), stats.text_blocks);
    println!("{}: {}", "Tables".bold(), stats.table_blocks);
    println!("{}: {}", "Drawings".bold(), stats.drawing_blocks);
    println!("{}: {:.0}%", "Fill".bold(), stats.fill_ratio() * 100.0);

    if stats.overflowing_lines > 0 {
        println!(
            "{}: {}",
            "Overflowing lines".yellow().bold(),
            stats.overflowing_lines
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "gridsheet".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Answer sheet layout and validation tool");
    println!();
    println!(
        "Grid: {} lines x {} cells per page, {} pages",
        gridsheet::LINES_PER_PAGE,
        gridsheet::MAX_CELLS_PER_LINE,
        gridsheet::MAX_PAGES
    );
}
