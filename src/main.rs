use std::path::PathBuf;

use chapters_tools::extract::ExamAliases;
use chapters_tools::io::preview::DEFAULT_PREVIEW_ROWS;
use chapters_tools::pipeline;
use chapters_tools::{Result, ToolError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract(args) => execute_extract(args),
        Command::Inspect(args) => execute_inspect(args),
    }
}

fn execute_extract(args: ExtractArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }

    let aliases = match &args.aliases {
        Some(path) => pipeline::load_aliases(path)?,
        None => ExamAliases::default(),
    };

    match &args.output {
        Some(output) => pipeline::extract_chapters(&args.input, output, &aliases),
        None => {
            println!("{}", pipeline::extract_to_string(&args.input, &aliases)?);
            Ok(())
        }
    }
}

fn execute_inspect(args: InspectArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ToolError::MissingInput(args.input));
    }

    let preview = pipeline::preview_workbook(&args.input, args.rows, args.output.as_deref())?;
    if args.output.is_none() {
        print!("{preview}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Extract exam chapter taxonomies from question-bank workbooks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the exam → subject → class → chapters document.
    Extract(ExtractArgs),
    /// Print the leading rows of every sheet.
    Inspect(InspectArgs),
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Input workbook path.
    #[arg(long)]
    input: PathBuf,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Optional JSON object of sheet name → exam name overrides.
    #[arg(long)]
    aliases: Option<PathBuf>,
}

#[derive(clap::Args)]
struct InspectArgs {
    /// Input workbook path.
    #[arg(long)]
    input: PathBuf,

    /// Number of leading rows to show per sheet.
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Write the dump to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}
