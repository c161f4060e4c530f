//! Lexiclaire command line
//!
//! Runs the document change and annotation engine over local files:
//!
//! - `extract`: decoded text with page offsets
//! - `compare`: section-level changes between two versions
//! - `analyze`: report assembly from a findings JSON file
//! - `chat-prompt`: the prompt a chat question would send to the model
//!
//! Configuration comes from the environment (and `.env`), with command line
//! flags taking precedence. Logs go to stderr so stdout stays parseable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexiclaire_service::ServiceConfig;
use tracing::{debug, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Command-line arguments for lexiclaire
#[derive(Parser, Debug)]
#[command(name = "lexiclaire")]
#[command(about = "Extract, compare and annotate contract documents")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum chars kept from each document (overrides MAX_INPUT_CHARS)
    #[arg(long, global = true)]
    max_chars: Option<usize>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the extracted text and page offsets of a document
    Extract {
        file: PathBuf,
    },

    /// Compare two versions of a document
    Compare {
        file_a: PathBuf,
        file_b: PathBuf,
    },

    /// Build an analysis report from model findings
    Analyze {
        file: PathBuf,

        /// JSON file with summary, obligations, risks, clauses and tags
        #[arg(long)]
        findings: PathBuf,
    },

    /// Render the chat prompt for a question about a document
    ChatPrompt {
        file: PathBuf,

        #[arg(long)]
        question: String,

        /// JSON file with the conversation so far
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ServiceConfig::from_env()?;
    if let Some(max_chars) = args.max_chars {
        anyhow::ensure!(max_chars > 0, "--max-chars must be greater than zero");
        config = config.with_max_input_chars(max_chars);
    }
    debug!("Limits: {:?}", config.limits);

    let output = match args.command {
        Command::Extract { file } => commands::extract(&config, &file, args.pretty)?,
        Command::Compare { file_a, file_b } => {
            commands::compare(&config, &file_a, &file_b, args.pretty)?
        }
        Command::Analyze { file, findings } => {
            commands::analyze(&config, &file, &findings, args.pretty)?
        }
        Command::ChatPrompt {
            file,
            question,
            history,
        } => commands::chat_prompt(&config, &file, question, history.as_deref())?,
    };

    println!("{}", output);
    Ok(())
}
