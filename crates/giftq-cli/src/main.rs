//! giftq CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "giftq", version, about = "GIFT question bank toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the question database lives.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Directory of .gift files (overrides the config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find questions by exact title or by word
    Find {
        /// Exact question title
        #[arg(long, conflicts_with = "query", required_unless_present = "query")]
        id: Option<String>,

        /// Case-insensitive whole-word search
        #[arg(long)]
        query: Option<String>,

        /// Print the untouched question text
        #[arg(long)]
        raw: bool,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Generate an exam file from question titles
    Generate {
        /// Question titles (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Output .gift file
        #[arg(long)]
        output: PathBuf,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Show the question type profile of an exam
    Profile {
        /// Exam .gift file
        #[arg(long)]
        exam: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Chart the average question types of the database
    Visualize {
        /// Output format: text, svg
        #[arg(long, default_value = "text")]
        format: String,

        /// SVG output path
        #[arg(long, default_value = "question-types.svg")]
        output: PathBuf,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Compare an exam profile against the database averages
    Compare {
        /// Exam .gift file
        #[arg(long)]
        exam: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Check answers against an exam's answer keys
    Evaluate {
        /// Exam .gift file
        #[arg(long)]
        exam: PathBuf,

        /// Answers (comma-separated, one per validatable question)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        answers: Vec<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Generate a vCard for a teacher
    Contact {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Phone number
        #[arg(long)]
        tel: Option<String>,

        /// Write the card to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create starter config and sample question file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("giftq=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Find {
            id,
            query,
            raw,
            corpus,
        } => commands::find::execute(id, query, raw, corpus),
        Commands::Generate {
            ids,
            output,
            corpus,
        } => commands::generate::execute(ids, output, corpus),
        Commands::Profile { exam, format } => commands::profile::execute(exam, format),
        Commands::Visualize {
            format,
            output,
            corpus,
        } => commands::visualize::execute(format, output, corpus),
        Commands::Compare {
            exam,
            format,
            corpus,
        } => commands::compare::execute(exam, format, corpus),
        Commands::Evaluate {
            exam,
            answers,
            format,
        } => commands::evaluate::execute(exam, answers, format),
        Commands::Contact {
            name,
            email,
            tel,
            output,
        } => commands::contact::execute(name, email, tel, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
