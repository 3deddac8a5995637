use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use commands::parse::OutputFormat;
use error::CliResult;

#[derive(Parser)]
#[command(name = "cart")]
#[command(about = "Validate and parse shopping cart CSV files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every header, row and cell problem in a cart file
    Validate {
        /// Cart CSV file
        file: PathBuf,

        /// YAML schema file (defaults to the built-in cart schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// Convert a cart file into line items and an order total
    Parse {
        /// Cart CSV file
        file: PathBuf,

        /// YAML schema file (defaults to the built-in cart schema)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cart=info,cart_csvs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { file, schema } => commands::validate::execute(file, schema),

        Commands::Parse {
            file,
            schema,
            format,
            output,
        } => {
            let stdout = std::io::stdout().lock();
            commands::parse::execute(file, schema, format, output, stdout)
        }
    }
}
