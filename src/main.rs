use clap::{Parser as ClapParser, Subcommand};
use pathmod::cli::{self, ApplyOptions, BatchOptions, CliError};
use pathmod::logging;
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "pathmod")]
#[command(about = "Pathmod - apply point mutations to JSON documents with a compact path query")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a single modification
    Apply {
        /// The query addressing the target
        query: String,

        /// JSON value to set, insert or append
        #[arg(short, long, required_unless_present = "delete", conflicts_with = "delete")]
        value: Option<String>,

        /// Delete or remove the target instead of setting it
        #[arg(short, long)]
        delete: bool,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Fail when a path segment does not exist
        #[arg(long)]
        strict: bool,
    },

    /// Apply a JSON array of modifications read from a file
    Batch {
        /// Path to the modifications file
        file: String,

        /// JSON input (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Fail when a path segment does not exist
        #[arg(long)]
        strict: bool,
    },

    /// Validate query syntax and print the parsed segments
    Check {
        /// The query to validate
        query: String,
    },

    /// Show the query syntax reference
    Docs,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply {
            query,
            value,
            delete: _,
            input,
            pretty,
            strict,
        } => read_input(input).and_then(|input| {
            let options = ApplyOptions {
                query,
                value,
                input,
                strict,
            };
            cli::execute_apply(&options).and_then(|doc| print_json(&doc, pretty))
        }),
        Commands::Batch {
            file,
            input,
            pretty,
            strict,
        } => run_batch(file, input, pretty, strict),
        Commands::Check { query } => cli::check_query(&query).map(|tokens| {
            for token in tokens {
                println!(
                    "{:<16} key={:?} predicate={:?} init={:?}",
                    token.to_string(),
                    token.key,
                    token.predicate,
                    token.init
                );
            }
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_input(input: Option<String>) -> Result<Option<String>, CliError> {
    match input {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_batch(
    file: String,
    input: Option<String>,
    pretty: bool,
    strict: bool,
) -> Result<(), CliError> {
    let modifications = std::fs::read_to_string(&file)?;
    let options = BatchOptions {
        modifications,
        input: read_input(input)?,
        strict,
    };
    let doc = cli::execute_batch(&options)?;
    print_json(&doc, pretty)
}

fn print_json(doc: &serde_json::Value, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    }?;
    println!("{}", json);
    Ok(())
}
