use clap::{Args, Parser, Subcommand};
use greenscreen::{
    query_companies, score_domain, CompanyDataStore, DataSource, Error, DATA_FILE_ENV_VAR,
    DATA_SOURCE_ENV_VAR,
};
use log::{error, info};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "greenscreen-cli")]
#[command(about = "Look up the sustainability scores of the companies you shop at.")]
struct CommandLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the company behind a domain name and show its scores
    Scores {
        domain: String,
        #[command(flatten)]
        data: DataArgs,
    },
    /// Search company names and show the scores of every result
    Search {
        /// Free text to search for; lists every company when omitted
        text: Vec<String>,
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Data file to load (`.gz` files are decompressed)
    #[arg(long, env = DATA_FILE_ENV_VAR)]
    file: PathBuf,
    /// Data source the file comes from
    #[arg(long, env = DATA_SOURCE_ENV_VAR, default_value = "s-ray", value_parser = DataSource::from_str)]
    source: DataSource,
}

impl Commands {
    fn data(&self) -> &DataArgs {
        match self {
            Commands::Scores { data, .. } | Commands::Search { data, .. } => data,
        }
    }
}

fn load_store(data: &DataArgs) -> Result<CompanyDataStore, Error> {
    let mut store = CompanyDataStore::new();
    let report = store.ingest_file(data.source, &data.file)?;
    info!(
        "Loaded {} rows from {} ({} failed)",
        report.succeeded,
        data.file.display(),
        report.failed
    );

    Ok(store)
}

fn run(command: Commands) -> Result<(), Error> {
    let store = load_store(command.data())?;

    match command {
        Commands::Scores { domain, .. } => match score_domain(&store, &domain)? {
            Some(summary) => print!("{}", summary),
            None => println!("No company found for domain {}", domain),
        },
        Commands::Search { text, .. } => {
            let search_text = if text.is_empty() {
                None
            } else {
                Some(text.join(" "))
            };

            let summaries = query_companies(&store, search_text.as_deref())?;
            if summaries.is_empty() {
                println!("No results");
            }
            for summary in summaries {
                print!("{}", summary);
            }
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let command_line = CommandLine::parse();

    if let Err(e) = run(command_line.command) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
