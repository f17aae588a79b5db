use anyhow::bail;
use broomstick::{qid_for_code, Catalog, LanguageQid};
use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "broomstick", version, about = "Find Wikidata Lexemes that can be improved", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the queries applicable to a language, grouped for display
    Queries {
        /// Language code (e.g. en) or item Qid (e.g. Q1860)
        #[arg(long)]
        language: String,
    },
    /// Print the SPARQL text for one query
    Sparql {
        /// Query value, as listed by `values`
        #[arg(long)]
        query: String,
        /// Language code (e.g. en) or item Qid (e.g. Q1860)
        #[arg(long)]
        language: String,
    },
    /// Print every known query value
    Values,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_language(input: &str) -> anyhow::Result<LanguageQid> {
    if let Some(qid) = qid_for_code(input) {
        return Ok(qid);
    }
    LanguageQid::from_str(input)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::Queries { language } => {
            let qid = parse_language(&language)?;
            let options = catalog.options_for_language(Some(&qid));
            info!(%qid, groups = options.len(), "resolved query options");
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        Commands::Sparql { query, language } => {
            let qid = parse_language(&language)?;
            let Some(sparql) = catalog.sparql_for(&query, &qid) else {
                bail!("unknown query: {query}");
            };
            println!("{sparql}");
        }
        Commands::Values => {
            for value in catalog.all_query_values() {
                println!("{value}");
            }
        }
    }

    Ok(())
}
