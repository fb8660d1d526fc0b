use clap::{Parser, Subcommand};
use name_match_engine::{
    ai::OpenAiMatcher,
    api::{handle_query, NameQuery},
    config::AppConfig,
    NameMatchEngine, Roster,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "name-match-cli")]
#[command(about = "Chinese/English name matching CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Roster JSON file (overrides ROSTER_PATH)
    #[arg(short, long)]
    roster: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a name against the roster
    Match {
        /// Name to look up
        name: String,

        /// Ask the AI matcher instead of matching manually
        #[arg(long)]
        ai: bool,
    },

    /// List roster records
    Roster,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let roster = match cli.roster.as_ref().or(config.roster_path.as_ref()) {
        Some(path) => Roster::from_json_file(path)?,
        None => Roster::builtin(),
    };

    match cli.command {
        Commands::Match { name, ai } => {
            let mut engine = NameMatchEngine::new(roster.clone());
            if ai {
                let matcher = OpenAiMatcher::new(&config.ai, &roster)?;
                engine = engine.with_ai(Arc::new(matcher));
            }

            println!("🔍 Matching: {}", name);

            let query = NameQuery {
                name: Some(name),
                ai: ai.then(|| "true".to_string()),
            };
            let reply = handle_query(&engine, query).await;

            println!("{}", serde_json::to_string_pretty(&reply.body)?);

            if reply.status != 200 {
                std::process::exit(1);
            }
        }

        Commands::Roster => {
            println!("📇 Roster ({} records):", roster.len());
            for (i, record) in roster.records().iter().enumerate() {
                println!("   {}. {}", i + 1, record);
            }
        }
    }

    Ok(())
}
