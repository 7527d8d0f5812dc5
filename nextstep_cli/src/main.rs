use anyhow::Result;
/// nextstep - career path recommender
///
/// Provides the interactive questionnaire TUI and a non-interactive `ask` command.
use clap::{Parser, Subcommand};
use nextstep_cli::{
    ask::{run_ask, AskInput},
    logging::init_logging,
    report, ui,
};
use nextstep_core::{
    config::DEFAULT_ORIGIN,
    options::{display_label, INTEREST_OPTIONS, STRENGTH_OPTIONS},
    ClientConfig, HttpRecommendationService, RecommendationService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "nextstep")]
#[command(about = "nextstep.ai - Career Path Recommender", long_about = None, version)]
struct Cli {
    /// Origin of the recommendation service
    #[arg(long, global = true, default_value = DEFAULT_ORIGIN)]
    origin: String,
    /// Write diagnostic logs to this file. The interactive UI falls back to
    /// nextstep.log in the temp directory when stderr is a terminal.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive questionnaire (default)
    Tui,
    /// Answer the questionnaire from flags and print recommendations
    Ask {
        /// Your name
        #[arg(short, long)]
        name: String,
        /// An interest; repeat for several
        #[arg(short, long = "interest")]
        interests: Vec<String>,
        /// A strength; repeat for several
        #[arg(short, long = "strength")]
        strengths: Vec<String>,
        /// Print the raw recommendation list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available interests and strengths
    Options,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);
    let interactive = matches!(command, Commands::Tui);

    init_logging(cli.log_file.as_deref(), interactive)?;

    match command {
        Commands::Tui => {
            let service = build_service(&cli.origin)?;
            ui::run_tui(service)?;
        }
        Commands::Ask {
            name,
            interests,
            strengths,
            json,
        } => {
            let service = build_service(&cli.origin)?;
            let input = AskInput {
                name,
                interests,
                strengths,
            };
            let answer = run_ask(service, &input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&answer.recommendations)?);
            } else {
                print!(
                    "{}",
                    report::format_recommendations(&answer.name, &answer.recommendations)
                );
            }
        }
        Commands::Options => print_options(),
    }

    Ok(())
}

fn build_service(origin: &str) -> Result<Arc<dyn RecommendationService>> {
    let config = ClientConfig::new(origin)?;
    let service = HttpRecommendationService::new(&config)?;
    log::info!("[CLI] Using recommendation service at {}", service.endpoint());
    Ok(Arc::new(service))
}

fn print_options() {
    println!("Interests:");
    for option in INTEREST_OPTIONS {
        println!("  {:20} {}", option, display_label(option));
    }
    println!("\nStrengths:");
    for option in STRENGTH_OPTIONS {
        println!("  {:20} {}", option, display_label(option));
    }
}
