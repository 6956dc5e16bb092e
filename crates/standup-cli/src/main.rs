use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "standup", version, about = "Research-group standup reports")]
struct Cli {
    /// Override the submissions file location
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit today's progress and question
    Submit {
        /// Your name
        #[arg(long)]
        user: String,
        /// What you worked on
        #[arg(long)]
        progress: String,
        /// The question you want discussed
        #[arg(long)]
        question: String,
    },
    /// Randomly pick one recent report to discuss (moderator)
    Pick {
        /// Window length in days (default from config)
        #[arg(long)]
        days: Option<u32>,
        /// Seed for reproducible picks
        #[arg(long)]
        seed: Option<u64>,
        /// Moderator password
        #[arg(long)]
        password: Option<String>,
    },
    /// Browse all reports in the window (moderator)
    History {
        /// Window length in days (default from config)
        #[arg(long)]
        days: Option<u32>,
        /// Moderator password
        #[arg(long)]
        password: Option<String>,
    },
    /// One-time import of legacy per-day flat-text files (moderator)
    Import {
        /// Directory of MMDD.md day files
        #[arg(long)]
        dir: PathBuf,
        /// Year the day files belong to (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Moderator password
        #[arg(long)]
        password: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Submit {
            user,
            progress,
            question,
        } => commands::submit::run(cli.data_file, &user, &progress, &question),
        Commands::Pick {
            days,
            seed,
            password,
        } => commands::pick::run(cli.data_file, days, seed, password.as_deref()),
        Commands::History { days, password } => {
            commands::history::run(cli.data_file, days, password.as_deref())
        }
        Commands::Import {
            dir,
            year,
            password,
        } => commands::import::run(cli.data_file, &dir, year, password.as_deref()),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
