//! Plansmith CLI - lesson plan generator

use anyhow::Result;
use clap::Parser;
use plansmith_cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { ref args } => commands::generate::run(args),
        Commands::Status => commands::status::run(),
        Commands::Upgrade { ref tier } => commands::upgrade::run(tier),
        Commands::Templates => commands::templates::run(),
        Commands::Log { limit } => commands::log::run(limit),
        Commands::Init => commands::init::run(),
        Commands::Reset => commands::reset::run(),
    }
}
