//! Plansmith CLI library — exposed for integration tests

pub mod client;
pub mod commands;
pub mod config;
pub mod event_log;
pub mod paths;
pub mod progress;
pub mod templates;

use clap::{Parser, Subcommand};

pub use config::PlansmithConfig;

#[derive(Parser)]
#[command(name = "plansmith")]
#[command(about = "Trauma-informed lesson plans, generated from your classroom context", long_about = None)]
#[command(version = plansmith_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a lesson plan
    Generate {
        #[command(flatten)]
        args: commands::generate::GenerateArgs,
    },

    /// Show subscription tier and remaining quota
    Status,

    /// Switch subscription tier: free, individual, or premium
    Upgrade {
        /// Target tier
        tier: String,
    },

    /// List the available lesson templates
    Templates,

    /// Show recent generation events
    Log {
        /// Maximum entries to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Write a default config.toml
    Init,

    /// Clear all usage data and start over at the free tier (diagnostics)
    Reset,
}
