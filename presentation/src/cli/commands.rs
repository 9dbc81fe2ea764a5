//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for commons-council
#[derive(Parser, Debug)]
#[command(name = "commons-council")]
#[command(author, version, about = "Specialist council - routes messages to participant personas")]
#[command(long_about = r#"
Commons Council routes a message to the best-suited specialist participant
(economist, activist, historian, policy analyst, legal strategist, educator,
currency specialist) and asks an OpenAI-compatible completion provider to
answer in that participant's voice. When the provider is unavailable the
participant answers from its fallback catalog instead.

Configuration files are loaded from (in priority order):
1. COMMONS_* environment variables (e.g. COMMONS_PROVIDER__MODEL)
2. --config <path>     Explicit config file
3. ./commons.toml      Project-level config
4. ~/.config/commons-council/config.toml   Global config

The provider API key may also be given as DEEPSEEK_API_KEY.

Example:
  commons-council serve --bind 0.0.0.0:3000
  commons-council ask "What policy changes would help with this legislation?"
  commons-council ask --topic monetary-reform --follow-up "How do banks create money?"
  commons-council select "Tell me about the history of cooperatives"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Seed the random source (reproducible fallbacks and follow-ups)
    #[arg(long, value_name = "SEED", global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Ask the council a single question
    Ask {
        /// The message to route and answer
        message: String,

        /// Discussion topic id (e.g. monetary-reform)
        #[arg(short, long, value_name = "TOPIC")]
        topic: Option<String>,

        /// Answer as this participant instead of selecting one
        #[arg(short, long, value_name = "ID")]
        participant: Option<String>,

        /// Add a follow-up from a different participant
        #[arg(long)]
        follow_up: bool,

        /// Print JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show how a message would be routed, without calling the provider
    Select {
        /// The message to score
        message: String,

        /// Discussion topic id
        #[arg(short, long, value_name = "TOPIC")]
        topic: Option<String>,
    },

    /// List the council participants
    Participants,
}
