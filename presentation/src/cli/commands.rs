//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for gemchat
#[derive(Parser, Debug)]
#[command(name = "gemchat")]
#[command(author, version, about = "Terminal chat with Google Gemini")]
#[command(long_about = r#"
gemchat opens a full-screen terminal chat with a Gemini model. Type your
question, press Enter, and the reply is appended to the conversation; the
sidebar tracks how many messages you've sent and for how long.

The API key is read from the GEMINI_API_KEY (or GOOGLE_API_KEY)
environment variable.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gemchat.toml      Project-level config
3. ~/.config/gemchat/config.toml   Global config

Example:
  gemchat
  gemchat --model gemini-1.5-pro
  gemchat -vv --config ./dev.toml
"#)]
pub struct Cli {
    /// Model to chat with (e.g. gemini-1.5-flash)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
