//! Command-line interface for StudyGate
//!
//! Provides argument parsing and subcommand handling for the StudyGate binary.

use clap::{Parser, Subcommand};

/// LLM study-assistant gateway
#[derive(Parser)]
#[command(name = "studygate")]
#[command(version)]
#[command(about = "HTTP gateway that normalizes LLM study-assistant replies")]
#[command(
    long_about = "StudyGate forwards chat messages plus optional study material to a hosted \
    generative model and coerces the model's free-form reply into a fixed three-variant \
    JSON contract (test, document, chat)."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# StudyGate Configuration
# =======================

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 8000

[model]
# Upstream model identifier
name = "gemini-2.0-flash"

# API base URL; override to point at a proxy or a test double
# base_url = "https://generativelanguage.googleapis.com"

# API key. Prefer the GEMINI_API_KEY environment variable over committing
# a key to this file.
# api_key = ""

[observability]
# Default log level when RUST_LOG is not set (trace, debug, info, warn, error)
log_level = "info"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_default_config_path() {
        let cli = Cli::parse_from(["studygate"]);
        assert_eq!(cli.config, "config.toml");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_custom_config_path() {
        let cli = Cli::parse_from(["studygate", "--config", "/etc/studygate.toml"]);
        assert_eq!(cli.config, "/etc/studygate.toml");
    }

    #[test]
    fn test_cli_parses_config_subcommand() {
        let cli = Cli::parse_from(["studygate", "config", "--output", "out.toml"]);
        match cli.command {
            Some(Command::Config { output }) => assert_eq!(output.as_deref(), Some("out.toml")),
            _ => panic!("expected config subcommand"),
        }
    }

    #[test]
    fn test_config_template_is_valid_toml() {
        let parsed: crate::config::Config =
            toml::from_str(generate_config_template()).expect("template should parse");
        assert_eq!(parsed.model.name(), "gemini-2.0-flash");
        assert_eq!(parsed.server.port, 8000);
    }
}
