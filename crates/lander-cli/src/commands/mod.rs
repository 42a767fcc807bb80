//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lander_core::config::{GeneratorConfig, API_URL_VAR, DEFAULT_API_URL, DEFAULT_MODEL, MODEL_VAR};
use lander_core::generator::gemini::GeminiClient;

pub mod generate;
pub mod schema;
pub mod serve;

/// Lander - landing page copy generation and editing
#[derive(Parser)]
#[command(name = "lander")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub generator: GeneratorArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Text-generation service settings shared by all commands.
#[derive(Args)]
pub struct GeneratorArgs {
    /// Model used for campaign generation
    #[arg(long, global = true, env = MODEL_VAR, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generation API
    #[arg(long, global = true, env = API_URL_VAR, default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl GeneratorArgs {
    /// Build a Gemini client. The API key is read from the environment per call.
    pub fn client(&self) -> Result<GeminiClient> {
        let config = GeneratorConfig::new(&self.api_url, &self.model)?;
        Ok(GeminiClient::new(config))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate campaign copy from a seed headline
    Generate(generate::GenerateArgs),

    /// Print the response schema sent to the model
    Schema,

    /// Start the editor API server
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => generate::execute(args, &self.generator).await,
            Commands::Schema => schema::execute(),
            Commands::Serve(args) => serve::execute(args, &self.generator).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "lander",
            "generate",
            "Sell Socks",
            "--json",
            "--model",
            "other-model",
        ])
        .unwrap();
        assert_eq!(cli.generator.model, "other-model");
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.headline.as_deref(), Some("Sell Socks"));
                assert!(args.json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["lander", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 3030);
                assert_eq!(args.host, "127.0.0.1");
                assert!(args.log_file.is_none());
            }
            _ => panic!("expected serve"),
        }
    }
}
