//! One-shot campaign generation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use lander_core::content::model::ContentPatch;
use lander_core::session::flow::{self, GenerationOutcome};
use lander_core::session::Session;
use std::path::PathBuf;
use tracing::{info, warn};

use super::GeneratorArgs;
use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Seed headline (defaults to the built-in headline)
    pub headline: Option<String>,

    /// Print the resulting content as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the resulting content JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs, generator: &GeneratorArgs) -> Result<()> {
    let client = generator.client()?;

    let mut session = Session::new();
    if let Some(headline) = args.headline {
        session.update_content(ContentPatch::headline(headline));
    }
    let session = session.into_shared();

    if !args.json {
        let seed = session.read().await.content().headline.clone();
        println!("{} Generating from: {} ({})", "→".dimmed(), seed.bold(), client.model());
    }

    let outcome = flow::run_generation(&session, &client).await?;
    if outcome == GenerationOutcome::Failed {
        warn!(model = client.model(), "Generation failed, keeping current content");
    }
    let content = session.read().await.content().clone();

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&content)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Content written");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    match outcome {
        GenerationOutcome::Applied => {
            println!("{} Campaign generated\n", "✓".green().bold());
        }
        GenerationOutcome::Failed => {
            println!(
                "{} Generation failed, content unchanged (see log for details)\n",
                "!".yellow()
            );
        }
    }
    output::print_content(&content);

    if let Some(path) = &args.output {
        println!("\n{} Written: {}", "✓".green().bold(), path.display());
    }
    Ok(())
}
