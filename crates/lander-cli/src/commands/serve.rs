//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use super::GeneratorArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, generator: &GeneratorArgs) -> Result<()> {
    let client = generator.client()?;
    let model = client.model().to_string();

    println!();
    println!("  {} {}", "Lander".cyan().bold(), "Editor API".bold());
    println!();
    println!("  {}        http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}  ws://{}:{}/ws", "WebSocket".green(), args.host, args.port);
    println!("  {}      {}", "Model".green(), model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    lander_web::run_server(Arc::new(client), &args.host, args.port).await?;

    Ok(())
}
