//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use teamer_core::Catalog;
use teamer_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "TEAMER_PORT", default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "TEAMER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long, env = "TEAMER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    /// Where file logs go, if file logging is on.
    pub fn log_path(&self) -> Option<PathBuf> {
        match (&self.log_file, self.log) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from("logs/teamerhq.log")),
            (None, false) => None,
        }
    }
}

pub async fn execute(args: ServeArgs, catalog: Catalog) -> Result<()> {
    let config = args.config();
    let url = config.url();

    println!();
    println!("  {} {}", "TeamerHQ".cyan().bold(), "Status Site".bold());
    println!();
    println!("  {}    {}", "Landing".green(), url);
    println!("  {}     {}/status", "Status".green(), url);
    println!("  {}        {}/api/status", "API".green(), url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    tracing::info!(
        host = %config.host,
        port = config.port,
        services = catalog.services.len(),
        incidents = catalog.incidents.len(),
        "starting web server"
    );
    teamer_web::run_server(catalog, &config).await?;

    Ok(())
}
