//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use teamer_core::Catalog;

pub mod incident;
pub mod serve;
pub mod status;

/// TeamerHQ - landing page and status dashboard
#[derive(Parser)]
#[command(name = "teamerhq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Print service health and recent incidents
    Status,

    /// Show a single incident
    Incident(incident::IncidentArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let catalog = Catalog::builtin();

        match self.command {
            Commands::Serve(args) => serve::execute(args, catalog).await,
            Commands::Status => status::execute(&catalog),
            Commands::Incident(args) => incident::execute(args, &catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from(["teamerhq", "serve", "--host", "0.0.0.0", "--port", "4040", "--log"])
            .unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "0.0.0.0");
                assert_eq!(args.port, 4040);
                assert!(args.log);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_incident_id() {
        let cli = Cli::try_parse_from(["teamerhq", "-v", "incident", "2"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Incident(args) => assert_eq!(args.id, "2"),
            _ => panic!("expected incident"),
        }
    }

    #[test]
    fn test_status_takes_no_args() {
        let cli = Cli::try_parse_from(["teamerhq", "status"]).unwrap();
        assert!(matches!(cli.command, Commands::Status));
        assert!(Cli::try_parse_from(["teamerhq", "status", "extra"]).is_err());
    }

    #[test]
    fn test_incident_requires_id() {
        assert!(Cli::try_parse_from(["teamerhq", "incident"]).is_err());
    }
}
