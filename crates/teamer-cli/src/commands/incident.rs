//! Incident detail command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::io::Write;
use teamer_core::{Catalog, Incident, TeamerError};

use crate::output;

#[derive(Args)]
pub struct IncidentArgs {
    /// Incident identifier, as listed by `teamerhq status`
    pub id: String,
}

/// Resolve an identifier against the catalog.
pub fn lookup<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Incident, TeamerError> {
    catalog
        .incident(id)
        .ok_or_else(|| TeamerError::IncidentNotFound(id.to_string()))
}

pub fn execute(args: IncidentArgs, catalog: &Catalog) -> Result<()> {
    let stdout = std::io::stdout();
    run(&args, catalog, &mut stdout.lock())
}

/// Print the incident, or a not-found notice and an error for the exit code.
pub fn run(args: &IncidentArgs, catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    match lookup(catalog, &args.id) {
        Ok(incident) => {
            output::write_incident(out, incident)?;
            Ok(())
        }
        Err(e) => {
            tracing::debug!(incident_id = %args.id, "incident not in catalog");
            writeln!(out, "{}", "Incident Not Found".red().bold())?;
            writeln!(out, "{}", "Run `teamerhq status` to list incidents.".dimmed())?;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(id: &str) -> (Result<()>, String) {
        let args = IncidentArgs { id: id.to_string() };
        let mut buf = Vec::new();
        let result = run(&args, &Catalog::builtin(), &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(lookup(&catalog, "1").unwrap().id, "1");
        let err = lookup(&catalog, "7").unwrap_err();
        assert!(matches!(err, TeamerError::IncidentNotFound(ref id) if id == "7"));
    }

    #[test]
    fn test_known_incident_prints_detail() {
        let (result, text) = run_for("2");
        assert!(result.is_ok());
        assert!(text.contains("Scheduled Platform Maintenance"));
        assert!(text.contains("Resolved"));
        assert!(!text.contains("Incident Not Found"));
    }

    #[test]
    fn test_unknown_incident_fails() {
        let (result, text) = run_for("99");
        assert!(text.contains("Incident Not Found"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TeamerError>(),
            Some(TeamerError::IncidentNotFound(id)) if id == "99"
        ));
    }
}
