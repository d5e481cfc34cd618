//! Terminal output formatting.
//!
//! Every printer writes into an `io::Write` so commands can target stdout
//! and tests can target a buffer.

use colored::{ColoredString, Colorize};
use std::io::Write;
use teamer_core::{
    format, service, Catalog, Incident, IncidentStatus, ServiceStatus, Summary, TeamerResult,
};
use unicode_width::UnicodeWidthStr;

const SERVICE_COL: usize = 20;
const SERVICE_STATUS_COL: usize = 12;
const INCIDENT_TITLE_COL: usize = 44;
const INCIDENT_STATUS_COL: usize = 14;

/// Write the headline, the service table and the incident list.
pub fn write_status(out: &mut impl Write, catalog: &Catalog) -> TeamerResult<()> {
    let summary = Summary::from_catalog(catalog);

    writeln!(out, "{}", summary.headline.bold())?;
    writeln!(
        out,
        "{} {}   {} {}   {} {}",
        "Uptime".dimmed(),
        format::percent(summary.reported_uptime),
        "Avg response".dimmed(),
        format::millis(summary.average_response_ms),
        "Active incidents".dimmed(),
        summary.active_incidents
    )?;
    writeln!(out)?;

    write_services_table(out, catalog)?;
    writeln!(out)?;
    write_incidents_table(out, &catalog.incidents)
}

/// Write services as a table, then an attention line naming any that are
/// not operational.
pub fn write_services_table(out: &mut impl Write, catalog: &Catalog) -> TeamerResult<()> {
    if catalog.services.is_empty() {
        writeln!(out, "{}", "No services configured.".dimmed())?;
        return Ok(());
    }

    writeln!(
        out,
        "{} {} {:>10} {:>8}",
        cell("Service", SERVICE_COL),
        cell("Status", SERVICE_STATUS_COL),
        "Response",
        "Uptime"
    )?;
    writeln!(out, "{}", "─".repeat(53))?;

    for svc in &catalog.services {
        writeln!(
            out,
            "{} {} {:>10} {:>8}",
            cell(&svc.name, SERVICE_COL),
            service_status_colored(svc.status),
            format::millis(svc.response_time_ms),
            format::percent(svc.uptime)
        )?;
    }

    let unhealthy: Vec<&str> = service::unhealthy(&catalog.services)
        .map(|s| s.name.as_str())
        .collect();
    if !unhealthy.is_empty() {
        writeln!(out)?;
        writeln!(out, "{} {}", "Attention:".yellow().bold(), unhealthy.join(", "))?;
    }
    Ok(())
}

/// Write incident summaries, each followed by its latest update.
pub fn write_incidents_table(out: &mut impl Write, incidents: &[Incident]) -> TeamerResult<()> {
    if incidents.is_empty() {
        writeln!(out, "{}", "No incidents reported.".dimmed())?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<4} {} {} {:<10}",
        "ID",
        cell("Title", INCIDENT_TITLE_COL),
        cell("Status", INCIDENT_STATUS_COL),
        "Date"
    )?;
    writeln!(out, "{}", "─".repeat(75))?;

    for incident in incidents {
        writeln!(
            out,
            "{:<4} {} {} {:<10}",
            incident.id,
            cell(&incident.title, INCIDENT_TITLE_COL),
            incident_status_colored(incident.status, INCIDENT_STATUS_COL),
            incident.date
        )?;
        if let Some(update) = incident.latest_update() {
            writeln!(out, "     {} {}", update.time.dimmed(), update.message)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} incident(s) total", incidents.len())?;
    Ok(())
}

/// Write a single incident with its full timeline.
pub fn write_incident(out: &mut impl Write, incident: &Incident) -> TeamerResult<()> {
    writeln!(
        out,
        "{} {}",
        incident.title.cyan().bold(),
        format!("(#{})", incident.id).dimmed()
    )?;
    writeln!(out)?;
    writeln!(out, "{}", incident.description)?;
    writeln!(out)?;
    writeln!(out, "{}: {}", "Status".bold(), incident_status_colored(incident.status, 0))?;
    writeln!(out, "{}: {}", "Affected Services".bold(), incident.affected_services_line())?;
    writeln!(out, "{}: {}", "Impact Level".bold(), incident.impact.label())?;
    writeln!(out, "{}: {}", "Started".bold(), incident.date)?;
    writeln!(out, "{}: {}", "Resolution".bold(), incident.resolution)?;

    if !incident.updates.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Incident Timeline".bold())?;
        for update in &incident.updates {
            writeln!(out, "  {}  {}", update.time.dimmed(), update.message)?;
        }
    }
    Ok(())
}

fn service_status_colored(status: ServiceStatus) -> ColoredString {
    let label = cell(status.as_str(), SERVICE_STATUS_COL);
    match status {
        ServiceStatus::Operational => label.green(),
        ServiceStatus::Degraded => label.yellow(),
        ServiceStatus::Outage => label.red().bold(),
    }
}

fn incident_status_colored(status: IncidentStatus, width: usize) -> ColoredString {
    let label = cell(&status.label(), width);
    match status {
        IncidentStatus::Investigating => label.red(),
        IncidentStatus::Identified => label.yellow(),
        IncidentStatus::Monitoring => label.blue(),
        IncidentStatus::Resolved => label.green(),
    }
}

/// Fit text into a table column of `width` terminal cells.
///
/// Long service names and incident titles are cut with a `..` marker,
/// short ones are space-padded so the next column lines up. Width is
/// measured in display cells, so wide glyphs count double. A `width` of 0
/// leaves the text as is.
fn cell(s: &str, width: usize) -> String {
    if width == 0 {
        return s.to_string();
    }
    let fitted = fit_width(s, width);
    let visual = UnicodeWidthStr::width(fitted.as_str());
    format!("{}{}", fitted, " ".repeat(width.saturating_sub(visual)))
}

/// Cut `s` to at most `width` cells, ending in `..` when anything was dropped.
fn fit_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let budget = width - 2;
    let mut fitted = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        fitted.push(ch);
        used += w;
    }
    fitted.push_str("..");
    fitted
}
