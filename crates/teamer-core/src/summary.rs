//! Headline metrics for the status overview.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::{incident, service};

/// Figures shown in the banner and the three metric cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub headline: String,
    pub reported_uptime: f64,
    pub average_response_ms: u32,
    pub active_incidents: usize,
    pub response_trend: String,
    pub uptime_trend: String,
    pub incidents_note: String,
}

impl Summary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let page = &catalog.page;
        Self {
            headline: page.headline.clone(),
            reported_uptime: page.reported_uptime,
            average_response_ms: service::average_response_time(&catalog.services),
            active_incidents: incident::active_count(&catalog.incidents),
            response_trend: page.response_trend.clone(),
            uptime_trend: page.uptime_trend.clone(),
            incidents_note: page.incidents_note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageCopy;

    #[test]
    fn test_builtin_summary() {
        let summary = Summary::from_catalog(&Catalog::builtin());
        assert_eq!(summary.average_response_ms, 130);
        assert_eq!(summary.active_incidents, 1);
        assert_eq!(summary.reported_uptime, 99.95);
        assert_eq!(summary.headline, "All Systems Operational");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new(), Vec::new(), PageCopy::default());
        let summary = Summary::from_catalog(&catalog);
        assert_eq!(summary.average_response_ms, 0);
        assert_eq!(summary.active_incidents, 0);
    }
}
