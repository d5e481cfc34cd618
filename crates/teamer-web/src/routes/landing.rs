//! Landing page handler.

use askama::Template;
use axum::{http::StatusCode, response::Response};
use chrono::Datelike;

/// A call-to-action link in the hero section.
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub class: &'static str,
}

/// Hero links, in display order.
pub static NAV_LINKS: [NavLink; 2] = [
    NavLink {
        href: "/signup",
        label: "Get Started",
        class: "bg-blue-500 hover:bg-blue-600",
    },
    NavLink {
        href: "/status",
        label: "System Status",
        class: "bg-gray-800 hover:bg-gray-700",
    },
];

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub links: &'static [NavLink],
    pub year: i32,
}

impl LandingTemplate {
    pub fn new(year: i32) -> Self {
        Self {
            links: &NAV_LINKS,
            year,
        }
    }
}

/// GET / - Render the landing page.
pub async fn index() -> Response {
    let year = chrono::Utc::now().year();
    super::render(&LandingTemplate::new(year), StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_both_links() {
        let html = LandingTemplate::new(2024).render().unwrap();
        assert!(html.contains(r#"href="/signup""#));
        assert!(html.contains("Get Started"));
        assert!(html.contains(r#"href="/status""#));
        assert!(html.contains("System Status"));
        assert_eq!(html.matches("class=\"nav-link").count(), 2);
    }

    #[test]
    fn test_footer_year_and_meta() {
        let html = LandingTemplate::new(2031).render().unwrap();
        assert!(html.contains("2031 TeamerHQ. All rights reserved."));
        assert!(html.contains("<title>TeamerHQ - Team Communication Platform</title>"));
        assert!(html.contains("Enterprise-grade team communication and collaboration platform"));
    }
}
