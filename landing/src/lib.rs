//! # ninzaco-landing
//!
//! Leptos SSR renderer for the Ninzaco landing page.
//!
//! The page is a small component tree rendered straight to a static HTML
//! string: no hydration, no client runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use ninzaco_landing::{render_page, config::SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("<title>Ninzaco - Landing Page</title>"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - `Button`, `TopBar`, `MainSection`, `RootLayout`
//! - [`styles`] - global CSS and per-component scoped style modules
//! - [`types`] - button style axes, passthrough attributes, page metadata
//! - [`config`] - `ninzaco.toml` loading
//! - [`output`] - writing the built site to disk
//!
//! ## Leptos 0.8 SSR
//!
//! Components render through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <TopBar /> }.to_html();
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod styles;
pub mod types;

use components::{MainSection, RootLayout};
use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::{LandingError, Result};
pub use output::{BuildReport, write_site};

/// Render the complete landing page document for `config`.
///
/// Returns the HTML including `<!DOCTYPE html>`. Metadata, language and
/// stylesheet delivery all come from `config`; nothing is read from global
/// state, so identical configs yield byte-identical output.
pub fn render_page(config: &SiteConfig) -> String {
    let metadata = config.metadata.clone();
    let lang = config.lang.clone();
    let stylesheet = config.stylesheet();

    tracing::debug!(title = %metadata.title, lang = %lang, ?stylesheet, "rendering page");

    let doc = view! {
        <RootLayout metadata=metadata lang=lang stylesheet=stylesheet>
            <MainSection />
        </RootLayout>
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// The document stylesheet: global CSS followed by every scoped module.
///
/// This is the content inlined into `<style>`, or written as the external
/// stylesheet file.
pub fn render_stylesheet() -> String {
    styles::document_css()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageMetadata;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_default_page() {
        let html = render_page(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Ninzaco - Landing Page</title>"));
        assert!(html.contains("Pixel-perfect implementation of Ninzaco design"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn page_nests_hero_in_body() {
        let html = render_page(&SiteConfig::default());
        let body = html.find("<body>").expect("body");
        let section = html.find(r#"<section class="MainSection_section">"#).expect("hero");
        let nav = html.find("<nav").expect("nav");
        assert!(body < section && section < nav);
        assert_eq!(html.matches("<button").count(), 5);
    }

    #[test]
    fn metadata_flows_from_config() {
        let config = SiteConfig {
            metadata: PageMetadata {
                title: "Custom".into(),
                description: "Custom description".into(),
            },
            ..Default::default()
        };
        let html = render_page(&config);
        assert!(html.contains("<title>Custom</title>"));
        assert!(!html.contains("Ninzaco - Landing Page"));
    }

    #[test]
    fn rendering_is_byte_identical() {
        let config = SiteConfig::default();
        assert_eq!(render_page(&config), render_page(&config));
    }
}
