//! Render the landing page to a file.
//!
//! Run with: `cargo run --example render_page`

use ninzaco_landing::{config::SiteConfig, render_page};

fn main() {
    // Stock metadata and inline stylesheet
    let config = SiteConfig::default();

    let html = render_page(&config);

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
