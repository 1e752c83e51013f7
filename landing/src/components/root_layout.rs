//! Root document component - the complete HTML page shell.

use leptos::prelude::*;

use crate::styles::document_css;
use crate::types::{PageMetadata, Stylesheet};

/// `<html>` shell with metadata and the document stylesheet around `children`.
///
/// The stylesheet appears exactly once: inline as `<style>` or as a single
/// `<link>` when [`Stylesheet::Linked`].
#[component]
pub fn RootLayout(
    /// Title and description for `<head>`
    #[prop(optional)]
    metadata: PageMetadata,
    /// `<html lang>` value
    #[prop(into, default = "en".to_string())]
    lang: String,
    #[prop(optional)] stylesheet: Stylesheet,
    children: Children,
) -> impl IntoView {
    let PageMetadata { title, description } = metadata;

    let styles = match stylesheet {
        Stylesheet::Inline => view! { <style>{document_css()}</style> }.into_any(),
        Stylesheet::Linked(href) => view! { <link rel="stylesheet" href=href /> }.into_any(),
    };

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {styles}
            </head>
            <body>
                {children()}
            </body>
        </html>
    }
}
