//! Leptos UI components for the landing page.
//!
//! Each component is a stateless `#[component]` function; rendering the same
//! props twice yields the same markup. Class names always come from the
//! component's scoped style module in [`crate::styles`].
//!
//! # Component Hierarchy
//!
//! ```text
//! RootLayout
//! └── MainSection
//!     ├── TopBar
//!     │   └── Button × 3 (Search, Cart, Log in)
//!     └── hero
//!         └── Button × 2 (Get 50% Off, Explore Now)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered directly:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use ninzaco_landing::components::Button;
//!
//! let html = view! { <Button variant="offer" size="large">"Get 50% Off"</Button> }.to_html();
//! assert!(html.contains("Button_offer"));
//! ```

mod button;
mod main_section;
mod root_layout;
mod top_bar;

pub use button::{Button, button_class};
pub use main_section::MainSection;
pub use root_layout::RootLayout;
pub use top_bar::{MENU_LINKS, NavLink, TopBar};
