//! Navigation bar: logo, menu links and account actions.

use leptos::prelude::*;

use super::Button;
use crate::styles::TOP_BAR;

/// A static menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Menu entries, left to right. Targets are placeholders.
pub const MENU_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "#" },
    NavLink { label: "Features", href: "#" },
    NavLink { label: "Pricing", href: "#" },
    NavLink { label: "Blog", href: "#" },
];

#[component]
pub fn TopBar() -> impl IntoView {
    let link_class = TOP_BAR.class("link");

    view! {
        <nav class=TOP_BAR.class("container")>
            <div class=TOP_BAR.class("logo")>
                <span>"Ninzaco"</span>
            </div>

            <div class=TOP_BAR.class("menu")>
                {MENU_LINKS
                    .iter()
                    .map(|link| view! { <a href=link.href class=link_class>{link.label}</a> })
                    .collect::<Vec<_>>()}
            </div>

            <div class=TOP_BAR.class("actions")>
                <Button variant="ghost">"Search"</Button>
                <Button variant="ghost">"Cart"</Button>
                <Button variant="login">"Log in"</Button>
            </div>
        </nav>
    }
}
