//! CSS for the landing page.
//!
//! Two layers make up the document stylesheet:
//!
//! - [`GLOBAL_CSS`] - reset, design tokens and typography, loaded once per document
//! - scoped style modules ([`BUTTON`], [`TOP_BAR`], [`MAIN_SECTION`]) - one per component
//!
//! A [`StyleModule`] maps a logical style key (`"ghost"`, `"container"`, ...) to a
//! class name of the form `<Module>_<key>`. Components only ever ask a module for
//! class names; they never spell them out.
//!
//! ```rust
//! use ninzaco_landing::styles::BUTTON;
//!
//! assert_eq!(BUTTON.class("ghost"), "Button_ghost");
//! assert_eq!(BUTTON.class("neon"), "");
//! ```

/// One class of a scoped style module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Logical key the component looks up
    pub key: &'static str,
    /// Scoped class name emitted into markup
    pub class: &'static str,
    /// Declarations for `.class { ... }`
    pub css: &'static str,
}

/// A component's scoped style module.
#[derive(Clone, Copy, Debug)]
pub struct StyleModule {
    /// Module name, used as the class prefix
    pub name: &'static str,
    /// Rules in emission order
    pub rules: &'static [StyleRule],
    /// Raw CSS appended after the rules (pseudo-classes, media queries)
    pub extra: &'static str,
}

impl StyleModule {
    /// Class name for `key`, or `""` when the module has no such key.
    pub fn class(&self, key: &str) -> &'static str {
        self.rules
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.class)
            .unwrap_or("")
    }

    /// Whether `key` is defined in this module.
    pub fn contains(&self, key: &str) -> bool {
        self.rules.iter().any(|rule| rule.key == key)
    }

    /// Generated CSS for every rule, followed by [`StyleModule::extra`].
    pub fn stylesheet(&self) -> String {
        let mut css = format!("/* {} */\n", self.name);
        for rule in self.rules {
            css.push_str(&format!(".{} {{ {} }}\n", rule.class, rule.css));
        }
        css.push_str(self.extra);
        css
    }
}

macro_rules! rule {
    ($module:literal, $key:literal, $css:literal) => {
        StyleRule {
            key: $key,
            class: concat!($module, "_", $key),
            css: $css,
        }
    };
}

/// Every scoped module, in the order they are emitted.
pub const MODULES: [StyleModule; 3] = [BUTTON, TOP_BAR, MAIN_SECTION];

/// Complete stylesheet for a document: global CSS, then each scoped module.
pub fn document_css() -> String {
    let mut css = String::from(GLOBAL_CSS);
    for module in MODULES {
        css.push('\n');
        css.push_str(&module.stylesheet());
    }
    css
}

/// Global reset, design tokens and base typography.
pub const GLOBAL_CSS: &str = r#"
:root {
    --color-bg: #ffffff;
    --color-surface: #f6f7fb;
    --color-text: #1b1d29;
    --color-muted: #6b6f80;
    --color-brand: #5b4cf0;
    --color-brand-dark: #4435d6;
    --color-offer: #ff6b3d;
    --color-border: #e3e5ee;
    --radius-sm: 6px;
    --radius-md: 10px;
    --radius-pill: 999px;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
}

body {
    font-family: var(--font-sans);
    background: var(--color-bg);
    color: var(--color-text);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

h1, h2, h3, p {
    margin: 0;
}
"#;

/// Button styles: base, one class per variant, one per size.
pub const BUTTON: StyleModule = StyleModule {
    name: "Button",
    rules: &[
        rule!("Button", "button", "display:inline-flex;align-items:center;justify-content:center;gap:8px;border:1px solid transparent;font-family:inherit;font-weight:600;cursor:pointer;transition:background .15s ease,color .15s ease,border-color .15s ease;"),
        rule!("Button", "primary", "background:var(--color-brand);color:#fff;border-radius:var(--radius-sm);"),
        rule!("Button", "secondary", "background:transparent;color:var(--color-text);border-color:var(--color-text);border-radius:var(--radius-sm);"),
        rule!("Button", "ghost", "background:transparent;color:var(--color-text);"),
        rule!("Button", "offer", "background:var(--color-offer);color:#fff;border-radius:var(--radius-pill);"),
        rule!("Button", "login", "background:var(--color-text);color:#fff;border-radius:var(--radius-pill);"),
        rule!("Button", "small", "padding:6px 12px;font-size:13px;"),
        rule!("Button", "medium", "padding:10px 20px;font-size:15px;"),
        rule!("Button", "large", "padding:14px 32px;font-size:17px;"),
    ],
    extra: r#".Button_button:disabled {opacity:.5;cursor:not-allowed;}
.Button_primary:hover {background:var(--color-brand-dark);}
.Button_ghost:hover {color:var(--color-brand);}
"#,
};

/// Navigation bar styles.
pub const TOP_BAR: StyleModule = StyleModule {
    name: "TopBar",
    rules: &[
        rule!("TopBar", "container", "display:flex;align-items:center;justify-content:space-between;max-width:var(--container-max);margin:0 auto;padding:24px 32px;"),
        rule!("TopBar", "logo", "font-size:24px;font-weight:800;letter-spacing:-0.02em;"),
        rule!("TopBar", "menu", "display:flex;gap:36px;"),
        rule!("TopBar", "link", "color:var(--color-muted);font-weight:500;"),
        rule!("TopBar", "actions", "display:flex;align-items:center;gap:12px;"),
    ],
    extra: r#".TopBar_link:hover {color:var(--color-text);}
@media (max-width: 768px) {
    .TopBar_menu {display:none;}
}
"#,
};

/// Hero section styles.
pub const MAIN_SECTION: StyleModule = StyleModule {
    name: "MainSection",
    rules: &[
        rule!("MainSection", "section", "background:var(--color-surface);min-height:100vh;"),
        rule!("MainSection", "heroContent", "display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center;max-width:var(--container-max);margin:0 auto;padding:64px 32px;"),
        rule!("MainSection", "leftColumn", "display:flex;flex-direction:column;gap:24px;"),
        rule!("MainSection", "title", "font-size:56px;line-height:1.1;font-weight:800;letter-spacing:-0.03em;"),
        rule!("MainSection", "highlight", "color:var(--color-brand);"),
        rule!("MainSection", "description", "font-size:18px;color:var(--color-muted);max-width:460px;"),
        rule!("MainSection", "heroActions", "display:flex;gap:16px;"),
        rule!("MainSection", "rightColumn", "display:flex;justify-content:center;"),
        rule!("MainSection", "imagePlaceholder", "display:flex;align-items:center;justify-content:center;width:100%;aspect-ratio:4/3;border-radius:var(--radius-md);background:var(--color-border);color:var(--color-muted);font-weight:600;"),
    ],
    extra: r#"@media (max-width: 960px) {
    .MainSection_heroContent {grid-template-columns:1fr;}
    .MainSection_title {font-size:40px;}
}
"#,
};
