//! Data types shared by the landing page components.
//!
//! Everything here is plain configuration: built for one render pass and
//! dropped afterwards.
//!
//! # Example
//!
//! ```rust
//! use ninzaco_landing::types::{Attributes, ButtonSize, ButtonVariant};
//!
//! let variant = ButtonVariant::from("ghost");
//! assert_eq!(variant, ButtonVariant::Ghost);
//!
//! // Unknown keys are kept, never rejected
//! let size = ButtonSize::from("huge");
//! assert!(!size.is_recognized());
//!
//! let attrs = Attributes::new().with("type", "submit").flag("disabled");
//! assert_eq!(attrs.len(), 2);
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default document title.
pub const DEFAULT_TITLE: &str = "Ninzaco - Landing Page";

/// Default document description.
pub const DEFAULT_DESCRIPTION: &str = "Pixel-perfect implementation of Ninzaco design";

/// Visual style category of a [`Button`](crate::components::Button).
///
/// Built from a string key with `From<&str>`. A key outside the known set
/// becomes [`ButtonVariant::Unrecognized`], which resolves to no class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Filled brand color
    #[default]
    Primary,
    /// Outlined
    Secondary,
    /// Text only
    Ghost,
    /// Promotional pill
    Offer,
    /// Dark pill used for authentication
    Login,
    /// Any other key, carried verbatim
    Unrecognized(String),
}

impl ButtonVariant {
    /// The known variants, in declaration order.
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
        ButtonVariant::Offer,
        ButtonVariant::Login,
    ];

    /// Style key used for class lookup.
    pub fn key(&self) -> &str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Offer => "offer",
            ButtonVariant::Login => "login",
            ButtonVariant::Unrecognized(key) => key,
        }
    }

    /// False for [`ButtonVariant::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ButtonVariant::Unrecognized(_))
    }
}

impl From<&str> for ButtonVariant {
    fn from(key: &str) -> Self {
        match key {
            "primary" => ButtonVariant::Primary,
            "secondary" => ButtonVariant::Secondary,
            "ghost" => ButtonVariant::Ghost,
            "offer" => ButtonVariant::Offer,
            "login" => ButtonVariant::Login,
            other => ButtonVariant::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ButtonVariant {
    fn from(key: String) -> Self {
        ButtonVariant::from(key.as_str())
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Size of a [`Button`](crate::components::Button).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Any other key, carried verbatim
    Unrecognized(String),
}

impl ButtonSize {
    /// The known sizes, smallest first.
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Style key used for class lookup.
    pub fn key(&self) -> &str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
            ButtonSize::Unrecognized(key) => key,
        }
    }

    /// False for [`ButtonSize::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ButtonSize::Unrecognized(_))
    }
}

impl From<&str> for ButtonSize {
    fn from(key: &str) -> Self {
        match key {
            "small" => ButtonSize::Small,
            "medium" => ButtonSize::Medium,
            "large" => ButtonSize::Large,
            other => ButtonSize::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for ButtonSize {
    fn from(key: String) -> Self {
        ButtonSize::from(key.as_str())
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value of a passthrough attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="value"`
    Text(String),
    /// Boolean attribute such as `disabled`, rendered with an empty value
    Flag,
}

impl AttrValue {
    /// The string written into markup.
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(value) => value,
            AttrValue::Flag => "",
        }
    }
}

/// Ordered bag of element attributes forwarded verbatim onto a rendered element.
///
/// Names compare ASCII case-insensitively, as in HTML. Inserting a name that is
/// already present replaces its value and keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(Cow<'static, str>, AttrValue)>,
}

impl Attributes {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`] for a text value.
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.insert(name, AttrValue::Text(value.into()));
        self
    }

    /// Builder form of [`Attributes::insert`] for a boolean attribute.
    pub fn flag(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.insert(name, AttrValue::Flag);
        self
    }

    /// Set `name` to `value`.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: AttrValue) {
        let name = name.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_ref(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries except those named in `reserved`.
    pub(crate) fn without(
        &self,
        reserved: &'static [&'static str],
    ) -> impl Iterator<Item = &(Cow<'static, str>, AttrValue)> {
        self.entries
            .iter()
            .filter(move |(name, _)| !reserved.iter().any(|r| name.eq_ignore_ascii_case(r)))
    }
}

/// Document-level metadata surfaced in `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// How the document stylesheet is delivered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stylesheet {
    /// One `<style>` element with the full CSS
    #[default]
    Inline,
    /// One `<link rel="stylesheet">` pointing at this href
    Linked(String),
}
