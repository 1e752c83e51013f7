//! Styled button - the leaf of the page.

use leptos::attr::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::custom_attribute;

use crate::styles::BUTTON;
use crate::types::{Attributes, ButtonSize, ButtonVariant};

/// Attribute names the button computes itself and never takes from the bag.
const COMPUTED_ATTRIBUTES: &[&str] = &["class"];

/// Class string for a button: base, variant, size and caller class, in that order.
///
/// Empty fragments are skipped, so the result never has stray whitespace.
/// An unrecognized variant or size contributes nothing.
///
/// ```rust
/// use ninzaco_landing::components::button_class;
/// use ninzaco_landing::types::{ButtonSize, ButtonVariant};
///
/// assert_eq!(
///     button_class(&ButtonVariant::Ghost, &ButtonSize::Small, "wide"),
///     "Button_button Button_ghost Button_small wide",
/// );
/// assert_eq!(
///     button_class(&"neon".into(), &ButtonSize::Medium, ""),
///     "Button_button Button_medium",
/// );
/// ```
pub fn button_class(variant: &ButtonVariant, size: &ButtonSize, extra: &str) -> String {
    let variant_class = if variant.is_recognized() {
        BUTTON.class(variant.key())
    } else {
        ""
    };
    let size_class = if size.is_recognized() {
        BUTTON.class(size.key())
    } else {
        ""
    };

    [BUTTON.class("button"), variant_class, size_class, extra.trim()]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A `<button>` styled by variant and size.
///
/// Everything in `attrs` is forwarded verbatim in insertion order, except
/// `class`, which is always the computed value. Add caller classes through
/// `class_name` instead.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant="login" attrs=Attributes::new().with("type", "submit")>
///         "Log in"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Visual variant (default: primary)
    #[prop(into, optional)]
    variant: ButtonVariant,
    /// Size (default: medium)
    #[prop(into, optional)]
    size: ButtonSize,
    /// Extra class names appended after the computed ones
    #[prop(into, optional)]
    class_name: String,
    /// Passthrough element attributes
    #[prop(optional)]
    attrs: Attributes,
    children: Children,
) -> impl IntoView {
    let class = button_class(&variant, &size, &class_name);

    if attrs.contains("class") {
        tracing::warn!(
            class = %class,
            "ignoring `class` in button attributes; use class_name for extra classes"
        );
    }
    if !variant.is_recognized() || !size.is_recognized() {
        tracing::debug!(%variant, %size, "unrecognized button style key");
    }

    let forwarded = attrs
        .without(COMPUTED_ATTRIBUTES)
        .map(|(name, value)| {
            custom_attribute(name.clone(), value.as_str().to_string()).into_any_attr()
        })
        .collect::<Vec<AnyAttribute>>();

    view! {
        <button class={class} {..forwarded}>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn class_attr(html: &str) -> &str {
        let start = html.find("class=\"").map(|i| i + 7).unwrap_or(0);
        let end = html[start..].find('"').map(|i| start + i).unwrap_or(start);
        &html[start..end]
    }

    #[test]
    fn every_variant_and_size_resolves() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let class = button_class(&variant, &size, "");
                let expected = format!("Button_button Button_{} Button_{}", variant.key(), size.key());
                assert_eq!(class, expected);
            }
        }
    }

    #[test]
    fn extra_class_goes_last_and_is_trimmed() {
        let class = button_class(&ButtonVariant::Offer, &ButtonSize::Large, "  hero-cta  ");
        assert_eq!(class, "Button_button Button_offer Button_large hero-cta");
    }

    #[test]
    fn unrecognized_axis_contributes_nothing() {
        let class = button_class(&"neon".into(), &"huge".into(), "");
        assert_eq!(class, "Button_button");

        // A size key passed as a variant is still not a variant
        let class = button_class(&"large".into(), &ButtonSize::Small, "");
        assert_eq!(class, "Button_button Button_small");
    }

    #[test]
    fn renders_default_button() {
        let html = view! { <Button>"Go"</Button> }.to_html();
        assert!(html.starts_with("<button"));
        assert_eq!(class_attr(&html), "Button_button Button_primary Button_medium");
        assert!(html.contains(">Go</button>"));
    }

    #[test]
    fn renders_string_keys() {
        let html = view! { <Button variant="secondary" size="large">"Explore"</Button> }.to_html();
        assert_eq!(class_attr(&html), "Button_button Button_secondary Button_large");
    }

    #[test]
    fn forwards_attributes_verbatim() {
        let attrs = Attributes::new()
            .with("type", "submit")
            .flag("disabled")
            .with("onclick", "openCart()")
            .with("data-testid", "cart");

        let html = view! { <Button variant="ghost" attrs=attrs>"Cart"</Button> }.to_html();

        assert!(html.contains(r#"type="submit""#));
        assert!(html.contains(r#"disabled="""#));
        assert!(html.contains(r#"onclick="openCart()""#));
        assert!(html.contains(r#"data-testid="cart""#));
        assert_eq!(html.matches("class=").count(), 1);
    }

    #[test]
    fn attribute_values_are_escaped_not_altered() {
        let attrs = Attributes::new().with("onclick", r#"track("cta") && open<1"#);
        let html = view! { <Button variant="offer" attrs=attrs>"Go"</Button> }.to_html();

        assert!(html.contains(r#"onclick="track(&quot;cta&quot;) &amp;&amp; open&lt;1""#));
        assert_eq!(class_attr(&html), "Button_button Button_offer Button_medium");
    }

    #[test]
    fn computed_class_wins_over_bag() {
        let attrs = Attributes::new().with("class", "rogue").with("id", "login");
        let html = view! { <Button variant="login" attrs=attrs>"Log in"</Button> }.to_html();

        assert!(!html.contains("rogue"));
        assert!(html.contains(r#"id="login""#));
        assert_eq!(class_attr(&html), "Button_button Button_login Button_medium");
    }

    #[test]
    fn unknown_variant_renders_without_fragment() {
        let html = view! { <Button variant="neon" size="huge">"Odd"</Button> }.to_html();
        assert_eq!(class_attr(&html), "Button_button");
        assert!(html.contains(">Odd</button>"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let render = || {
            view! {
                <Button variant="offer" size="large" class_name="cta" attrs=Attributes::new().flag("disabled")>
                    "Get 50% Off"
                </Button>
            }
            .to_html()
        };
        assert_eq!(render(), render());
    }
}
