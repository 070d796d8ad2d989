//! model::theme
//!
//! Fallback palettes, default tokens, and a borrowing theme view.
//!
//! A document's `theme` and `tokens` maps are open property bags; this
//! module provides the fixed fallback values the normalizer fills in when
//! they are missing, and [`Theme`], a cheap read view the render dispatcher
//! uses for its two sanctioned theme injections (Header text color, primary
//! Button background).

use serde_json::{json, Value};

use crate::model::document::Props;

/// Palette chosen when the caller does not configure one.
pub const DEFAULT_PALETTE: &str = "teal";

/// Fixed contrasting foreground paired with the primary color.
pub const PRIMARY_FOREGROUND: &str = "#FFFFFF";

/// Named fallback palettes: (name, primary, background, surface, text).
const PALETTES: &[(&str, &str, &str, &str, &str)] = &[
    ("teal", "#0D9488", "#F7FAFC", "#FFFFFF", "#0F172A"),
    ("blue", "#2563EB", "#F8FAFF", "#FFFFFF", "#0B1220"),
    ("green", "#16A34A", "#F6FEF8", "#FFFFFF", "#06270F"),
    ("purple", "#7C3AED", "#FBF7FF", "#FFFFFF", "#1C0B3A"),
    ("gray", "#111827", "#F9FAFB", "#FFFFFF", "#111827"),
];

/// Names of all known palettes, for validation and help output.
pub fn palette_names() -> Vec<&'static str> {
    PALETTES.iter().map(|(name, ..)| *name).collect()
}

/// Theme props for a named palette, or `None` if the name is unknown.
pub fn palette_props(name: &str) -> Option<Props> {
    let (_, primary, background, surface, text) = PALETTES
        .iter()
        .find(|(candidate, ..)| candidate.eq_ignore_ascii_case(name))?;
    let mut props = Props::new();
    props.insert("primary".into(), json!(primary));
    props.insert("background".into(), json!(background));
    props.insert("surface".into(), json!(surface));
    props.insert("text".into(), json!(text));
    Some(props)
}

/// The default fallback theme (teal palette).
pub fn default_theme() -> Props {
    palette_props(DEFAULT_PALETTE).unwrap_or_default()
}

/// The default spacing/radius tokens.
pub fn default_tokens() -> Props {
    let mut props = Props::new();
    props.insert("gap".into(), json!(16));
    props.insert("padding".into(), json!(20));
    props.insert("cardRadius".into(), json!(12));
    props.insert("cardShadow".into(), json!("sm"));
    props
}

/// A borrowing read view over a document's theme props.
///
/// Accessors fall back to the default palette so dispatch never has to
/// handle a partially populated theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme<'a> {
    props: &'a Props,
}

impl<'a> Theme<'a> {
    pub fn new(props: &'a Props) -> Self {
        Self { props }
    }

    fn color(&self, key: &str, fallback: &'static str) -> &'a str {
        self.props
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
    }

    /// Primary accent color.
    pub fn primary(&self) -> &'a str {
        self.color("primary", "#0D9488")
    }

    /// Page background color.
    pub fn background(&self) -> &'a str {
        self.color("background", "#F7FAFC")
    }

    /// Card/surface color.
    pub fn surface(&self) -> &'a str {
        self.color("surface", "#FFFFFF")
    }

    /// Body text color.
    pub fn text(&self) -> &'a str {
        self.color("text", "#0F172A")
    }
}
