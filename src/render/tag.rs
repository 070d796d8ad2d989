//! render::tag
//!
//! The closed vocabulary of canonical component tags.
//!
//! Dispatch is polymorphic over this fixed set; anything outside it takes
//! the unknown-type path (diagnostic placeholder, children still rendered).
//! The set spans the categories the generation pipeline emits: layout
//! primitives, content, inputs, buttons, media, commerce widgets, and
//! navigation chrome.

use serde::Serialize;

/// Presentation category of a canonical tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Layout,
    Content,
    Input,
    Button,
    Media,
    Commerce,
    Navigation,
}

/// One entry in the canonical vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub category: Category,
}

const fn spec(name: &'static str, category: Category) -> TagSpec {
    TagSpec { name, category }
}

/// The fixed canonical vocabulary.
pub const VOCABULARY: &[TagSpec] = &[
    // Layout
    spec("Container", Category::Layout),
    spec("Card", Category::Layout),
    spec("Stack", Category::Layout),
    spec("Grid", Category::Layout),
    spec("Spacer", Category::Layout),
    spec("Form", Category::Layout),
    spec("FormSection", Category::Layout),
    spec("Div", Category::Layout),
    // Content
    spec("Header", Category::Content),
    spec("Footer", Category::Content),
    spec("Text", Category::Content),
    spec("Divider", Category::Content),
    spec("Badge", Category::Content),
    spec("Alert", Category::Content),
    spec("EmptyState", Category::Content),
    spec("ListItem", Category::Content),
    spec("StatCard", Category::Content),
    spec("ProgressBar", Category::Content),
    spec("Rating", Category::Content),
    // Input
    spec("TextInput", Category::Input),
    spec("PasswordInput", Category::Input),
    spec("IconInput", Category::Input),
    spec("SearchInput", Category::Input),
    spec("Checkbox", Category::Input),
    spec("Switch", Category::Input),
    spec("QuantityControl", Category::Input),
    // Buttons
    spec("Button", Category::Button),
    spec("GradientButton", Category::Button),
    spec("SocialButton", Category::Button),
    spec("IconButton", Category::Button),
    spec("FloatingActionButton", Category::Button),
    spec("LinkButton", Category::Button),
    spec("Link", Category::Button),
    // Media
    spec("Image", Category::Media),
    spec("Avatar", Category::Media),
    spec("Hero", Category::Media),
    spec("IllustrationHeader", Category::Media),
    spec("ImageGallery", Category::Media),
    spec("Video", Category::Media),
    // Commerce
    spec("ProductCard", Category::Commerce),
    spec("CartItem", Category::Commerce),
    spec("PriceBreakdown", Category::Commerce),
    // Navigation
    spec("AppBar", Category::Navigation),
    spec("TabBar", Category::Navigation),
    spec("NavBar", Category::Navigation),
];

/// Look up a canonical tag, case-insensitively.
pub fn lookup(tag: &str) -> Option<&'static TagSpec> {
    VOCABULARY
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::convert::canonicalize_tag;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("button").unwrap().name, "Button");
        assert_eq!(lookup("BUTTON").unwrap().name, "Button");
        assert!(lookup("BogusWidget").is_none());
    }

    #[test]
    fn vocabulary_has_no_duplicates() {
        for (i, a) in VOCABULARY.iter().enumerate() {
            for b in &VOCABULARY[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_vocabulary_tag_is_a_canonicalization_fixed_point() {
        // The alias table and the vocabulary must agree, or canonical
        // documents would drift on re-ingestion.
        for spec in VOCABULARY {
            assert_eq!(canonicalize_tag(spec.name), spec.name);
        }
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Commerce).unwrap();
        assert_eq!(json, "\"commerce\"");
    }
}
