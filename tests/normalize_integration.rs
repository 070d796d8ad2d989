//! End-to-end ingest pipeline tests: raw generated payloads through
//! extraction, shape normalization, conversion, and dispatch.

use serde_json::json;

use weftwork::ingest::extract::extract_json;
use weftwork::ingest::shape::{Geometry, Normalizer};
use weftwork::model::theme::Theme;
use weftwork::render::dispatch;

fn normalizer() -> Normalizer {
    Normalizer::new().with_geometry(Geometry::Skip)
}

#[test]
fn login_screen_end_to_end() {
    let raw = json!({
        "screens": [{
            "name": "Login",
            "components": [{
                "type": "Form",
                "props": {
                    "fields": [{ "type": "TextInput", "props": { "label": "Email" } }],
                    "buttons": [{ "type": "Button", "props": { "text": "Sign In" } }]
                }
            }]
        }]
    });

    let doc = normalizer().normalize(&raw).unwrap();

    assert_eq!(doc.pages.len(), 1);
    assert_eq!(doc.pages[0].name, "Login");
    assert_eq!(doc.pages[0].sections.len(), 1);

    let components = &doc.pages[0].sections[0].components;
    assert_eq!(components.len(), 1);
    let form = &components[0];
    assert_eq!(form.tag, "Form");

    assert_eq!(form.children.len(), 2);
    assert_eq!(form.children[0].tag, "TextInput");
    assert_eq!(form.children[0].props["label"], json!("Email"));
    assert_eq!(form.children[1].tag, "Button");
    assert_eq!(form.children[1].props["text"], json!("Sign In"));

    assert!(!form.props.contains_key("fields"));
    assert!(!form.props.contains_key("buttons"));
}

#[test]
fn screens_and_pages_inputs_converge() {
    let component = json!({
        "type": "form",
        "props": {
            "fields": [{ "type": "password" }],
            "buttons": [{ "type": "cta", "props": { "text": "Go" } }]
        }
    });

    let from_screens = normalizer()
        .normalize(&json!({ "screens": [{ "name": "A", "components": [component] }] }))
        .unwrap();
    let from_pages = normalizer()
        .normalize(&json!({
            "pages": [{ "name": "A", "sections": [{ "components": [component] }] }]
        }))
        .unwrap();

    assert_eq!(
        from_screens.pages[0].sections[0].components,
        from_pages.pages[0].sections[0].components
    );
}

#[test]
fn password_field_hoists_with_secure_prop() {
    let raw = json!({
        "pages": [{
            "sections": [{
                "components": [{
                    "type": "Form",
                    "props": {
                        "fields": [{ "type": "password" }],
                        "buttons": [{ "type": "Button" }]
                    }
                }]
            }]
        }]
    });

    let doc = normalizer().normalize(&raw).unwrap();
    let form = &doc.pages[0].sections[0].components[0];
    assert_eq!(form.children[0].tag, "PasswordInput");
    assert_eq!(form.children[0].props["secure"], json!(true));
    assert_eq!(form.children[1].tag, "Button");
}

#[test]
fn normalization_is_idempotent_end_to_end() {
    let raw = json!({
        "layout": {
            "screens": [{
                "name": "Shop",
                "components": [
                    { "type": "searchinput" },
                    {
                        "type": "grid",
                        "props": { "items": [{ "type": "productcard" }, { "type": "productcard" }] }
                    },
                    { "type": "SomethingNovel", "props": { "weird": [1, 2] } }
                ]
            }]
        },
        "tokens": { "gap": 24 }
    });

    let once = Normalizer::new()
        .with_geometry(Geometry::Seeded(3))
        .normalize(&raw)
        .unwrap();
    let twice = Normalizer::new()
        .with_geometry(Geometry::Seeded(3))
        .normalize(&serde_json::to_value(&once).unwrap())
        .unwrap();
    assert_eq!(once, twice);

    // Spot-check conversion landed: grid items became children, unknown
    // tag survived verbatim, provided token overrode the default.
    assert_eq!(once.pages[0].sections[0].components[1].children.len(), 2);
    assert_eq!(once.pages[0].sections[0].components[2].tag, "SomethingNovel");
    assert_eq!(once.tokens["gap"], json!(24));
}

#[test]
fn geometry_enrichment_fills_every_component() {
    let raw = json!({
        "screens": [{
            "components": [
                { "type": "Card", "children": [{ "type": "Text" }] },
                { "type": "Image", "props": { "width": "full" } }
            ]
        }]
    });

    let doc = Normalizer::new()
        .with_geometry(Geometry::Seeded(11))
        .normalize(&raw)
        .unwrap();

    let card = &doc.pages[0].sections[0].components[0];
    let image = &doc.pages[0].sections[0].components[1];
    for node in [card, &card.children[0], image] {
        let x = node.props["x"].as_i64().unwrap();
        assert!((24..=64).contains(&x), "x out of jitter band: {x}");
        assert!(node.props["width"].is_number());
        assert!(node.props["height"].is_number());
    }
    // Non-numeric width was replaced by the fixed default.
    assert_eq!(image.props["width"], json!(300));
}

#[test]
fn unknown_component_types_render_without_failing() {
    let raw = json!({
        "screens": [{
            "components": [{
                "type": "BogusWidget",
                "children": [{ "type": "Text", "props": { "text": "still here" } }]
            }]
        }]
    });

    let doc = normalizer().normalize(&raw).unwrap();
    let theme = Theme::new(&doc.theme);
    let rendered = dispatch(&doc.pages[0].sections[0].components[0], &theme);

    assert!(rendered.element.is_unknown());
    assert_eq!(
        rendered.props["label"],
        json!("Unknown component: BogusWidget")
    );
    assert_eq!(rendered.children.len(), 1);
    assert!(!rendered.children[0].element.is_unknown());
}

#[test]
fn free_text_payload_recovers_and_normalizes() {
    let reply = "Here is the layout you asked for:\n\
        ```json\n\
        { \"screens\": [{ \"name\": \"Home\", \"components\": [{ \"type\": \"hero\" }] }] }\n\
        ```\n\
        Let me know if you want changes.";

    let value = extract_json(reply).unwrap();
    let doc = normalizer().normalize(&value).unwrap();
    assert_eq!(doc.pages[0].name, "Home");
    assert_eq!(doc.pages[0].sections[0].components[0].tag, "Hero");
}

#[test]
fn theme_defaults_flow_into_dispatch() {
    let raw = json!({ "screens": [{ "components": [
        { "type": "header", "props": { "text": "Welcome" } },
        { "type": "button", "props": { "text": "Go" } }
    ] }] });

    let doc = normalizer().normalize(&raw).unwrap();
    let theme = Theme::new(&doc.theme);

    let header = dispatch(&doc.pages[0].sections[0].components[0], &theme);
    let button = dispatch(&doc.pages[0].sections[0].components[1], &theme);

    // Fallback palette is teal; the two sanctioned injections apply.
    assert_eq!(header.props["color"], json!("#0F172A"));
    assert_eq!(button.props["bg"], json!("#0D9488"));
    assert_eq!(button.props["color"], json!("#FFFFFF"));
}
