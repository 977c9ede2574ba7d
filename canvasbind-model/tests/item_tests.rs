use canvasbind_model::{Asset, CollectionItem, FieldKind, FieldValue};
use canvasbind_types::{ColorStyle, ColorValue, FieldId};

// ── Cell rendering ───────────────────────────────────────────────

#[test]
fn image_cell_is_url_or_empty() {
    assert_eq!(
        FieldValue::Image(Some(Asset::new("https://cdn/a.png"))).to_cell(),
        "https://cdn/a.png"
    );
    assert_eq!(FieldValue::Image(None).to_cell(), "");
    assert_eq!(FieldValue::File(Some(Asset::new("https://cdn/a.pdf"))).to_cell(), "https://cdn/a.pdf");
    assert_eq!(FieldValue::File(None).to_cell(), "");
}

#[test]
fn multi_reference_joins_with_commas() {
    let v = FieldValue::MultiCollectionReference(vec!["a".into(), "b".into(), "c".into()]);
    assert_eq!(v.to_cell(), "a,b,c");
    assert_eq!(FieldValue::MultiCollectionReference(vec![]).to_cell(), "");
}

#[test]
fn enum_cell_is_raw_case() {
    assert_eq!(FieldValue::Enum("case-2".into()).to_cell(), "case-2");
}

#[test]
fn color_style_pair_uses_light() {
    let style = ColorStyle::new("Brand", "#111").with_dark("#eee");
    assert_eq!(FieldValue::Color(Some(style.into())).to_cell(), "#111");
}

#[test]
fn plain_color_is_used_directly() {
    assert_eq!(FieldValue::Color(Some(ColorValue::from("#abc"))).to_cell(), "#abc");
}

#[test]
fn absent_number_is_empty_not_null() {
    assert_eq!(FieldValue::Number(None).to_cell(), "");
}

#[test]
fn numbers_render_without_trailing_zero() {
    assert_eq!(FieldValue::Number(Some(5.0)).to_cell(), "5");
    assert_eq!(FieldValue::Number(Some(1.5)).to_cell(), "1.5");
    assert_eq!(FieldValue::Number(Some(-0.0)).to_cell(), "0");
    assert_eq!(FieldValue::Number(Some(0.1 + 0.2)).to_cell(), "0.30000000000000004");
    assert_eq!(FieldValue::Number(Some(1e20)).to_cell(), "100000000000000000000");
    assert_eq!(FieldValue::Number(Some(0.000001)).to_cell(), "0.000001");
}

#[test]
fn numbers_outside_decimal_range_use_exponent_form() {
    assert_eq!(FieldValue::Number(Some(1e21)).to_cell(), "1e+21");
    assert_eq!(FieldValue::Number(Some(1.5e300)).to_cell(), "1.5e+300");
    assert_eq!(FieldValue::Number(Some(-2.5e22)).to_cell(), "-2.5e+22");
    assert_eq!(FieldValue::Number(Some(1e-7)).to_cell(), "1e-7");
    assert_eq!(FieldValue::Number(Some(-1.25e-9)).to_cell(), "-1.25e-9");
    assert_eq!(FieldValue::Number(Some(f64::INFINITY)).to_cell(), "Infinity");
}

#[test]
fn booleans_render_as_words() {
    assert_eq!(FieldValue::Boolean(Some(true)).to_cell(), "true");
    assert_eq!(FieldValue::Boolean(Some(false)).to_cell(), "false");
    assert_eq!(FieldValue::Boolean(None).to_cell(), "");
}

#[test]
fn scalar_strings_render_verbatim() {
    assert_eq!(FieldValue::String(Some("Hello".into())).to_cell(), "Hello");
    assert_eq!(FieldValue::Link(Some("https://x.dev".into())).to_cell(), "https://x.dev");
    assert_eq!(FieldValue::Date(Some("2024-01-02T00:00:00Z".into())).to_cell(), "2024-01-02T00:00:00Z");
    assert_eq!(FieldValue::FormattedText(Some("<p>Hi</p>".into())).to_cell(), "<p>Hi</p>");
    assert_eq!(FieldValue::CollectionReference(Some("item-9".into())).to_cell(), "item-9");
    assert_eq!(FieldValue::String(None).to_cell(), "");
}

#[test]
fn value_kind_matches_tag() {
    assert_eq!(FieldValue::Number(None).kind(), FieldKind::Number);
    assert_eq!(FieldValue::Color(None).kind(), FieldKind::Color);
    assert_eq!(FieldValue::MultiCollectionReference(vec![]).kind(), FieldKind::MultiCollectionReference);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn item_deserializes_from_host_json() {
    let json = r##"{
        "id": "i1",
        "slug": "first-post",
        "fieldData": {
            "title": {"type": "string", "value": "First"},
            "cover": {"type": "image", "value": {"url": "https://cdn/c.png", "altText": "Cover"}},
            "tags": {"type": "multiCollectionReference", "value": ["t1", "t2"]},
            "accent": {"type": "color", "value": {"name": "Accent", "light": "#111", "dark": "#eee"}},
            "views": {"type": "number", "value": null}
        }
    }"##;
    let item: CollectionItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.slug, "first-post");
    assert_eq!(item.value(&FieldId::new("title")), Some(&FieldValue::String(Some("First".into()))));
    assert_eq!(item.value(&FieldId::new("cover")).unwrap().to_cell(), "https://cdn/c.png");
    assert_eq!(item.value(&FieldId::new("tags")).unwrap().to_cell(), "t1,t2");
    assert_eq!(item.value(&FieldId::new("accent")).unwrap().to_cell(), "#111");
    assert_eq!(item.value(&FieldId::new("views")).unwrap().to_cell(), "");
}

#[test]
fn unknown_value_tag_fails_loudly() {
    let json = r#"{"type": "divider", "value": null}"#;
    assert!(serde_json::from_str::<FieldValue>(json).is_err());
}

#[test]
fn item_without_field_data_is_empty() {
    let item: CollectionItem = serde_json::from_str(r#"{"id":"i1","slug":"s"}"#).unwrap();
    assert!(item.field_data.is_empty());
}
