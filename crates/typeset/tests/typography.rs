//! End-to-end behavior of the typography facade: configuration in, published
//! stylesheet and component attributes out.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tempfile::TempDir;
use typeset::{
    batch, create_typography, default_variants, resolve_options, use_typography, BreakpointTable,
    Context, DirectorySink, Document, Headless, Observable, StyleRecord, Typography,
    TypographyConfig, TypographyError, TypographyOptions, TypographyProps, VariantTable,
    DEFAULT_STYLESHEET_ID,
};

fn from_yaml(yaml: &str, document: &Document) -> Typography {
    let config = TypographyConfig::from_yaml(yaml).unwrap();
    create_typography(config, None, document).unwrap().unwrap()
}

fn published(document: &Document) -> String {
    document.content(DEFAULT_STYLESHEET_ID).unwrap()
}

// =========================================================================
// Configuration to stylesheet
// =========================================================================

#[test]
fn test_default_configuration() {
    let document = Document::new();
    let typography = create_typography(true, None, &document).unwrap().unwrap();
    let css = published(&document);

    assert!(css.starts_with("@layer vuetify.typography {\n"));
    assert!(css.ends_with("\n}"));
    assert!(css.contains("  .v-typography{text-transform:none}"));
    for name in default_variants().names() {
        assert!(css.contains(&format!(".{}{{", name)), "missing {}", name);
    }
    assert!(!css.contains(":root{"));
    assert_eq!(typography.css(), css);
}

#[test]
fn test_custom_variant_alongside_defaults() {
    let document = Document::new();
    let typography = from_yaml(
        r#"
        variants:
          custom-variant:
            fontSize: 99px
            lineHeight: 100px
            fontWeight: 900
            letterSpacing: 1px
        "#,
        &document,
    );

    let css = published(&document);
    assert!(css.contains(
        ".custom-variant{font-size:99px; line-height:100px; font-weight:900; letter-spacing:1px}"
    ));
    assert!(css.contains(".body-medium{"));
    assert_eq!(typography.variants().with(|t| t.len()), 13);
}

#[test]
fn test_font_family_variables() {
    let document = Document::new();
    from_yaml(
        r#"
        variables:
          font-body: Roboto, sans-serif
        variants:
          body-medium:
            fontFamily: "var:font-body"
          body-small:
            fontFamily: font-body
          body-large:
            fontFamily: var(--my-custom-font)
          label-large:
            fontFamily: Georgia
        "#,
        &document,
    );

    let css = published(&document);
    assert!(css.contains("  :root{--v-typography--font-body:Roboto, sans-serif;}"));
    assert!(css.contains("font-family:var(--v-typography--font-body)"));
    assert!(css.contains("font-family:var(--my-custom-font)"));
    assert!(css.contains("font-family:Georgia"));
    assert!(!css.contains("font-family:var:font-body"));

    let root = css.find(":root{").unwrap();
    let base = css.find(".v-typography{").unwrap();
    assert!(root < base);
}

#[test]
fn test_merge_false_keeps_only_user_variants() {
    let document = Document::new();
    let typography = from_yaml(
        r#"
        merge: false
        variants:
          brand-hero:
            fontSize: 80px
        "#,
        &document,
    );

    let names: Vec<String> = typography
        .variants()
        .with(|t| t.names().map(str::to_string).collect());
    assert_eq!(names, vec!["brand-hero"]);
    assert!(!published(&document).contains(".body-medium{"));
}

#[test]
fn test_null_variant_is_deleted() {
    let document = Document::new();
    let config =
        TypographyConfig::from_json(r#"{"variants": {"body-medium": null, "label-small": null}}"#)
            .unwrap();
    let typography = create_typography(config, None, &document).unwrap().unwrap();

    let css = published(&document);
    assert!(!css.contains(".body-medium{"));
    assert!(!css.contains(".label-small{"));
    assert!(css.contains(".body-small{"));
    assert_eq!(typography.variants().with(|t| t.len()), 10);
}

#[test]
fn test_partial_override_keeps_other_properties() {
    let options = TypographyOptions::new().variants(
        VariantTable::new().with("body-medium", StyleRecord::new().with("fontSize", "15px")),
    );
    let resolved = resolve_options(Some(&options));
    let body = resolved.variants.get("body-medium").unwrap();
    assert_eq!(body.get("fontSize").unwrap().to_string(), "15px");
    assert_eq!(body.get("lineHeight").unwrap().to_string(), "20px");
    assert_eq!(body.get("fontWeight").unwrap().to_string(), "400");
}

#[test]
fn test_scoped_prefix() {
    let document = Document::new();
    from_yaml("prefix: app-\nscoped: true\n", &document);
    let css = published(&document);
    assert!(css.contains("  .app-typography{text-transform:none}"));
    assert!(css.contains("  .app-typography.body-medium{"));
}

#[test]
fn test_published_stylesheet_with_custom_prefix() {
    let document = Document::new();
    from_yaml(
        r#"
        prefix: app-
        merge: false
        variables:
          font-body: Inter, sans-serif
        variants:
          brand-hero:
            fontSize: 80px
            fontFamily: font-body
        "#,
        &document,
    );

    insta::assert_snapshot!(published(&document), @r###"
@layer vuetify.typography {
  :root{--v-typography--font-body:Inter, sans-serif;}
  .app-typography{text-transform:none}
  .brand-hero{font-size:80px; font-family:var(--v-typography--font-body)}
}
"###);
}

#[test]
fn test_responsive_variants_with_default_breakpoints() {
    let document = Document::new();
    let typography = create_typography(
        true,
        Some(Observable::new(BreakpointTable::default())),
        &document,
    )
    .unwrap()
    .unwrap();
    let css = typography.css();

    assert_eq!(css.matches("@media").count(), 5);
    assert!(!css.contains("@media (min-width:0px)"));
    assert!(css.contains("  @media (min-width:600px){\n  .display-sm-large{"));
    assert!(css.contains(".body-xxl-small{"));
}

#[test]
fn test_responsive_disabled() {
    let document = Document::new();
    let typography = create_typography(
        TypographyOptions::new().responsive(false),
        Some(Observable::new(BreakpointTable::default())),
        &document,
    )
    .unwrap()
    .unwrap();
    assert!(!typography.css().contains("@media"));
}

// =========================================================================
// Reactivity and publishing
// =========================================================================

#[test]
fn test_variant_edit_republishes() {
    let document = Document::new();
    let typography = create_typography(true, None, &document).unwrap().unwrap();

    typography.variants().update(|table| {
        table.insert(
            "headline-small",
            StyleRecord::new().with("fontSize", "30px"),
        );
    });

    assert!(published(&document).contains(".headline-small{font-size:30px}"));
    assert_eq!(typography.publish_count(), 2);
}

#[test]
fn test_batched_inputs_publish_settled_stylesheet_once() {
    let document = Document::new();
    let breakpoints = Observable::new(BreakpointTable::new().with("xs", 0));
    let typography = create_typography(true, Some(breakpoints.clone()), &document)
        .unwrap()
        .unwrap();
    let element = document.element(DEFAULT_STYLESHEET_ID).unwrap();
    assert_eq!(element.write_count(), 1);

    batch(|| {
        breakpoints.update(|table| table.insert("wide", 1000));
        typography.set_variant("brand-hero", StyleRecord::new().with("fontSize", "80px"));
    });

    assert_eq!(element.write_count(), 2);
    let css = element.content();
    assert!(css.contains("@media (min-width:1000px){"));
    assert!(css.contains(".brand-wide-hero{font-size:80px}"));
}

#[test]
fn test_same_stylesheet_id_shares_one_element() {
    let document = Document::new();
    let first = create_typography(true, None, &document).unwrap().unwrap();
    let second = create_typography(TypographyOptions::new().prefix("x-"), None, &document)
        .unwrap()
        .unwrap();

    assert_eq!(document.element_count(), 1);
    assert_eq!(published(&document), second.css());
    assert_ne!(first.css(), second.css());
}

#[test]
fn test_headless_computes_without_publishing() {
    let typography = create_typography(true, None, &Headless).unwrap().unwrap();
    typography.set_variant("brand-hero", StyleRecord::new().with("fontSize", "80px"));
    assert_eq!(typography.publish_count(), 0);
    assert!(typography.css().contains(".brand-hero{font-size:80px}"));
}

#[test]
fn test_directory_sink_follows_changes() {
    let temp_dir = TempDir::new().unwrap();
    let sink = DirectorySink::new(temp_dir.path());
    let typography = create_typography(
        TypographyOptions::new().stylesheet_id("site-type"),
        None,
        &sink,
    )
    .unwrap()
    .unwrap();

    typography.remove_variant("display-large");

    let written = std::fs::read_to_string(sink.path_for("site-type")).unwrap();
    assert_eq!(written, typography.css());
    assert!(!written.contains(".display-large{"));
}

// =========================================================================
// Installation and lookup
// =========================================================================

#[test]
fn test_disabled_has_nothing_to_install() {
    let document = Document::new();
    let config = TypographyConfig::from_yaml("false").unwrap();
    assert!(create_typography(config, None, &document).unwrap().is_none());
    assert_eq!(document.element_count(), 0);

    let err = use_typography(&Context::new()).unwrap_err();
    assert!(matches!(err, TypographyError::NotInstalled));
    assert_eq!(
        err.to_string(),
        "use_typography() must be used after create_typography() has been called"
    );
}

#[test]
fn test_component_attributes_through_context() {
    let document = Document::new();
    let typography = create_typography(true, None, &document).unwrap().unwrap();
    let mut app = Context::new();
    typography.install(&mut app);
    let component = app.child();

    let attrs = TypographyProps::new("body-medium")
        .color("primary")
        .tag("h2")
        .custom_variant(StyleRecord::new().with("fontSize", "20px"))
        .resolve(&component)
        .unwrap();

    assert_eq!(attrs.tag, "h2");
    assert_eq!(attrs.class_attr(), "v-typography body-medium text-primary");
    assert_eq!(attrs.style.as_deref(), Some("font-size: 20px;"));
}

#[test]
fn test_installed_instance_is_shared() {
    let document = Document::new();
    let typography = create_typography(true, None, &document).unwrap().unwrap();
    let mut app = Context::new();
    typography.install(&mut app);

    use_typography(&app)
        .unwrap()
        .set_variant("brand-hero", StyleRecord::new().with("fontSize", "80px"));

    assert!(typography.variants().with(|t| t.contains("brand-hero")));
    assert!(published(&document).contains(".brand-hero{"));
}

// =========================================================================
// Resolution properties
// =========================================================================

fn custom_name() -> impl Strategy<Value = String> {
    "zz[a-z]{1,5}-[a-z]{1,5}"
}

proptest! {
    #[test]
    fn prop_resolution_is_deterministic(
        deleted in prop::sample::subsequence(
            default_variants().names().map(str::to_string).collect::<Vec<_>>(),
            0..=12,
        ),
        added in prop::collection::btree_set(custom_name(), 0..4),
    ) {
        let mut table = VariantTable::new();
        for name in &deleted {
            table = table.without(name);
        }
        for name in &added {
            table = table.with(name, StyleRecord::new().with("fontSize", "10px"));
        }
        let options = TypographyOptions::new().variants(table);

        let first = resolve_options(Some(&options));
        let second = resolve_options(Some(&options));
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.variants.has_absent());

        let expected: Vec<String> = default_variants()
            .names()
            .filter(|name| !deleted.iter().any(|d| d.as_str() == *name))
            .map(str::to_string)
            .chain(added.iter().cloned())
            .collect();
        let actual: Vec<String> = first.variants.names().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_merge_false_is_exactly_user_table(
        added in prop::collection::btree_set(custom_name(), 0..5),
    ) {
        let table: VariantTable = added
            .iter()
            .map(|name| (name.clone(), StyleRecord::new().with("fontWeight", 700)))
            .collect();
        let options = TypographyOptions::new().merge(false).variants(table);
        let resolved = resolve_options(Some(&options));

        let names: BTreeSet<String> = resolved.variants.names().map(str::to_string).collect();
        prop_assert_eq!(names, added);
    }
}
