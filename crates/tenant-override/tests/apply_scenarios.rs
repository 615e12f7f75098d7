/*
 * apply_scenarios.rs
 * Copyright (c) 2025 Posit, PBC
 */

use proptest::prelude::*;
use serde_json::{Value, json};
use tenant_override::{
    ApplyError, ApplyOptions, ApplyWarning, ArrayMergeStrategy, OverrideMap, OverrideSchema,
    SchemaProperty, TenantCustomization, TenantRegistry, apply, default_template_schema,
    extract_overrides, merge_overrides,
};

fn storefront() -> Value {
    json!({
        "metadata": { "title": "Storefront" },
        "theme": {
            "colors": { "primary": "#000000" },
            "typography": { "fontFamily": "Inter", "fontSize": 16 }
        },
        "layout": { "variant": "full-width", "maxWidth": 1200 },
        "navigation": { "items": [{ "label": "Home", "href": "/" }] }
    })
}

/// Test that theme colors are overridden and added without touching the base
#[test]
fn test_theme_color_scenario() {
    let base = json!({ "theme": { "colors": { "primary": "#000000" } } });
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("theme.colors.primary", json!("#ff5722"))
        .with_override("theme.colors.secondary", json!("#ff9800"));
    let schema = default_template_schema();

    let applied = apply(&base, &customization, &ApplyOptions::new().with_schema(&schema)).unwrap();

    assert_eq!(
        applied.customized["theme"]["colors"],
        json!({ "primary": "#ff5722", "secondary": "#ff9800" })
    );
    assert_eq!(
        applied.applied_paths,
        vec!["theme.colors.primary", "theme.colors.secondary"]
    );
    assert!(applied.warnings.is_empty());
    assert_eq!(base["theme"]["colors"]["primary"], json!("#000000"));
    assert!(std::ptr::eq(applied.original, &base));
}

/// Test that strict mode against a closed schema rejects undeclared paths
#[test]
fn test_strict_closed_schema_rejects_unknown_path() {
    let base = storefront();
    let schema = OverrideSchema::new().with_path("theme.colors.*", SchemaProperty::string());
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("bogus.path", json!("x"));

    let err = apply(
        &base,
        &customization,
        &ApplyOptions::new().with_schema(&schema).strict(true),
    )
    .unwrap_err();

    match err {
        ApplyError::Validation { tenant_id, errors } => {
            assert_eq!(tenant_id, "acme");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].path, "bogus.path");
            assert_eq!(errors[0].code, "TO-1-18");
        }
        other => panic!("Expected a validation error, got {:?}", other),
    }
    assert_eq!(base, storefront());
}

/// Test that a strict apply reports every validation error, not just the first
#[test]
fn test_strict_validation_reports_every_error() {
    let base = storefront();
    let schema =
        OverrideSchema::new().with_path("theme.typography.fontSize", SchemaProperty::number());
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("bogus.path", json!("x"))
        .with_override("theme.typography.fontSize", json!("large"));

    let err = apply(
        &base,
        &customization,
        &ApplyOptions::new().with_schema(&schema).strict(true),
    )
    .unwrap_err();

    let errors = match err {
        ApplyError::Validation { errors, .. } => errors,
        other => panic!("Expected a validation error, got {:?}", other),
    };
    let found: Vec<(&str, &str)> = errors
        .iter()
        .map(|error| (error.path.as_str(), error.code.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![("bogus.path", "TO-1-18"), ("theme.typography.fontSize", "TO-1-11")]
    );
}

/// Test that non-strict mode applies what it can and reports the rest
#[test]
fn test_best_effort_apply() {
    let base = storefront();
    let schema = default_template_schema();
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("layout.maxWidth.px", json!(960))
        .with_override("theme.typography.fontSize", json!(120))
        .with_override("metadata.title", json!("Acme Store"));

    let applied = apply(&base, &customization, &ApplyOptions::new().with_schema(&schema)).unwrap();

    assert_eq!(
        applied.applied_paths,
        vec!["theme.typography.fontSize", "metadata.title"]
    );
    assert_eq!(applied.customized["metadata"]["title"], json!("Acme Store"));
    assert_eq!(applied.customized["layout"]["maxWidth"], json!(1200));
    assert_eq!(applied.skipped_paths().collect::<Vec<_>>(), vec!["layout.maxWidth.px"]);

    let out_of_range = applied.warnings.iter().any(|warning| {
        matches!(warning, ApplyWarning::Validation(error)
            if error.path == "theme.typography.fontSize" && error.code == "TO-1-15")
    });
    assert!(out_of_range);
}

/// Test that a strict apply aborts on the first path that cannot be written
#[test]
fn test_strict_path_failure_returns_no_tree() {
    let base = storefront();
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("metadata.title", json!("Acme"))
        .with_override("metadata.title.short", json!("A"));

    let err = apply(&base, &customization, &ApplyOptions::new().strict(true)).unwrap_err();
    assert!(matches!(
        err,
        ApplyError::PathApplication { ref path, .. } if path == "metadata.title.short"
    ));
}

/// Test that concat appends to existing arrays and replaces elsewhere
#[test]
fn test_concat_navigation_items() {
    let base = storefront();
    let customization = TenantCustomization::new("acme", "Acme Corp", "storefront")
        .with_override("navigation.items", json!([{ "label": "Blog", "href": "/blog" }]))
        .with_override("layout.variant", json!(["boxed"]));
    let options = ApplyOptions::new().with_array_merge(ArrayMergeStrategy::Concat);

    let applied = apply(&base, &customization, &options).unwrap();

    assert_eq!(
        applied.customized["navigation"]["items"],
        json!([{ "label": "Home", "href": "/" }, { "label": "Blog", "href": "/blog" }])
    );
    assert_eq!(applied.customized["layout"]["variant"], json!(["boxed"]));
}

/// Test that layered maps applied through the registry yield the merged result
#[test]
fn test_layered_overrides_through_registry() {
    let brand: OverrideMap = serde_json::from_value(json!({
        "theme.colors.primary": "#ff5722",
        "metadata.title": "Acme"
    }))
    .unwrap();
    let campaign: OverrideMap = serde_json::from_value(json!({
        "metadata.title": "Acme Summer Sale"
    }))
    .unwrap();

    let mut registry = TenantRegistry::new();
    registry.register(
        TenantCustomization::new("acme", "Acme Corp", "storefront")
            .with_overrides(merge_overrides([&brand, &campaign])),
    );

    let base = storefront();
    let applied = registry
        .apply_for("acme", &base, &ApplyOptions::default())
        .unwrap();
    assert_eq!(applied.customized["metadata"]["title"], json!("Acme Summer Sale"));
    assert_eq!(
        applied.applied_paths,
        vec!["theme.colors.primary", "metadata.title"]
    );
}

/// Test that a customization loaded from YAML applies like one built in code
#[test]
fn test_yaml_customization() {
    let customization: TenantCustomization = serde_yaml::from_str(
        r##"
tenantId: globex
tenantName: Globex
baseTemplate: storefront
overrides:
  theme.colors.primary: "#3366ff"
  navigation.items[0].label: Start
metadata:
  author: design-team
"##,
    )
    .unwrap();

    let base = storefront();
    let applied = apply(&base, &customization, &ApplyOptions::default()).unwrap();
    assert_eq!(applied.customized["navigation"]["items"][0]["label"], json!("Start"));
    assert_eq!(applied.customized["theme"]["colors"]["primary"], json!("#3366ff"));
}

fn leaf_path() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["alpha", "beta", "gamma", "fresh"]),
        prop::sample::select(vec!["x", "y", "z"]),
    )
        .prop_map(|(parent, child)| format!("{}.{}", parent, child))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// extract_overrides(base, apply(base, M).customized) == M
    #[test]
    fn prop_extract_inverts_apply(
        entries in prop::collection::hash_map(leaf_path(), any::<i64>(), 0..8)
    ) {
        let base = json!({
            "alpha": { "x": "a", "y": "b" },
            "beta": { "x": "c" },
            "gamma": {}
        });
        let overrides: OverrideMap =
            entries.into_iter().map(|(path, n)| (path, json!(n))).collect();
        let customization = TenantCustomization::new("t", "T", "base").with_overrides(overrides.clone());

        let applied = apply(&base, &customization, &ApplyOptions::default()).unwrap();
        prop_assert_eq!(extract_overrides(&base, &applied.customized), overrides);
    }
}
