use approx::assert_relative_eq;
use yield_surface::api::{
    ChartDimensions, H15_PREAMBLE_ROWS, MissingValuePolicy, SurfaceConfig, SurfaceProfile,
};
use yield_surface::core::{Tenor, TenorSet};
use yield_surface::error::SurfaceError;

#[test]
fn empty_json_yields_the_h15_defaults() {
    let config = SurfaceConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config.dimensions, ChartDimensions::new(80.0, 40.0, 30.0));
    assert_eq!(config.profile, SurfaceProfile::QuantilePalette);
    assert_eq!(config.missing_value_policy, MissingValuePolicy::Sentinel);
    assert_eq!(config.tenors.len(), 11);
    assert_eq!(config.leading_rows_to_drop, H15_PREAMBLE_ROWS);
    assert_eq!(config.date_column, "Series Description");
    assert_eq!(config.missing_tokens, vec!["ND".to_owned()]);
}

#[test]
fn config_round_trips_through_json() {
    let tenors = TenorSet::new(vec![Tenor::new("a", "1Y"), Tenor::new("b", "10Y")])
        .expect("valid tenor set");
    let config = SurfaceConfig::default()
        .with_profile(SurfaceProfile::LinearGradient)
        .with_tenors(tenors)
        .with_dimensions(ChartDimensions::new(120.0, 50.0, 25.0))
        .with_missing_value_policy(MissingValuePolicy::Reject)
        .with_leading_rows_to_drop(0);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"linear_gradient\""));
    assert!(json.contains("\"reject\""));

    let restored = SurfaceConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored.profile, config.profile);
    assert_eq!(restored.tenors, config.tenors);
    assert_eq!(restored.dimensions, config.dimensions);
    assert_eq!(restored.missing_value_policy, config.missing_value_policy);
    assert_eq!(restored.leading_rows_to_drop, 0);
    assert_relative_eq!(
        restored.style.grid_color.red,
        config.style.grid_color.red,
        epsilon = 1e-12
    );
}

#[test]
fn non_positive_dimensions_are_rejected() {
    let err = SurfaceConfig::from_json_str(
        r#"{ "dimensions": { "width": 0.0, "height": 40.0, "depth": 30.0 } }"#,
    )
    .expect_err("zero width");
    assert!(matches!(err, SurfaceError::InvalidDimensions { .. }));
}

#[test]
fn duplicate_tenor_keys_are_rejected_on_load() {
    let err = SurfaceConfig::from_json_str(
        r#"{ "tenors": { "tenors": [
            { "key": "a", "label": "1Y" },
            { "key": "a", "label": "2Y" }
        ] } }"#,
    )
    .expect_err("duplicate key");
    assert!(matches!(err, SurfaceError::InvalidData(_)));
}

#[test]
fn empty_tenor_labels_are_rejected_on_load() {
    let err = SurfaceConfig::from_json_str(
        r#"{ "tenors": { "tenors": [
            { "key": "a", "label": "1Y" },
            { "key": "b", "label": "" }
        ] } }"#,
    )
    .expect_err("empty label");
    assert!(matches!(err, SurfaceError::InvalidData(message) if message.contains("axis label")));
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = SurfaceConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, SurfaceError::InvalidData(_)));
}

#[test]
fn profiles_resolve_from_names() {
    assert_eq!(
        SurfaceProfile::from_name("linear-gradient"),
        Some(SurfaceProfile::LinearGradient)
    );
    assert_eq!(
        SurfaceProfile::from_name("quantile"),
        Some(SurfaceProfile::QuantilePalette)
    );
    assert_eq!(SurfaceProfile::from_name("sepia"), None);
    assert_eq!(SurfaceProfile::LinearGradient.name(), "linear_gradient");
}
