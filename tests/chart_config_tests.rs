use census_scatter::ChartError;
use census_scatter::api::ChartConfig;
use census_scatter::core::{Field, Margins, Viewport};

#[test]
fn default_config_matches_reference_layout() {
    let config = ChartConfig::default();
    assert_eq!(config.viewport, Viewport::new(950, 500));
    assert_eq!(config.margins, Margins::new(20.0, 40.0, 80.0, 100.0));
    assert_eq!(config.default_x, Field::Poverty);
    assert_eq!(config.default_y, Field::Healthcare);
    assert_eq!(config.axis_transition_ms, 100.0);
    assert_eq!(config.point_transition_ms, 10_000.0);
    assert_eq!(config.tooltip_offset, (-8.0, 0.0));

    let plot = config.plot_area().expect("plot area");
    assert_eq!((plot.width, plot.height), (810.0, 400.0));
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, ChartConfig::default());
}

#[test]
fn json_overrides_only_named_keys() {
    let config = ChartConfig::from_json_str(
        r#"{ "point_transition_ms": 750.0, "default_x": "income", "default_y": "smokes" }"#,
    )
    .expect("partial config");

    assert_eq!(config.point_transition_ms, 750.0);
    assert_eq!(config.default_x, Field::Income);
    assert_eq!(config.default_y, Field::Smokes);
    assert_eq!(config.axis_transition_ms, 100.0);
}

#[test]
fn config_json_roundtrip() {
    let config = ChartConfig::default()
        .with_transition_durations(250.0, 2_000.0)
        .with_default_fields(Field::Age, Field::Obesity);
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartConfig::from_json_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}

#[test]
fn default_fields_must_belong_to_their_axis() {
    let err = ChartConfig::from_json_str(r#"{ "default_x": "healthcare" }"#)
        .expect_err("healthcare is a y field");
    assert!(matches!(
        err,
        ChartError::FieldAxisMismatch {
            field: Field::Healthcare,
            ..
        }
    ));
}

#[test]
fn unknown_field_name_is_a_config_error() {
    let err = ChartConfig::from_json_str(r#"{ "default_x": "rent" }"#)
        .expect_err("rent is not a field");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn validation_rejects_bad_numbers() {
    let negative_duration = ChartConfig::default().with_transition_durations(-1.0, 100.0);
    assert!(matches!(
        negative_duration.validate(),
        Err(ChartError::Config(_))
    ));

    let mut zero_radius = ChartConfig::default();
    zero_radius.point_radius_px = 0.0;
    assert!(matches!(zero_radius.validate(), Err(ChartError::Config(_))));

    let mut no_ticks = ChartConfig::default();
    no_ticks.y_tick_count = 0;
    assert!(matches!(no_ticks.validate(), Err(ChartError::Config(_))));
}

#[test]
fn margins_that_consume_the_viewport_are_rejected() {
    let config = ChartConfig::default()
        .with_viewport(Viewport::new(100, 100), Margins::new(20.0, 40.0, 80.0, 100.0));
    assert!(config.validate().is_err());

    let zero = ChartConfig::default().with_viewport(Viewport::new(0, 500), Margins::default());
    assert!(zero.validate().is_err());
}
