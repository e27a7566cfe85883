use dotplot_rs::api::{ChartConfig, DEFAULT_CONTAINER_ID};
use dotplot_rs::core::Margins;
use dotplot_rs::error::ChartError;
use dotplot_rs::extensions::Annotation;
use dotplot_rs::render::TextAnchor;

#[test]
fn defaults_describe_the_stock_chart() {
    let config = ChartConfig::default();
    assert_eq!(config.container_id, DEFAULT_CONTAINER_ID);
    assert_eq!(config.margins, Margins::default());
    assert_eq!(config.x_domain, [0.0, 18.0]);
    assert_eq!(config.female_fill.as_str(), "#fde725");
    assert_eq!(config.male_fill.as_str(), "#31688e");
    assert_eq!(config.tooltip_offset, [-10.0, 0.0]);
    assert_eq!(config.title.x, 285.0);
    assert_eq!(config.title.anchor, TextAnchor::Middle);
    assert!(config.title.bold);
    assert_eq!(config.subtitle.anchor, TextAnchor::Right);
    assert_eq!(config.annotations.len(), 2);
    config.validate().expect("default config is valid");

    let plot = config.plot_area().expect("plot area");
    assert_eq!((plot.width, plot.height), (570.0, 550.0));
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = ChartConfig::from_json_str(
        r##"{ "container_id": "gap", "male_fill": "#123456", "x_domain": [0, 30] }"##,
    )
    .expect("parse");
    assert_eq!(config.container_id, "gap");
    assert_eq!(config.male_fill.as_str(), "#123456");
    assert_eq!(config.x_domain, [0.0, 30.0]);
    assert_eq!(config.female_fill.as_str(), "#fde725");
    assert_eq!(config.outer_width, 750.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartConfig::default()
        .with_size(900.0, 800.0)
        .with_annotations(vec![
            Annotation::label("Texas has the widest gap", 90.0)
                .at(480.0, 120.0)
                .with_note_offset(30.0, -20.0),
        ]);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn invalid_paint_is_rejected() {
    let err = ChartConfig::from_json_str(r#"{ "male_fill": "not-a-colour" }"#)
        .expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn degenerate_values_fail_validation() {
    let cases = [
        ChartConfig::default().with_x_domain(5.0, 5.0),
        ChartConfig::default().with_size(100.0, 100.0),
        ChartConfig::default().with_container_id("  "),
        ChartConfig {
            row_padding: 1.5,
            ..ChartConfig::default()
        },
        ChartConfig {
            x_tick_count: 0,
            ..ChartConfig::default()
        },
        ChartConfig {
            dot_radius: 0.0,
            ..ChartConfig::default()
        },
        ChartConfig::default().with_annotations(vec![Annotation::label("x", 0.0)]),
    ];
    for config in cases {
        assert!(config.validate().is_err(), "accepted {config:?}");
    }
}

#[test]
fn margins_change_plot_area() {
    let config = ChartConfig::default().with_margins(Margins {
        top: 10.0,
        left: 20.0,
        right: 30.0,
        bottom: 40.0,
    });
    let plot = config.plot_area().expect("plot area");
    assert_eq!((plot.width, plot.height), (700.0, 650.0));
}

#[test]
fn container_id_is_limited_to_selector_safe_characters() {
    for id in ["chart 1", "a'b", "x\"y", "#chart", "tab\tid"] {
        let config = ChartConfig::default().with_container_id(id);
        assert!(
            matches!(config.validate(), Err(ChartError::InvalidConfig(_))),
            "accepted `{id}`"
        );
    }
    for id in ["chart-1", "gap_2", "A"] {
        ChartConfig::default()
            .with_container_id(id)
            .validate()
            .expect("valid id");
    }
    assert!(ChartConfig::from_json_str(r#"{ "container_id": "x');alert(1);('" }"#).is_err());
}
