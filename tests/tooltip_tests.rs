use approx::assert_relative_eq;
use dotplot_rs::api::{ChartConfig, DotPlotChart};
use dotplot_rs::core::Record;
use dotplot_rs::interaction::{PointerEvent, TooltipKind};
use dotplot_rs::render::{NodeId, NullRenderer};

fn loaded(records: Vec<Record>) -> DotPlotChart<NullRenderer> {
    let mut chart =
        DotPlotChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.ready(records).expect("ready");
    chart
}

fn dots(chart: &DotPlotChart<NullRenderer>) -> (NodeId, NodeId) {
    let targets = chart.hover_targets();
    assert_eq!(targets.len(), 2);
    (targets[0], targets[1])
}

#[test]
fn tooltips_start_hidden_with_configured_offset() {
    let chart = loaded(vec![Record::new("Texas", 24.0, 12.0)]);
    for kind in [TooltipKind::Male, TooltipKind::Female] {
        let tooltip = chart.tooltip(kind);
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.class_name(), "d3-tip");
        assert_eq!(tooltip.offset(), [-10.0, 0.0]);
        assert_eq!(tooltip.kind(), kind);
    }
}

#[test]
fn entering_female_dot_shows_raw_value_above_it() {
    let mut chart = loaded(vec![Record::new("Texas", 24.0, 12.0)]);
    let (female, _) = dots(&chart);

    assert!(chart.pointer_enter(female).expect("enter"));
    let tooltip = chart.tooltip(TooltipKind::Female);
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.text(), "12");

    let anchor = tooltip.anchor();
    assert_relative_eq!(anchor.x, 480.0);
    assert_relative_eq!(anchor.y, 371.0);
    let position = tooltip.position();
    assert_relative_eq!(position.x, 480.0);
    assert_relative_eq!(position.y, 361.0);

    assert!(!chart.tooltip(TooltipKind::Male).is_visible());
}

#[test]
fn leaving_hides_but_keeps_last_text() {
    let mut chart = loaded(vec![Record::new("Texas", 24.0, 12.0)]);
    let (_, male) = dots(&chart);

    chart.pointer_enter(male).expect("enter");
    assert_eq!(chart.tooltip(TooltipKind::Male).text(), "24");
    assert!(chart.pointer_leave(male).expect("leave"));
    let tooltip = chart.tooltip(TooltipKind::Male);
    assert!(!tooltip.is_visible());
    assert_eq!(tooltip.text(), "24");
}

#[test]
fn tooltip_text_is_not_rounded() {
    let mut chart = loaded(vec![Record::new("Alaska", 17.3, 13.55)]);
    let (female, male) = dots(&chart);
    chart.pointer_enter(female).expect("enter");
    chart.pointer_enter(male).expect("enter");
    assert_eq!(chart.tooltip(TooltipKind::Female).text(), "13.55");
    assert_eq!(chart.tooltip(TooltipKind::Male).text(), "17.3");
}

#[test]
fn each_tooltip_tracks_the_latest_entered_dot() {
    let mut chart = loaded(vec![
        Record::new("Alabama", 14.1, 10.2),
        Record::new("Texas", 24.0, 12.0),
    ]);
    let targets = chart.hover_targets();
    assert_eq!(targets.len(), 4);

    chart.pointer_enter(targets[0]).expect("enter alabama");
    chart.pointer_enter(targets[2]).expect("enter texas");
    let tooltip = chart.tooltip(TooltipKind::Female);
    assert_eq!(tooltip.text(), "12");
    // Texas is the upper row of two: 550 / 2 / 2 + 100 - 4.
    assert_relative_eq!(tooltip.anchor().y, 233.5);
}

#[test]
fn unbound_nodes_are_ignored() {
    let mut chart = loaded(vec![Record::new("Texas", 24.0, 12.0)]);
    let plot_group = chart.plot_group();
    assert!(!chart.pointer_enter(plot_group).expect("enter"));
    assert!(
        !chart
            .dispatch_pointer(chart.svg_node(), PointerEvent::Leave)
            .expect("leave")
    );
    assert!(!chart.tooltip(TooltipKind::Female).is_visible());
    assert!(!chart.tooltip(TooltipKind::Male).is_visible());
}

#[test]
fn tooltip_text_keeps_cells_as_written() {
    let mut chart =
        DotPlotChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart
        .run_reader("state,male,female\nTexas,24.0,12.50\n".as_bytes())
        .expect("run");
    let (female, male) = dots(&chart);

    chart.pointer_enter(female).expect("enter");
    chart.pointer_enter(male).expect("enter");
    assert_eq!(chart.tooltip(TooltipKind::Female).text(), "12.50");
    assert_eq!(chart.tooltip(TooltipKind::Male).text(), "24.0");

    // Positions still come from the parsed numbers.
    assert_relative_eq!(chart.tooltip(TooltipKind::Female).anchor().x, 480.0);
}
