use criterion::{Criterion, criterion_group, criterion_main};
use dotplot_rs::api::{ChartConfig, DotPlotChart};
use dotplot_rs::core::{LinearScale, PointScale, Record, group_by_state};
use dotplot_rs::render::{NullRenderer, SvgOutputMode, SvgRenderer};
use std::hint::black_box;

fn sample_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            Record::new(format!("state-{i}"), 8.0 + (t * 0.37) % 10.0, 5.0 + (t * 0.23) % 8.0)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 18.0)
        .expect("valid scale")
        .with_range(0.0, 570.0)
        .expect("valid range");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.map(black_box(12.345));
            let _ = scale.invert(px);
        })
    });
}

fn bench_point_scale_rescale_500(c: &mut Criterion) {
    let names: Vec<String> = (0..500).map(|i| format!("state-{i}")).collect();
    let scale = PointScale::new(550.0, 0.0)
        .expect("valid scale")
        .with_padding(0.5)
        .expect("valid padding");

    c.bench_function("point_scale_rescale_500", |b| {
        b.iter(|| {
            let scale = scale.clone().with_domain(black_box(&names).iter().cloned());
            let _ = scale.map("state-250");
        })
    });
}

fn bench_group_by_state_10k(c: &mut Criterion) {
    let records: Vec<Record> = (0..10_000)
        .map(|i| Record::new(format!("state-{}", i % 52), 10.0, 8.0))
        .collect();

    c.bench_function("group_by_state_10k", |b| {
        b.iter(|| {
            let _ = group_by_state(black_box(&records));
        })
    });
}

fn bench_ready_and_render_svg_50(c: &mut Criterion) {
    let records = sample_records(50);

    c.bench_function("ready_and_render_svg_50", |b| {
        b.iter(|| {
            let mut chart = DotPlotChart::new(
                SvgRenderer::new(SvgOutputMode::Svg),
                ChartConfig::default(),
            )
            .expect("chart init");
            chart.ready(black_box(records.clone())).expect("ready");
            chart.render().expect("render");
        })
    });
}

fn bench_ready_null_renderer_50(c: &mut Criterion) {
    let records = sample_records(50);

    c.bench_function("ready_null_renderer_50", |b| {
        b.iter(|| {
            let mut chart = DotPlotChart::new(NullRenderer::default(), ChartConfig::default())
                .expect("chart init");
            chart.ready(black_box(records.clone())).expect("ready");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_point_scale_rescale_500,
    bench_group_by_state_10k,
    bench_ready_and_render_svg_50,
    bench_ready_null_renderer_50
);
criterion_main!(benches);
