use dotplot_rs::core::{LinearScale, PointScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_is_affine(
        a in -100.0f64..100.0,
        b in -100.0f64..100.0,
        t in 0.0f64..1.0
    ) {
        let scale = LinearScale::new(0.0, 18.0)
            .expect("valid scale")
            .with_range(0.0, 570.0)
            .expect("valid range");

        let mid = a + (b - a) * t;
        let expected = scale.map(a) + (scale.map(b) - scale.map(a)) * t;
        prop_assert!((scale.map(mid) - expected).abs() <= 1e-6);
    }

    #[test]
    fn linear_ticks_stay_inside_domain(
        start in -1_000.0f64..1_000.0,
        span in 0.001f64..5_000.0,
        count in 1usize..20
    ) {
        let end = start + span;
        let scale = LinearScale::new(start, end).expect("valid scale");
        let ticks = scale.ticks(count);
        for window in ticks.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        let tolerance = span * 1e-9;
        for tick in &ticks {
            prop_assert!(*tick >= start - tolerance && *tick <= end + tolerance);
        }
    }

    #[test]
    fn point_scale_rows_are_evenly_spaced_within_range(count in 1usize..60) {
        let names: Vec<String> = (0..count).map(|i| format!("state-{i}")).collect();
        let scale = PointScale::new(550.0, 0.0)
            .expect("valid scale")
            .with_padding(0.5)
            .expect("valid padding")
            .with_domain(names.iter().cloned());

        let positions: Vec<f64> = names
            .iter()
            .map(|name| scale.map(name).expect("known name"))
            .collect();

        let step = 550.0 / count as f64;
        prop_assert!((scale.step() - step).abs() <= 1e-9);
        for (index, position) in positions.iter().enumerate() {
            prop_assert!(*position > 0.0 && *position < 550.0);
            // First name sits on the bottom row.
            let expected = 550.0 - step / 2.0 - step * index as f64;
            prop_assert!((position - expected).abs() <= 1e-9);
        }
    }
}
