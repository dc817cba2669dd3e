//! Property tests for normalization and scoring invariants.

use carsize::{ConfusionMatrix, Dataset, Label, Point, Rule, evaluate, normalize};
use proptest::collection::vec;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = Label> {
    prop_oneof![Just(Label::Negative), Just(Label::Positive)]
}

fn points(range: f64, len: std::ops::Range<usize>) -> impl Strategy<Value = Dataset> {
    vec((-range..range, -range..range, label()), len).prop_map(|rows| {
        rows.into_iter()
            .map(|(x, y, class)| Point::new(x, y, class))
            .collect::<Dataset>()
    })
}

fn matrix() -> impl Strategy<Value = ConfusionMatrix> {
    (0usize..500, 0usize..500, 0usize..500, 0usize..500).prop_map(|(tp, fp, tn, fn_)| {
        ConfusionMatrix {
            true_positive: tp,
            false_positive: fp,
            true_negative: tn,
            false_negative: fn_,
        }
    })
}

fn axis_extremes(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_matrix_total_matches_dataset(data in points(100_000.0, 0..200)) {
        for rule in [Rule::Original, Rule::Normalized] {
            let cm = evaluate(&data, rule);
            prop_assert_eq!(cm.total(), data.len());
        }
    }

    #[test]
    fn prop_metrics_bounded(cm in matrix()) {
        let m = cm.metrics();
        for value in [m.accuracy, m.precision, m.recall, m.f1_score] {
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=1.0).contains(&value), "metric {} out of range", value);
        }
    }

    #[test]
    fn prop_zero_denominator_guards(tn in 0usize..100, fn_ in 0usize..100, fp in 0usize..100) {
        let no_predicted_positive = ConfusionMatrix {
            true_positive: 0,
            false_positive: 0,
            true_negative: tn,
            false_negative: fn_,
        };
        prop_assert_eq!(no_predicted_positive.precision(), 0.0);

        let no_actual_positive = ConfusionMatrix {
            true_positive: 0,
            false_positive: fp,
            true_negative: tn,
            false_negative: 0,
        };
        prop_assert_eq!(no_actual_positive.recall(), 0.0);
    }

    #[test]
    fn prop_normalized_axes_span_unit_interval(data in points(1_000.0, 2..100)) {
        let out = normalize(&data);
        prop_assert_eq!(out.len(), data.len());

        let (raw_x_lo, raw_x_hi) = axis_extremes(data.iter().map(|p| p.x));
        let (raw_y_lo, raw_y_hi) = axis_extremes(data.iter().map(|p| p.y));
        let (x_lo, x_hi) = axis_extremes(out.iter().map(|p| p.x));
        let (y_lo, y_hi) = axis_extremes(out.iter().map(|p| p.y));

        if raw_x_hi > raw_x_lo {
            prop_assert_eq!((x_lo, x_hi), (0.0, 1.0));
        }
        if raw_y_hi > raw_y_lo {
            prop_assert_eq!((y_lo, y_hi), (0.0, 1.0));
        }
        prop_assert!(out.iter().all(|p| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
    }

    #[test]
    fn prop_normalize_keeps_labels_and_order(data in points(1_000.0, 0..100)) {
        let out = normalize(&data);
        let before: Vec<Label> = data.iter().map(|p| p.class).collect();
        let after: Vec<Label> = out.iter().map(|p| p.class).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_boundary_points_are_negative(x in -10.0f64..10.0) {
        let y = -x + 1.0;
        prop_assert_eq!(Rule::Normalized.predict(x, y), Label::Negative);
        let y = -x * 1000.0 + 70000.0;
        prop_assert_eq!(Rule::Original.predict(x * 1000.0, y), Label::Negative);
    }
}
