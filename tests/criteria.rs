use decisionseer::{Criterion, DecisionError, DecisionMaker, DEFAULT_SUMMARY_ALPHA};
use proptest::prelude::*;

fn business_case() -> DecisionMaker {
    DecisionMaker::new(vec![
        vec![3000.0, 1500.0, -500.0],
        vec![2000.0, 2000.0, 2000.0],
        vec![5000.0, -1000.0, -2000.0],
    ])
    .unwrap()
}

fn row_max(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn row_min(row: &[f64]) -> f64 {
    row.iter().copied().fold(f64::INFINITY, f64::min)
}

fn payoff_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(-1.0e6..1.0e6f64, cols), rows)
    })
}

#[test]
fn construction_rejects_malformed_matrices() {
    assert!(matches!(
        DecisionMaker::new(vec![]),
        Err(DecisionError::InvalidMatrix(_))
    ));
    assert!(matches!(
        DecisionMaker::new(vec![vec![1.0, 2.0], vec![3.0]]),
        Err(DecisionError::InvalidMatrix(_))
    ));
}

#[test]
fn hurwicz_rejects_alpha_above_one() {
    assert!(matches!(
        business_case().hurwicz(1.5),
        Err(DecisionError::InvalidParameter(_))
    ));
}

#[test]
fn business_case_end_to_end() {
    let engine = business_case();

    let maximax = engine.maximax();
    assert_eq!(maximax.alternative, "Alternative 3");
    assert_eq!(maximax.value, 5000.0);

    let maximin = engine.maximin();
    assert_eq!(maximin.alternative, "Alternative 2");
    assert_eq!(maximin.value, 2000.0);

    let laplace = engine.laplace();
    assert_eq!(laplace.alternative, "Alternative 2");
    assert_eq!(format!("{:.2}", laplace.value), "2000.00");

    let regrets = engine.regret_matrix();
    assert_eq!(regrets[0], vec![2000.0, 500.0, 2500.0]);
    assert_eq!(row_max(&regrets[0]), 2500.0);

    // the recommendation is whichever row has the smallest recomputed worst regret
    let worst: Vec<f64> = regrets.iter().map(|row| row_max(row)).collect();
    let smallest = worst.iter().copied().fold(f64::INFINITY, f64::min);
    let expected = worst.iter().position(|w| *w == smallest).unwrap();
    let regret = engine.minimax_regret();
    assert_eq!(regret.index, expected);
    assert_eq!(regret.value, smallest);
}

#[test]
fn evaluate_all_defaults_to_summary_alpha() {
    let engine = business_case();
    let evaluation = engine.evaluate_all(DEFAULT_SUMMARY_ALPHA).unwrap();

    let hurwicz = evaluation.get(Criterion::Hurwicz).unwrap();
    assert_eq!(hurwicz.alternative, "Alternative 3");
    assert!((hurwicz.value - 2200.0).abs() < 1e-9);
    for criterion in Criterion::ALL {
        assert!(evaluation.get(criterion).is_some(), "missing {}", criterion);
    }
}

#[test]
fn engine_is_shareable_between_threads() {
    let engine = std::sync::Arc::new(business_case());
    let expected = engine.evaluate_all(0.6).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || engine.evaluate_all(0.6).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn chosen_alternatives_are_in_range(matrix in payoff_matrix(), alpha in 0.0..=1.0f64) {
        let rows = matrix.len();
        let engine = DecisionMaker::new(matrix).unwrap();
        let evaluation = engine.evaluate_all(alpha).unwrap();

        for (_, decision) in evaluation.iter() {
            prop_assert!(decision.index < rows);
            prop_assert_eq!(&decision.alternative, &engine.alternatives()[decision.index]);
        }
    }

    #[test]
    fn maximax_and_maximin_report_the_true_extremes(matrix in payoff_matrix()) {
        let maxima: Vec<f64> = matrix.iter().map(|r| row_max(r)).collect();
        let minima: Vec<f64> = matrix.iter().map(|r| row_min(r)).collect();
        let engine = DecisionMaker::new(matrix).unwrap();

        prop_assert_eq!(engine.maximax().value, row_max(&maxima));
        prop_assert_eq!(engine.maximin().value, row_max(&minima));
    }

    #[test]
    fn hurwicz_endpoints_match_maximax_and_maximin(matrix in payoff_matrix()) {
        let engine = DecisionMaker::new(matrix).unwrap();

        prop_assert_eq!(engine.hurwicz(1.0).unwrap(), engine.maximax());
        prop_assert_eq!(engine.hurwicz(0.0).unwrap(), engine.maximin());
    }

    #[test]
    fn regret_is_non_negative_and_zero_somewhere_per_state(matrix in payoff_matrix()) {
        let engine = DecisionMaker::new(matrix).unwrap();
        let regrets = engine.regret_matrix();

        for row in &regrets {
            prop_assert!(row.iter().all(|r| *r >= 0.0));
        }
        for col in 0..engine.cols() {
            prop_assert!(regrets.iter().any(|row| row[col] == 0.0));
        }
    }

    #[test]
    fn laplace_value_is_the_row_mean(matrix in payoff_matrix()) {
        let engine = DecisionMaker::new(matrix).unwrap();
        let decision = engine.laplace();
        let row = &engine.matrix()[decision.index];
        let mean = row.iter().sum::<f64>() / row.len() as f64;

        prop_assert!((decision.value - mean).abs() <= 1e-9 * mean.abs().max(1.0));
    }

    #[test]
    fn evaluation_is_deterministic(matrix in payoff_matrix(), alpha in 0.0..=1.0f64) {
        let engine = DecisionMaker::new(matrix).unwrap();
        prop_assert_eq!(engine.evaluate_all(alpha).unwrap(), engine.evaluate_all(alpha).unwrap());
    }

    #[test]
    fn out_of_range_alpha_is_rejected(matrix in payoff_matrix(), alpha in 1.0001..100.0f64) {
        let engine = DecisionMaker::new(matrix).unwrap();
        prop_assert!(matches!(engine.hurwicz(alpha), Err(DecisionError::InvalidParameter(_))));
        prop_assert!(matches!(engine.hurwicz(-alpha), Err(DecisionError::InvalidParameter(_))));
    }
}
