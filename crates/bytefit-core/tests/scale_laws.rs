// crates/bytefit-core/tests/scale_laws.rs

use bytefit_core::fit::evaluate::{evaluate, fit_affine, fit_multiplicative, EvalParams};
use bytefit_core::fit::law::ScaleLaw;

#[test]
fn multiplicative_derives_factor_from_first_sample() {
    let readings = [100u64, 50];
    let targets = [72.8, 36.4];

    let (law, residuals) =
        fit_multiplicative(&readings, &targets, &EvalParams::default()).expect("fit");

    match law {
        ScaleLaw::Multiplicative { factor } => assert!((factor - 0.728).abs() < 1e-9),
        other => panic!("wrong law class: {:?}", other),
    }
    assert_eq!(residuals.len(), 2);
    for r in residuals {
        assert!(r.abs() < 1e-9);
    }
}

#[test]
fn multiplicative_rejects_a_perturbed_target() {
    let readings = [100u64, 50];
    let targets = [72.8, 40.0];
    assert!(fit_multiplicative(&readings, &targets, &EvalParams::default()).is_none());
}

#[test]
fn multiplicative_skips_zero_base_reading() {
    let readings = [0u64, 50];
    let targets = [0.0, 36.4];
    assert!(fit_multiplicative(&readings, &targets, &EvalParams::default()).is_none());
}

#[test]
fn candidate_factor_list_restricts_the_law() {
    let readings = [7280u64, 5460];
    let targets = [72.8, 54.6];

    let listed = EvalParams {
        factors: Some(vec![0.01, 0.005]),
        ..EvalParams::default()
    };
    let (law, _) = fit_multiplicative(&readings, &targets, &listed).expect("fit at 0.01");
    match law {
        ScaleLaw::Multiplicative { factor } => assert_eq!(factor, 0.01),
        other => panic!("wrong law class: {:?}", other),
    }

    // The same readings at a tenth of the magnitude need factor 0.1,
    // which the list does not offer.
    let readings = [728u64, 546];
    assert!(fit_multiplicative(&readings, &targets, &listed).is_none());
    // Without the list the derived factor covers it.
    assert!(fit_multiplicative(&readings, &targets, &EvalParams::default()).is_some());
}

#[test]
fn affine_recovers_slope_and_intercept() {
    let readings = [10u64, 20, 15];
    let targets = [25.0, 45.0, 35.0];

    let (law, residuals) = fit_affine(&readings, &targets, 0.2).expect("fit");
    match law {
        ScaleLaw::Affine { slope, intercept } => {
            assert!((slope - 2.0).abs() < 1e-9);
            assert!((intercept - 5.0).abs() < 1e-9);
        }
        other => panic!("wrong law class: {:?}", other),
    }
    for r in residuals {
        assert!(r.abs() < 1e-9);
    }
}

#[test]
fn affine_rejects_a_sample_off_the_line() {
    let readings = [10u64, 20, 15, 30];
    let targets = [25.0, 45.0, 35.0, 80.0];
    assert!(fit_affine(&readings, &targets, 0.2).is_none());
}

#[test]
fn affine_skips_equal_base_readings() {
    let readings = [10u64, 10, 15];
    let targets = [25.0, 26.0, 35.0];
    assert!(fit_affine(&readings, &targets, 0.2).is_none());
}

#[test]
fn affine_needs_a_third_sample_to_check() {
    // Any two distinct readings define a line; nothing is verified, so
    // the class yields no fit at all.
    let readings = [10u64, 20];
    let targets = [25.0, 45.0];
    assert!(fit_affine(&readings, &targets, 0.2).is_none());
}

#[test]
fn evaluate_reports_both_law_classes_independently() {
    // Exact y = 2x + 0 line through the origin: both classes accept.
    let readings = [10u64, 20, 30];
    let targets = [20.0, 40.0, 60.0];

    let hits = evaluate(&readings, &targets, &EvalParams::default());
    assert_eq!(hits.len(), 2);
    assert!(matches!(hits[0].0, ScaleLaw::Multiplicative { .. }));
    assert!(matches!(hits[1].0, ScaleLaw::Affine { .. }));
}
