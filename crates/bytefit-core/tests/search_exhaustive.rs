// crates/bytefit-core/tests/search_exhaustive.rs

use bytefit_core::extract::extract;
use bytefit_core::fit::evaluate::EvalParams;
use bytefit_core::fit::law::ScaleLaw;
use bytefit_core::hypothesis::params::{Endian, KeySource, Width};
use bytefit_core::hypothesis::space::SearchSpace;
use bytefit_core::sample::Sample;
use bytefit_core::search::{search, search_with_stats};

#[test]
fn planted_u16_value_is_recovered() {
    // 728 and 546 sit at offset 2 as u16 little-endian; factor 0.1 maps
    // them to the targets exactly.
    let samples = vec![
        Sample::from_hex("aabbd8020011", 72.8, "old").unwrap(),
        Sample::from_hex("aabb22020011", 54.6, "new").unwrap(),
    ];
    let space = SearchSpace::for_samples(&samples);
    let fits = search(&samples, &space, &EvalParams::default()).unwrap();

    let hit = fits.iter().find(|f| {
        f.hypothesis.offset == 2
            && f.hypothesis.width == Width::W16
            && f.hypothesis.endian == Endian::Little
            && f.hypothesis.mask.is_none()
            && f.hypothesis.key == KeySource::None
    });
    let hit = hit.expect("planted hypothesis not recovered");

    match hit.law {
        ScaleLaw::Multiplicative { factor } => assert!((factor - 0.1).abs() < 1e-9),
        other => panic!("wrong law class: {:?}", other),
    }
}

#[test]
fn documented_pair_terminates_and_reverifies() {
    let samples = vec![
        Sample::from_hex("9275416a58a0a02ca0a00db9", 72.8, "self_old").unwrap(),
        Sample::from_hex("9275416a58a0202c75a20db0", 54.6, "light").unwrap(),
    ];
    let space = SearchSpace::for_samples(&samples);
    let p = EvalParams::default();

    let (fits, stats) = search_with_stats(&samples, &space, &p).unwrap();
    assert_eq!(stats.hypotheses, space.len());
    assert_eq!(stats.evaluated + stats.infeasible, stats.hypotheses);

    // Every reported fit must stand on its own: re-apply the hypothesis
    // and law directly to both buffers.
    for fit in fits.iter() {
        let tol = match fit.law {
            ScaleLaw::Multiplicative { .. } => p.tol_multiplicative,
            ScaleLaw::Affine { .. } => p.tol_affine,
        };
        assert_eq!(fit.residuals.len(), samples.len());
        assert!(fit.max_abs_residual() <= tol + 1e-9);
        for (s, resid) in samples.iter().zip(fit.residuals.iter()) {
            let r = extract(&s.bytes, &fit.hypothesis).expect("reported fit must be feasible");
            let err = fit.law.apply(r) - s.target;
            assert!(err.abs() <= tol + 1e-9);
            assert!((err - resid).abs() < 1e-9);
        }
    }
}

#[test]
fn short_buffer_excludes_the_whole_hypothesis() {
    // Second buffer is 4 bytes; any window past it must not fit even
    // though the first buffer is long enough.
    let samples = vec![
        Sample::from_hex("aabbd8020011", 72.8, "long").unwrap(),
        Sample::from_hex("22020011", 54.6, "short").unwrap(),
    ];
    let space = SearchSpace::for_samples(&samples);
    let fits = search(&samples, &space, &EvalParams::default()).unwrap();

    for fit in fits.iter() {
        let end = fit.hypothesis.offset + fit.hypothesis.width.bytes();
        assert!(end <= 4, "fit window exceeds the shortest buffer: {}", fit.hypothesis);
    }
}

#[test]
fn search_is_deterministic_across_runs() {
    let samples = vec![
        Sample::from_hex("9275416a58a0a02ca0a00db9", 72.8, "a").unwrap(),
        Sample::from_hex("9275416a58a0202c75a20db0", 54.6, "b").unwrap(),
    ];
    let space = SearchSpace::for_samples(&samples);
    let p = EvalParams::default();

    let first = search(&samples, &space, &p).unwrap();
    let second = search(&samples, &space, &p).unwrap();
    assert_eq!(first, second);
}
