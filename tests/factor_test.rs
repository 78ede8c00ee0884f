use adaptive_styles::{FactorCalculator, FactorError, ScalingConfig, ViewportMetrics};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn config(design_width: f32, design_height: f32, minimal_factor: f32) -> ScalingConfig {
    ScalingConfig {
        design_width,
        design_height,
        minimal_factor,
        ..ScalingConfig::default()
    }
}

#[test]
fn doubled_viewport_doubles_every_factor() {
    let factors = FactorCalculator::compute(
        ViewportMetrics::new(828.0, 1792.0),
        &config(414.0, 896.0, 1.0),
    )
    .unwrap();

    assert_eq!(factors.width, 2.0);
    assert_eq!(factors.height, 2.0);
    assert_eq!(factors.average, 2.0);
}

#[test]
fn small_viewport_smooths_toward_floor_instead_of_clamping() {
    let factors = FactorCalculator::compute(
        ViewportMetrics::new(200.0, 400.0),
        &config(414.0, 896.0, 1.2),
    )
    .unwrap();

    let expected_width = ((200.0_f32 / 414.0) + 1.2) / 2.0;
    let expected_height = ((400.0_f32 / 896.0) + 1.2) / 2.0;

    assert_eq!(factors.width, expected_width);
    assert_eq!(factors.height, expected_height);
    assert!(factors.width < 1.2, "smoothing must not clamp to the floor");
    assert!(factors.width > 200.0 / 414.0);
}

#[test]
fn factor_at_or_above_floor_is_the_plain_ratio() {
    let factors = FactorCalculator::compute(
        ViewportMetrics::new(621.0, 1344.0),
        &config(414.0, 896.0, 1.2),
    )
    .unwrap();

    assert_eq!(factors.width, 1.5);
    assert_eq!(factors.height, 1.5);
}

#[test]
fn zero_minimal_factor_disables_smoothing() {
    let factors = FactorCalculator::compute(
        ViewportMetrics::new(207.0, 448.0),
        &config(414.0, 896.0, 0.0),
    )
    .unwrap();

    assert_eq!(factors.width, 0.5);
    assert_eq!(factors.height, 0.5);
}

#[test]
fn non_positive_design_dimensions_are_rejected() {
    let err = FactorCalculator::compute(
        ViewportMetrics::new(828.0, 1792.0),
        &config(0.0, 896.0, 1.0),
    )
    .unwrap_err();
    assert!(matches!(err, FactorError::InvalidDesignSize { .. }));

    let err = FactorCalculator::compute(
        ViewportMetrics::new(828.0, 1792.0),
        &config(414.0, -896.0, 1.0),
    )
    .unwrap_err();
    assert!(matches!(err, FactorError::InvalidDesignSize { .. }));
}

#[test]
fn negative_or_non_finite_minimal_factor_is_rejected() {
    let err = FactorCalculator::compute(
        ViewportMetrics::new(828.0, 1792.0),
        &config(414.0, 896.0, -0.5),
    )
    .unwrap_err();
    assert!(matches!(err, FactorError::InvalidMinimalFactor(_)));

    let err = FactorCalculator::compute(
        ViewportMetrics::new(828.0, 1792.0),
        &config(414.0, 896.0, f32::NAN),
    )
    .unwrap_err();
    assert!(matches!(err, FactorError::InvalidMinimalFactor(_)));
}

#[test]
fn degenerate_viewport_is_rejected() {
    for (w, h) in [(0.0, 896.0), (414.0, 0.0), (f32::NAN, 896.0), (414.0, f32::INFINITY)] {
        let err =
            FactorCalculator::compute(ViewportMetrics::new(w, h), &config(414.0, 896.0, 1.0))
                .unwrap_err();
        assert!(matches!(err, FactorError::InvalidViewport { .. }), "{w}x{h}");
    }
}

proptest! {
    #[test]
    fn average_is_always_the_mean_of_the_axes(
        vw in 1.0f32..4000.0,
        vh in 1.0f32..4000.0,
        dw in 1.0f32..4000.0,
        dh in 1.0f32..4000.0,
        floor in 0.0f32..3.0,
    ) {
        let factors =
            FactorCalculator::compute(ViewportMetrics::new(vw, vh), &config(dw, dh, floor))
                .unwrap();
        prop_assert_eq!(factors.average, (factors.width + factors.height) / 2.0);
        prop_assert!(factors.width > 0.0);
        prop_assert!(factors.height > 0.0);
    }

    #[test]
    fn computation_is_deterministic(
        vw in 1.0f32..4000.0,
        vh in 1.0f32..4000.0,
        floor in 0.0f32..3.0,
    ) {
        let cfg = config(414.0, 896.0, floor);
        let viewport = ViewportMetrics::new(vw, vh);
        let first = FactorCalculator::compute(viewport, &cfg).unwrap();
        let second = FactorCalculator::compute(viewport, &cfg).unwrap();
        prop_assert_eq!(first, second);
    }
}
