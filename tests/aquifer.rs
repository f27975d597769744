use approx::assert_relative_eq;
use hydrogeo::{
    bouwer_rice_k, cooper_jacob_storativity, cooper_jacob_transmissivity, hvorslev_k,
    theis_drawdown, well_function, HydroGeoError,
};

#[test]
fn test_cooper_jacob_transmissivity_value() {
    // T = 2.3 * 0.01 / (4 * pi * 0.5)
    let t = cooper_jacob_transmissivity(0.01, 0.5).unwrap();
    assert_relative_eq!(t, 0.003660563691113593, max_relative = 1.0e-12);
    assert_relative_eq!(t, 0.003663, max_relative = 1.0e-3);
}

#[test]
fn test_cooper_jacob_transmissivity_rejects_non_positive_inputs() {
    assert!(matches!(
        cooper_jacob_transmissivity(0.0, 0.5),
        Err(HydroGeoError::InvalidParameter(_))
    ));
    assert!(cooper_jacob_transmissivity(-0.01, 0.5).is_err());
    assert!(cooper_jacob_transmissivity(0.01, 0.0).is_err());
    assert!(cooper_jacob_transmissivity(0.01, -0.5).is_err());
}

#[test]
fn test_cooper_jacob_storativity_value() {
    // S = 2.25 * 1e-3 * 120 / 10^2
    let s = cooper_jacob_storativity(1.0e-3, 120.0, 10.0).unwrap();
    assert_relative_eq!(s, 0.0027, max_relative = 1.0e-12);
}

#[test]
fn test_cooper_jacob_storativity_rejects_non_positive_inputs() {
    assert!(cooper_jacob_storativity(0.0, 120.0, 10.0).is_err());
    assert!(cooper_jacob_storativity(1.0e-3, 0.0, 10.0).is_err());
    assert!(cooper_jacob_storativity(1.0e-3, 120.0, 0.0).is_err());
    assert!(cooper_jacob_storativity(-1.0e-3, -120.0, -10.0).is_err());
}

#[test]
fn test_theis_drawdown_reference_case() {
    // Q = 0.01 m^3/s, T = 1e-3 m^2/s, S = 1e-4, r = 10 m, t = 3600 s.
    let result = theis_drawdown(0.01, 1.0e-3, 1.0e-4, 10.0, 3600.0).unwrap();
    assert_relative_eq!(result.u, 0.0006944444444444445, max_relative = 1.0e-15);
    assert_relative_eq!(result.drawdown, 5.328409655463395, max_relative = 1.0e-12);
}

#[test]
fn test_theis_exposes_u_exactly_as_computed() {
    let (q, t, s, r, time) = (0.02, 5.0e-4, 2.0e-4, 25.0, 7200.0);
    let result = theis_drawdown(q, t, s, r, time).unwrap();
    let expected_u = (r * r * s) / (4.0 * t * time);
    assert_eq!(result.u.to_bits(), expected_u.to_bits());
}

#[test]
fn test_theis_composes_the_well_function() {
    let (q, t, s, r, time) = (0.01, 2.0e-3, 1.0e-4, 30.0, 1800.0);
    let result = theis_drawdown(q, t, s, r, time).unwrap();
    let w = well_function(result.u).unwrap();
    let expected = (q / (4.0 * std::f64::consts::PI * t)) * w;
    assert_eq!(result.drawdown.to_bits(), expected.to_bits());
}

#[test]
fn test_theis_u_formula_holds_in_the_large_u_regime_too() {
    // Short time and large radius push u above the regime crossover.
    let (q, t, s, r, time) = (0.01, 1.0e-4, 1.0e-3, 50.0, 100.0);
    let result = theis_drawdown(q, t, s, r, time).unwrap();
    let expected_u = (r * r * s) / (4.0 * t * time);
    assert!(expected_u > 2.0);
    assert_eq!(result.u.to_bits(), expected_u.to_bits());
    assert!(result.drawdown > 0.0);
}

#[test]
fn test_theis_rejects_each_non_positive_argument() {
    let ok = (0.01, 1.0e-3, 1.0e-4, 10.0, 3600.0);
    assert!(theis_drawdown(0.0, ok.1, ok.2, ok.3, ok.4).is_err());
    assert!(theis_drawdown(ok.0, -1.0e-3, ok.2, ok.3, ok.4).is_err());
    assert!(theis_drawdown(ok.0, ok.1, 0.0, ok.3, ok.4).is_err());
    assert!(theis_drawdown(ok.0, ok.1, ok.2, -10.0, ok.4).is_err());
    assert!(theis_drawdown(ok.0, ok.1, ok.2, ok.3, 0.0).is_err());
}

#[test]
fn test_theis_drawdown_grows_with_time() {
    // Later times mean smaller u and larger W(u), hence deeper drawdown.
    let early = theis_drawdown(0.01, 1.0e-3, 1.0e-4, 10.0, 600.0).unwrap();
    let late = theis_drawdown(0.01, 1.0e-3, 1.0e-4, 10.0, 86400.0).unwrap();
    assert!(late.u < early.u);
    assert!(late.drawdown > early.drawdown);
}

#[test]
fn test_hvorslev_reference_case() {
    // r = 5 cm, L = 2 m screen, t37 = 60 s.
    let k = hvorslev_k(0.05, 2.0, 60.0).unwrap();
    assert_relative_eq!(k, 3.842582764702018e-5, max_relative = 1.0e-12);
}

#[test]
fn test_hvorslev_validation() {
    assert!(hvorslev_k(0.0, 2.0, 60.0).is_err());
    assert!(hvorslev_k(0.05, 0.0, 60.0).is_err());
    assert!(hvorslev_k(0.05, 2.0, 0.0).is_err());
    // Screen length must exceed the radius, equality included.
    assert!(hvorslev_k(0.05, 0.05, 60.0).is_err());
    assert!(hvorslev_k(0.2, 0.1, 60.0).is_err());
}

#[test]
fn test_hvorslev_constraint_is_named_in_the_message() {
    let err = hvorslev_k(0.2, 0.1, 60.0).unwrap_err();
    assert!(err.to_string().contains("L must be greater than r"));
}

#[test]
fn test_bouwer_rice_reference_case() {
    // rw = 5 cm, re = 10 m, L = 3 m, t37 = 45 s.
    let k = bouwer_rice_k(0.05, 10.0, 3.0, 45.0).unwrap();
    assert_relative_eq!(k, 4.905849413470405e-5, max_relative = 1.0e-12);
}

#[test]
fn test_bouwer_rice_validation() {
    assert!(bouwer_rice_k(0.0, 10.0, 3.0, 45.0).is_err());
    assert!(bouwer_rice_k(0.05, 0.0, 3.0, 45.0).is_err());
    assert!(bouwer_rice_k(0.05, 10.0, 0.0, 45.0).is_err());
    assert!(bouwer_rice_k(0.05, 10.0, 3.0, 0.0).is_err());
    assert!(bouwer_rice_k(0.05, 0.05, 3.0, 45.0).is_err());
    assert!(bouwer_rice_k(10.0, 0.05, 3.0, 45.0).is_err());
}
