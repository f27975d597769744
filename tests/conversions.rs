use approx::assert_relative_eq;
use hydrogeo::{convert_conductivity, convert_flow_rate, convert_length, HydroGeoError};

#[test]
fn test_exact_reference_conversions() {
    assert_eq!(convert_length(10.0, "ft", "m").unwrap(), 3.048);
    assert_eq!(
        convert_flow_rate(1.0, "gpm", "l/s").unwrap(),
        0.0630901964
    );
    assert_eq!(
        convert_conductivity(1.0, "m/s", "m/day").unwrap(),
        86400.0
    );
}

#[test]
fn test_reverse_direction_divides_by_the_factor() {
    assert_relative_eq!(
        convert_length(100.0, "m", "ft").unwrap(),
        328.0839895013123,
        max_relative = 1.0e-12
    );
    assert_relative_eq!(
        convert_flow_rate(2.5, "l/s", "gpm").unwrap(),
        39.62580785372226,
        max_relative = 1.0e-12
    );
    assert_relative_eq!(
        convert_conductivity(86.4, "m/day", "m/s").unwrap(),
        0.001,
        max_relative = 1.0e-12
    );
}

#[test]
fn test_identity_conversion_is_bitwise_exact() {
    // Same unit on both sides performs no arithmetic at all.
    let awkward = 0.1 + 0.2;
    assert_eq!(
        convert_length(awkward, "m", "m").unwrap().to_bits(),
        awkward.to_bits()
    );
    assert_eq!(
        convert_flow_rate(-7.25, "gpm", "GPM").unwrap().to_bits(),
        (-7.25f64).to_bits()
    );
    assert_eq!(
        convert_conductivity(1.0e-300, "m/s", "M/S").unwrap().to_bits(),
        1.0e-300f64.to_bits()
    );
}

#[test]
fn test_round_trip_recovers_the_value() {
    let values = [1.0e-9, 0.37, 1.0, 123.456, 9.9e8];
    for &v in &values {
        let there_and_back =
            convert_length(convert_length(v, "ft", "m").unwrap(), "m", "ft").unwrap();
        assert_relative_eq!(there_and_back, v, max_relative = 1.0e-9);

        let there_and_back =
            convert_flow_rate(convert_flow_rate(v, "gpm", "l/s").unwrap(), "l/s", "gpm").unwrap();
        assert_relative_eq!(there_and_back, v, max_relative = 1.0e-9);

        let there_and_back = convert_conductivity(
            convert_conductivity(v, "m/day", "m/s").unwrap(),
            "m/s",
            "m/day",
        )
        .unwrap();
        assert_relative_eq!(there_and_back, v, max_relative = 1.0e-9);
    }
}

#[test]
fn test_unit_spellings_are_case_and_space_insensitive() {
    assert_eq!(convert_length(1.0, " FT ", "m").unwrap(), 0.3048);
    assert_eq!(
        convert_flow_rate(1.0, "GPM", "L / s").unwrap(),
        0.0630901964
    );
    assert_eq!(
        convert_flow_rate(1.0, "gpm", "ls").unwrap(),
        0.0630901964
    );
    assert_eq!(
        convert_conductivity(1.0, "M / S", "m/DAY").unwrap(),
        86400.0
    );
}

#[test]
fn test_invalid_units_are_rejected_per_family() {
    // Valid in one family, invalid in another.
    assert!(matches!(
        convert_length(1.0, "gpm", "m"),
        Err(HydroGeoError::InvalidUnit { family: "length", .. })
    ));
    assert!(matches!(
        convert_flow_rate(1.0, "gpm", "m"),
        Err(HydroGeoError::InvalidUnit { family: "flow rate", .. })
    ));
    assert!(matches!(
        convert_conductivity(1.0, "ft", "m/day"),
        Err(HydroGeoError::InvalidUnit { family: "conductivity", .. })
    ));
}

#[test]
fn test_invalid_unit_message_cites_the_allowed_set() {
    let err = convert_length(1.0, "yd", "m").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("yd"));
    assert!(message.contains("ft"));
    assert!(message.contains("m"));
}
