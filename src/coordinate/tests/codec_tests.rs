//! Tests for string parsing and canonical formatting

use super::test_utils::init_logging;
use crate::coordinate::{format_key, parse, try_parse, Coordinate, GeoPoint, ImmutableCoordinate, LatLon};
use crate::errors::CoordinateError;

#[test]
fn test_parse_valid_strings() {
    init_logging();
    let cases: [(&str, &str, f64, f64); 15] = [
        ("49.885617,14.044381", ",", 49.885617, 14.044381),
        ("-49.885617,14.044381", ",", -49.885617, 14.044381),
        ("49.885617,-14.044381", ",", 49.885617, -14.044381),
        ("-49.885617,-14.044381", ",", -49.885617, -14.044381),
        ("41.294708,174.834497", ",", 41.294708, 174.834497),
        ("-53.793036,-67.684591", ",", -53.793036, -67.684591),
        ("1.234567,0.123456", ",", 1.234567, 0.123456),
        ("1.234567_0.123456", "_", 1.234567, 0.123456),
        ("0,0", ",", 0.0, 0.0),
        ("0.000000,0.000000", ",", 0.0, 0.0),
        ("12.3456789, -98.7654321", ", ", 12.3456789, -98.7654321),
        ("-23.456, 45.678", ", ", -23.456, 45.678),
        ("-1.234567, 11.111111", ", ", -1.234567, 11.111111),
        ("1.234567__0.123456", "__", 1.234567, 0.123456),
        ("1.234_abcd_0.123", "_abcd_", 1.234, 0.123),
    ];

    for (text, delimiter, lat, lon) in cases {
        let coords: LatLon = parse(text, delimiter).unwrap_or_else(|| panic!("'{}' should parse", text));
        assert_eq!(coords.latitude(), lat, "{}", text);
        assert_eq!(coords.longitude(), lon, "{}", text);
    }
}

#[test]
fn test_parse_invalid_strings() {
    init_logging();
    let cases: [(&str, &str); 18] = [
        ("49.885617_14.044381", ","),
        ("49.885617,14.044381", "_"),
        ("49.885617abcd,14.044381", ","),
        ("49.885617,14.044381abcd", ","),
        ("abcd49.885617,14.044381", ","),
        ("49.885617,abcd14.044381", ","),
        ("abcd49.885617abcd,14.044381", ","),
        ("49.885617,abcd14.044381abcd", ","),
        ("1.234567__0.123456", "_"),
        ("1.234567__0.123456", "___"),
        ("12.3456789, -98.7654321", ","),
        ("-23.456, 45.678", ","),
        ("-1.234567, 11.111111", ","),
        ("some random text", ","),
        ("valid coords (49.885617,14.044381) but inside text", ","),
        ("95.885617,14.044381", ","),
        ("1.885617,180.044381", ","),
        ("1,2,3", ","),
    ];

    for (text, delimiter) in cases {
        assert!(parse::<LatLon>(text, delimiter).is_none(), "'{}' on '{}' should fail", text, delimiter);
        assert_eq!(
            try_parse::<LatLon>(text, delimiter).unwrap_err(),
            CoordinateError::ParseFailure(text.to_string())
        );
    }
}

#[test]
fn test_parse_empty_delimiter() {
    assert!(parse::<LatLon>("1,2", "").is_none());
}

#[test]
fn test_from_str_uses_comma() {
    let coords: Coordinate = "49.885617,14.044381".parse().unwrap();
    assert_eq!(coords.latitude(), 49.885617);
    assert_eq!(coords.longitude(), 14.044381);

    let frozen: ImmutableCoordinate = "-1.5,2.5".parse().unwrap();
    assert_eq!(frozen.key(), "-1.500000,2.500000");

    assert!("49.885617abcd,14.044381".parse::<Coordinate>().is_err());
}

#[test]
fn test_variant_parse_shortcuts() {
    assert!(Coordinate::parse("1.234567_0.123456", "_").is_some());
    assert!(ImmutableCoordinate::parse("1.234567_0.123456", "_").is_some());
    assert!(Coordinate::parse("some random text", ",").is_none());
}

#[test]
fn test_keys_have_six_decimals() {
    let cases: [(f64, f64, &str); 9] = [
        (49.885617, 14.044381, "49.885617,14.044381"),
        (-49.885617, -14.044381, "-49.885617,-14.044381"),
        (41.2947078, 174.8344972, "41.294708,174.834497"),
        (-53.7930356, -67.6845906, "-53.793036,-67.684591"),
        (0.0, 0.0, "0.000000,0.000000"),
        (90.0, 180.0, "90.000000,180.000000"),
        (-90.0, 180.0, "-90.000000,180.000000"),
        (90.0, -180.0, "90.000000,-180.000000"),
        (-90.0, -180.0, "-90.000000,-180.000000"),
    ];

    for (lat, lon, expected) in cases {
        let coords = LatLon::new(lat, lon).unwrap();
        assert_eq!(coords.key(), expected);
        assert_eq!(coords.to_string(), expected);
        assert_eq!(format_key(lat, lon, ","), expected);
    }
}

#[test]
fn test_custom_delimiter() {
    let coords = Coordinate::new(1.234567, 0.123456).unwrap();
    assert_eq!(coords.lat_lon("_"), "1.234567_0.123456");
    assert_eq!(coords.lat_lon(", "), "1.234567, 0.123456");

    let back = Coordinate::parse(&coords.lat_lon(";"), ";").unwrap();
    assert_eq!(back, coords);
}

#[test]
fn test_rounded_key_round_trip() {
    // parsing the key back gives the same key, though not the same floats
    let coords = Coordinate::new(41.2947078, 174.8344972).unwrap();
    let reparsed: Coordinate = coords.key().parse().unwrap();
    assert_eq!(reparsed.key(), coords.key());
    assert!((reparsed.latitude() - coords.latitude()).abs() < 1e-6);
}
