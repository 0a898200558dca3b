use super::*;

#[test]
fn parses_canonical_hex_in_either_case() {
    assert_eq!(parse_hex("#4361ee").unwrap(), Color::rgb(0x43, 0x61, 0xee));
    assert_eq!(parse_hex("#4361EE").unwrap(), Color::rgb(0x43, 0x61, 0xee));
    assert_eq!("#000000".parse::<Color>().unwrap(), Color::BLACK);
}

#[test]
fn rejects_malformed_hex() {
    for bad in [
        "", "#", "4361ee", "#fff", "#4361e", "#4361eee", "#4361ee80", "#43g1ee", "#+f0000",
        " #4361ee", "#4361ee ",
    ] {
        let err = parse_hex(bad).unwrap_err();
        assert!(
            matches!(err, BannerError::ColorFormat(_)),
            "expected color format error for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn to_hex_is_lowercase_and_roundtrips() {
    let c = Color::rgb(0xE7, 0x6F, 0x51);
    assert_eq!(c.to_hex(), "#e76f51");
    assert_eq!(c.to_string(), "#e76f51");
    assert_eq!(parse_hex(&c.to_hex()).unwrap(), c);
}

#[test]
fn interpolate_same_color_is_identity() {
    let c = Color::rgb(17, 128, 251);
    for f in [0.0, 0.1, 0.25, 0.5, 0.73, 0.99, 1.0] {
        assert_eq!(interpolate(c, c, f), c);
    }
}

#[test]
fn interpolate_endpoints_match_inputs() {
    let a = Color::rgb(0x43, 0x61, 0xee);
    let b = Color::rgb(0x3f, 0x37, 0xc9);
    assert_eq!(interpolate(a, b, 0.0), a);
    assert_eq!(interpolate(a, b, 1.0), b);
}

#[test]
fn interpolate_rounds_midpoint() {
    let out = interpolate(Color::rgb(0, 0, 0), Color::rgb(255, 1, 10), 0.5);
    assert_eq!(out, Color::rgb(128, 1, 5));
}

#[test]
fn interpolate_clamps_factor() {
    let a = Color::rgb(10, 20, 30);
    let b = Color::rgb(200, 210, 220);
    assert_eq!(interpolate(a, b, -3.0), a);
    assert_eq!(interpolate(a, b, 7.0), b);
    assert_eq!(interpolate(a, b, f32::NAN), a);
}

#[test]
fn serde_uses_hex_strings() {
    let c: Color = serde_json::from_value(serde_json::json!("#2b2d42")).unwrap();
    assert_eq!(c, Color::rgb(0x2b, 0x2d, 0x42));
    assert_eq!(serde_json::to_value(c).unwrap(), serde_json::json!("#2b2d42"));
    assert!(serde_json::from_value::<Color>(serde_json::json!("#abc")).is_err());
}
