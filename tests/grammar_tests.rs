//! Inputs that must be rejected under strict RFC-7159 number grammar.

use elparse::parse_double;

#[test]
fn rejects_malformed_literals() {
    let bad = [
        "", "NaN", "Infinity", "+1", "01", "1.", ".5", " 1", "0x1", "-", "1e", "1e+", "1-2", "1e1.5",
    ];
    for s in bad {
        assert!(parse_double(s).is_err(), "expected {s:?} to be rejected");
    }
}

#[test]
fn accepts_well_formed_literals() {
    let good = ["0", "-0", "0.0", "1", "-1", "1.5", "1e10", "1E10", "1e+10", "1e-10", "123.456e-7"];
    for s in good {
        assert!(parse_double(s).is_ok(), "expected {s:?} to be accepted");
    }
}

#[test]
fn error_messages_name_the_offset() {
    let err = parse_double("1.2.3").unwrap_err();
    assert!(err.to_string().contains("byte offset"));
}
