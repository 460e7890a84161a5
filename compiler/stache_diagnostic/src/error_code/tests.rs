use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_code_display() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E0005.as_str(), "E0005");
}

#[test]
fn all_variants_have_distinct_strings() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}

#[test]
fn parse_round_trips_every_code() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
}

#[test]
fn parse_is_case_insensitive() {
    assert_eq!("e0003".parse::<ErrorCode>(), Ok(ErrorCode::E0003));
}

#[test]
fn parse_rejects_unknown_codes() {
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
    assert_eq!("0001".parse::<ErrorCode>(), Err(()));
}
