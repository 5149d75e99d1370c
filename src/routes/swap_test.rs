use super::*;
use crate::constants::TOKEN_MAP;

#[test]
fn sanitize_amount_keeps_plain_decimals() {
    assert_eq!(sanitize_amount("123.45"), "123.45");
    assert_eq!(sanitize_amount("0.5"), "0.5");
    assert_eq!(sanitize_amount(""), "");
}

#[test]
fn sanitize_amount_strips_junk() {
    assert_eq!(sanitize_amount("12a.3-4"), "12.34");
    assert_eq!(sanitize_amount("abc"), "");
    assert_eq!(sanitize_amount("1e9"), "19");
}

#[test]
fn sanitize_amount_keeps_a_single_decimal_point() {
    assert_eq!(sanitize_amount("1.2.3"), "1.23");
    assert_eq!(sanitize_amount("..."), ".");
}

#[test]
fn lookup_resolves_known_symbols() {
    let token = lookup(&TOKEN_MAP, "USDC").expect("USDC missing from registry");
    assert_eq!(token.decimals, 6);
}

#[test]
fn lookup_rejects_unknown_symbols() {
    assert_eq!(lookup(&TOKEN_MAP, "NOPE"), Err(Error::UnknownToken));
}
