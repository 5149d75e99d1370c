use super::*;

#[test]
fn embedded_registry_parses() {
    assert!(!TOKEN_MAP.is_empty());
    let eth = TOKEN_MAP.get("ETH").expect("ETH missing from registry");
    assert_eq!(eth.decimals, 18);
    assert_eq!(eth.name, "Ether");
}

#[test]
fn registry_keys_match_token_symbols() {
    for (key, token) in TOKEN_MAP.iter() {
        assert_eq!(key, &token.symbol);
    }
}

#[test]
fn malformed_registry_reports_a_serde_error() {
    assert!(matches!(parse_registry("{"), Err(Error::Serde(_))));
}
