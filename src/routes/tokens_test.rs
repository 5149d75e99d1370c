use super::*;
use crate::constants::TOKEN_MAP;

#[test]
fn sorted_tokens_orders_by_symbol() {
    let tokens = sorted_tokens(&TOKEN_MAP);
    let symbols: Vec<&str> = tokens.iter().map(|token| token.symbol.as_str()).collect();

    let mut expected = symbols.clone();
    expected.sort_unstable();
    assert_eq!(symbols, expected);
}

#[test]
fn sorted_tokens_keeps_every_entry() {
    assert_eq!(sorted_tokens(&TOKEN_MAP).len(), TOKEN_MAP.len());
}

#[test]
fn sorted_tokens_handles_an_empty_registry() {
    assert!(sorted_tokens(&HashMap::new()).is_empty());
}
