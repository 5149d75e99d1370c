use super::*;

#[test]
fn humanize_truncates_to_three_fractional_digits() {
    assert_eq!(humanize_token_amount(1_500_000u128, 6u32), "1.500");
    assert_eq!(humanize_token_amount(1_234_567u128, 6u32), "1.234");
}

#[test]
fn humanize_pads_small_amounts() {
    assert_eq!(humanize_token_amount(1u128, 6u32), "0.000");
    assert_eq!(humanize_token_amount(0u128, 18u32), "0.000");
}

#[test]
fn humanize_keeps_short_fractions_whole() {
    assert_eq!(humanize_token_amount(1234u128, 2u32), "12.34");
}

#[test]
fn humanize_handles_zero_decimals() {
    assert_eq!(humanize_token_amount(5u128, 0u32), "5");
}
