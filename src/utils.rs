#[cfg(test)]
#[path = "utils_test.rs"]
mod utils_test;

/// Formats a raw integer amount as a decimal string, showing at most three
/// fractional digits.
pub fn humanize_token_amount(amount: impl Into<u128>, decimals: impl Into<u32>) -> String {
    let value = amount.into();
    let decimals = decimals.into();

    if decimals == 0 {
        return value.to_string();
    }

    let factor = 10u128.pow(decimals);
    let shown = decimals.min(3) as usize;

    let integer_part = value / factor;
    let fractional_part = value % factor;
    let fractional = format!("{:0width$}", fractional_part, width = decimals as usize);

    format!("{}.{}", integer_part, &fractional[..shown])
}
