pub const CURRENCY_SYMBOL: &str = "$";

/// Formats minor currency units as major units with two decimals.
/// Negative amounts are not representable here; the catalog rejects them.
pub fn format_price(cents: u64) -> String {
    format!("{CURRENCY_SYMBOL}{}.{:02}", cents / 100, cents % 100)
}

/// Returns `noun` in the grammatical number of `count`.
/// The count itself is not part of the output.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
