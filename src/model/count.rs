const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Formats a count compactly with `k`/`m` suffixes, e.g. `1500000` becomes `1.5m`.
///
/// The sign is dropped and the absolute value is formatted. Suffixed values are
/// rounded to one decimal, halves rounding up.
pub fn format_count(count: i64) -> String {
    let count = count.unsigned_abs();
    if count >= MILLION {
        format_tenths(count, MILLION, "m")
    } else if count >= THOUSAND {
        format_tenths(count, THOUSAND, "k")
    } else {
        count.to_string()
    }
}

fn format_tenths(count: u64, divisor: u64, suffix: &str) -> String {
    let tenths = (count as u128 * 10 + divisor as u128 / 2) / divisor as u128;

    format!("{}.{}{suffix}", tenths / 10, tenths % 10)
}
