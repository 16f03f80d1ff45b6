#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = THOUSAND * 1_000.0;
const BILLION: f64 = MILLION * 1_000.0;

/// Short badge text for a count: `999`, `1.5K`, `2.0M`, `3.1B`.
pub fn format_count(value: usize) -> String {
    let v = value as f64;
    if v < THOUSAND {
        value.to_string()
    } else if v < MILLION {
        format!("{:.1}K", v / THOUSAND)
    } else if v < BILLION {
        format!("{:.1}M", v / MILLION)
    } else {
        format!("{:.1}B", v / BILLION)
    }
}
