//! Unit normalizers: free-text measurement fields to canonical scalars.
//!
//! Pure `&str -> Option<T>` helpers in the same shape as the rest of the
//! extraction core: empty or malformed input yields `None`, never an error.
//! Matching is case-insensitive and anchors on the first textual occurrence,
//! not the whole string, because vendor values carry trailing prose
//! ("16 GB DDR5 RAM", "2.1 kg (4.63 lbs)").

use regex::Regex;

/// RAM size in gigabytes. `"16 GB"` → 16.0, `"16384 MB"` → 16.0,
/// `"1 TB"` → 1024.0; a unitless number is taken as already-GB.
#[must_use]
pub fn ram_size_gb(raw: &str) -> Option<f64> {
    let lower = raw.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    let re = Regex::new(r"(\d+(?:\.\d+)?)\s*(gb|mb|tb)?").expect("valid ram size regex");
    let caps = re.captures(&lower)?;
    let size: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(match caps.get(2).map(|m| m.as_str()) {
        Some("mb") => size / 1024.0,
        Some("tb") => size * 1024.0,
        _ => size,
    })
}

/// Display size in inches. `"15.6 Inches"` → 15.6, `"14\""` → 14.0.
#[must_use]
pub fn display_size_inches(raw: &str) -> Option<f64> {
    first_number(raw)
}

/// Battery life in hours. `"10 Hours"` → 10.0, `"7.5 hrs"` → 7.5.
#[must_use]
pub fn battery_life_hours(raw: &str) -> Option<f64> {
    first_number(raw)
}

/// Weight in kilograms. `"2.1 kg"` → 2.1, `"2100 g"` → 2.1; a unitless
/// number is taken as already-kg.
#[must_use]
pub fn weight_kg(raw: &str) -> Option<f64> {
    let lower = raw.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    let re = Regex::new(r"(\d+(?:\.\d+)?)\s*(kg|g|kilograms|grams)?").expect("valid weight regex");
    let caps = re.captures(&lower)?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    Some(match caps.get(2).map(|m| m.as_str()) {
        Some("g" | "grams") => value / 1000.0,
        _ => value,
    })
}

/// Port count as an integer: the first run of digits. `"3 x USB 3.0"` → 3.
#[must_use]
pub fn port_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let re = Regex::new(r"(\d+)").expect("valid port count regex");
    re.captures(trimmed)?.get(1)?.as_str().parse().ok()
}

/// First decimal number in the text, unit suffix ignored.
fn first_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let re = Regex::new(r"(\d+(?:\.\d+)?)").expect("valid number regex");
    re.captures(trimmed)?.get(1)?.as_str().parse().ok()
}
