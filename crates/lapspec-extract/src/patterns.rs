//! Fixed, versioned pattern tables for the component classifiers.
//!
//! Classifier input is lower-cased before matching, so the patterns are
//! written in lower case. Tables are compiled once at classifier
//! construction; there is no global regex state.
//!
//! The alternatives are deliberately permissive about spacing and optional
//! vendor prefixes — marketplace text writes "RTX3060", "rtx 3060" and
//! "GeForce RTX 3060 Laptop GPU" for the same part. The final AMD GPU
//! alternative matches bare `<digit><3 digits>` runs; brand order (NVIDIA →
//! Intel → AMD) keeps it from shadowing the stricter tables.

use regex::Regex;

/// Version of the pattern tables below, stamped on extracted documents so a
/// reprocessing run can tell which grammar produced a record.
pub const PATTERN_TABLE_VERSION: &str = "2.1.0";

/// NVIDIA discrete GPUs: RTX/GTX with a series token (40/30/20/16/10)
/// followed by a two-digit model suffix, optional Ti/SUPER.
pub(crate) const NVIDIA_GPU: &[&str] = &[
    r"(nvidia|geforce)\s*(rtx|gtx)\s*(40|30|20|16|10)(\d{2})\s*(ti|super)?",
    r"(nvidia|geforce|rtx|gtx)\s*(rtx|gtx)?\s*(40|30|20|16|10)(\d{2})\s*(ti|super)?",
];

/// Intel GPUs across the Arc, Iris and UHD/HD Graphics sub-families.
pub(crate) const INTEL_GPU: &[&str] = &[
    r"(intel)?\s*arc\s*[ab]?(3|5|7)(\d{2})",
    r"(intel)?\s*arc\s*(a|b)?(\d{3})",
    r"(intel)?\s*iris\s*(xe(\s*max)?|pro|plus)?",
    r"(intel)?\s*iris\s*xe\s*graphics",
    r"(intel)?\s*(uhd|hd)\s*graphics\s*(\d{3,4})?",
];

/// AMD Radeon RX GPUs: generation digit (7/6/5/4) plus a three-digit model
/// suffix, optional XT. The second alternative accepts bare numbers.
pub(crate) const AMD_GPU: &[&str] = &[
    r"amd\s*(radeon)?\s*(rx)\s*(7|6|5|4)(\d{3})\s*(xt)?",
    r"(radeon|amd)?\s*(rx)?\s*(7|6|5|4)(\d{3})\s*(xt)?",
];

/// Intel CPUs: Core iN / Core Ultra model strings, or an "iN Xth gen"
/// title form with no model number.
pub(crate) const INTEL_CPU: &[&str] = &[
    r"(intel)?\s*(core)?\s*(ultra|i[3579])\s*-?\s*(\d{1,2})(\d{3,4})\s*(hx|h|u|k)?",
    r"(intel)?\s*(core)?\s*(i[3579])\s*-?\s*(\d{1,2})th\s*gen",
];

/// AMD Ryzen CPUs: tier digit (3/5/7/9) plus a 4-5 digit model number whose
/// leading digit is the generation.
pub(crate) const AMD_CPU: &[&str] = &[
    r"(amd)?\s*(ryzen)\s*([3579])\s*(\d{4})\s*(hx|h|u)?",
    r"(amd)?\s*(ryzen)\s*([3579])\s*-?\s*(\d{4,5})\s*(hx|h|u)?",
];

/// Secondary scan for Arc model numbers: optional a/b prefix plus three
/// digits, e.g. "a770".
pub(crate) const ARC_MODEL: &str = r"(a|b)?(\d{3})";

/// Secondary scan for UHD/HD Graphics model numbers.
pub(crate) const GRAPHICS_MODEL: &str = r"(\d{3,4})";

pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid classifier regex"))
        .collect()
}

/// Capture groups of a match (excluding the whole match) in pattern order.
///
/// Extractors scan these rather than addressing groups by index because the
/// alternatives of one brand table capture in different positions.
pub(crate) fn captured<'t>(caps: &regex::Captures<'t>) -> Vec<Option<&'t str>> {
    (1..caps.len()).map(|i| caps.get(i).map(|m| m.as_str())).collect()
}

/// True when `s` is a run of ASCII digits with length in `min..=max`.
pub(crate) fn is_digit_run(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
