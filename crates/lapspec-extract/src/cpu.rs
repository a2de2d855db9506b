//! CPU identity classification over free product text.
//!
//! Same dispatch model as [`crate::gpu`]: brand-ordered (Intel → AMD),
//! first-match-wins, sub-fields derived from match groups plus substring
//! checks on the lowered text.

use lapspec_core::{CpuInfo, SpecSource};
use regex::{Captures, Regex};

use crate::patterns::{self, captured, is_digit_run};

/// Identity fields produced by one brand extractor. Provenance is attached
/// by [`CpuClassifier::classify`].
struct CpuIdentity {
    brand: &'static str,
    series: Option<String>,
    generation: Option<String>,
    model: Option<String>,
    variant: Option<String>,
}

type ExtractFn = fn(&str, &Captures<'_>) -> CpuIdentity;

/// One brand's ordered pattern alternatives paired with its field extractor.
struct BrandRule {
    patterns: Vec<Regex>,
    extract: ExtractFn,
}

/// Pattern-table-driven CPU classifier. Construct once and share; all state
/// is compiled patterns, so classification is pure and idempotent.
pub struct CpuClassifier {
    rules: Vec<BrandRule>,
}

impl CpuClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                BrandRule {
                    patterns: patterns::compile(patterns::INTEL_CPU),
                    extract: extract_intel,
                },
                BrandRule {
                    patterns: patterns::compile(patterns::AMD_CPU),
                    extract: extract_amd,
                },
            ],
        }
    }

    /// Classifies CPU identity from `text`. Empty or unmatched text yields a
    /// record with all identity fields absent but the source/confidence tag
    /// still populated; that is a valid result, not a failure.
    #[must_use]
    pub fn classify(&self, text: &str, source: SpecSource) -> CpuInfo {
        let text = text.trim().to_lowercase();
        let mut info = CpuInfo::empty(source);
        if text.is_empty() {
            return info;
        }

        for rule in &self.rules {
            for pattern in &rule.patterns {
                if let Some(caps) = pattern.captures(&text) {
                    let identity = (rule.extract)(&text, &caps);
                    info.brand = Some(identity.brand.to_string());
                    info.series = identity.series;
                    info.generation = identity.generation;
                    info.model = identity.model;
                    info.variant = identity.variant;
                    return info;
                }
            }
        }

        info
    }
}

impl Default for CpuClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_intel(_text: &str, caps: &Captures<'_>) -> CpuIdentity {
    let groups = captured(caps);

    let series = groups
        .iter()
        .flatten()
        .find(|g| matches!(**g, "ultra" | "i3" | "i5" | "i7" | "i9"))
        .map(|g| g.to_uppercase());

    // First 1-2 digit group is the generation, first 3-4 digit group the
    // model number: "i7-12700" captures as ("12", "700").
    let generation = groups
        .iter()
        .flatten()
        .find(|g| is_digit_run(g, 1, 2))
        .map(|g| format!("{g}th Gen"));

    let model = groups
        .iter()
        .flatten()
        .find(|g| is_digit_run(g, 3, 4))
        .map(|g| (*g).to_string());

    let variant = groups
        .iter()
        .flatten()
        .find(|g| matches!(**g, "h" | "u" | "hx" | "k"))
        .map(|g| g.to_uppercase());

    CpuIdentity {
        brand: "Intel",
        series,
        generation,
        model,
        variant,
    }
}

fn extract_amd(text: &str, caps: &Captures<'_>) -> CpuIdentity {
    let groups = captured(caps);

    let series = if text.contains("ryzen") {
        groups
            .iter()
            .flatten()
            .find(|g| matches!(**g, "3" | "5" | "7" | "9"))
            .map(|g| format!("Ryzen {g}"))
    } else {
        None
    };

    let model = groups
        .iter()
        .flatten()
        .find(|g| is_digit_run(g, 4, 5))
        .map(|g| (*g).to_string());

    // The leading model digit is the generation: 7940 → Gen 7.
    let generation = model
        .as_deref()
        .and_then(|m| m.chars().next())
        .map(|d| format!("Gen {d}"));

    let variant = groups
        .iter()
        .flatten()
        .find(|g| matches!(**g, "h" | "u" | "hx"))
        .map(|g| g.to_uppercase());

    CpuIdentity {
        brand: "AMD",
        series,
        generation,
        model,
        variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapspec_core::Confidence;

    fn classifier() -> CpuClassifier {
        CpuClassifier::new()
    }

    // -----------------------------------------------------------------------
    // Provenance tagging
    // -----------------------------------------------------------------------

    #[test]
    fn empty_text_returns_tagged_empty_record() {
        let cpu = classifier().classify("", SpecSource::Title);
        assert!(cpu.brand.is_none());
        assert!(cpu.series.is_none());
        assert!(cpu.generation.is_none());
        assert!(cpu.model.is_none());
        assert!(cpu.variant.is_none());
        assert_eq!(cpu.source, SpecSource::Title);
        assert_eq!(cpu.confidence, Confidence::Low);
    }

    #[test]
    fn unmatched_text_is_a_valid_brandless_result() {
        let cpu = classifier().classify("octa-core processor", SpecSource::TechnicalDetail);
        assert!(cpu.brand.is_none());
        assert_eq!(cpu.source, SpecSource::TechnicalDetail);
        assert_eq!(cpu.confidence, Confidence::High);
    }

    // -----------------------------------------------------------------------
    // Intel
    // -----------------------------------------------------------------------

    #[test]
    fn intel_core_i7_full_model_string() {
        let cpu = classifier().classify("Intel Core i7-12700H", SpecSource::TechnicalDetail);
        assert_eq!(cpu.brand.as_deref(), Some("Intel"));
        assert_eq!(cpu.series.as_deref(), Some("I7"));
        assert_eq!(cpu.generation.as_deref(), Some("12th Gen"));
        assert_eq!(cpu.variant.as_deref(), Some("H"));
    }

    #[test]
    fn intel_hx_variant() {
        let cpu = classifier().classify("Intel Core i9-13980HX", SpecSource::TechnicalDetail);
        assert_eq!(cpu.series.as_deref(), Some("I9"));
        assert_eq!(cpu.generation.as_deref(), Some("13th Gen"));
        assert_eq!(cpu.variant.as_deref(), Some("HX"));
    }

    #[test]
    fn intel_generation_only_title_form() {
        let cpu = classifier().classify("Intel i5 11th Gen", SpecSource::Title);
        assert_eq!(cpu.brand.as_deref(), Some("Intel"));
        assert_eq!(cpu.series.as_deref(), Some("I5"));
        assert_eq!(cpu.generation.as_deref(), Some("11th Gen"));
        assert!(cpu.model.is_none());
    }

    #[test]
    fn intel_wins_over_amd_when_both_present() {
        let cpu = classifier().classify("Intel Core i7-12700H Ryzen 7 5800H", SpecSource::Title);
        assert_eq!(cpu.brand.as_deref(), Some("Intel"));
    }

    // -----------------------------------------------------------------------
    // AMD
    // -----------------------------------------------------------------------

    #[test]
    fn amd_ryzen_9_hx() {
        let cpu = classifier().classify("AMD Ryzen 9 7940HX", SpecSource::TechnicalDetail);
        assert_eq!(cpu.brand.as_deref(), Some("AMD"));
        assert_eq!(cpu.series.as_deref(), Some("Ryzen 9"));
        assert_eq!(cpu.model.as_deref(), Some("7940"));
        assert_eq!(cpu.generation.as_deref(), Some("Gen 7"));
        assert_eq!(cpu.variant.as_deref(), Some("HX"));
    }

    #[test]
    fn amd_ryzen_without_vendor_prefix() {
        let cpu = classifier().classify("Ryzen 5 5600U", SpecSource::Title);
        assert_eq!(cpu.brand.as_deref(), Some("AMD"));
        assert_eq!(cpu.series.as_deref(), Some("Ryzen 5"));
        assert_eq!(cpu.model.as_deref(), Some("5600"));
        assert_eq!(cpu.generation.as_deref(), Some("Gen 5"));
        assert_eq!(cpu.variant.as_deref(), Some("U"));
    }

    // -----------------------------------------------------------------------
    // Purity
    // -----------------------------------------------------------------------

    #[test]
    fn classification_is_idempotent() {
        let c = classifier();
        let first = c.classify("AMD Ryzen 9 7940HX", SpecSource::Title);
        let second = c.classify("AMD Ryzen 9 7940HX", SpecSource::Title);
        assert_eq!(first, second);
    }
}
