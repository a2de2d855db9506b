//! GPU identity classification over free product text.
//!
//! Dispatch is brand-ordered and first-match-wins: NVIDIA → Intel → AMD.
//! The first pattern of the first brand that matches decides the brand; no
//! later brand is tried. Sub-fields come from the match groups plus cheap
//! substring checks on the lowered text, because marketplace spacing and
//! token order are too inconsistent for full-pattern capture to anchor.

use lapspec_core::{GpuInfo, SpecSource};
use regex::{Captures, Regex};

use crate::patterns::{self, captured, is_digit_run};

/// Identity fields produced by one brand extractor. Provenance is attached
/// by [`GpuClassifier::classify`].
struct GpuIdentity {
    brand: &'static str,
    series: Option<String>,
    model: Option<String>,
    variant: Option<String>,
}

type ExtractFn = fn(&GpuClassifier, &str, &Captures<'_>) -> GpuIdentity;

/// One brand's ordered pattern alternatives paired with its field extractor.
struct BrandRule {
    patterns: Vec<Regex>,
    extract: ExtractFn,
}

/// Pattern-table-driven GPU classifier. Construct once and share; all state
/// is compiled patterns, so classification is pure and idempotent.
pub struct GpuClassifier {
    rules: Vec<BrandRule>,
    arc_model: Regex,
    graphics_model: Regex,
}

impl GpuClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: vec![
                BrandRule {
                    patterns: patterns::compile(patterns::NVIDIA_GPU),
                    extract: extract_nvidia,
                },
                BrandRule {
                    patterns: patterns::compile(patterns::INTEL_GPU),
                    extract: extract_intel,
                },
                BrandRule {
                    patterns: patterns::compile(patterns::AMD_GPU),
                    extract: extract_amd,
                },
            ],
            arc_model: Regex::new(patterns::ARC_MODEL).expect("valid arc model regex"),
            graphics_model: Regex::new(patterns::GRAPHICS_MODEL)
                .expect("valid graphics model regex"),
        }
    }

    /// Classifies GPU identity from `text`. Empty or unmatched text yields a
    /// record with all identity fields absent but the source/confidence tag
    /// still populated; that is a valid result, not a failure.
    #[must_use]
    pub fn classify(&self, text: &str, source: SpecSource) -> GpuInfo {
        let text = text.trim().to_lowercase();
        let mut info = GpuInfo::empty(source);
        if text.is_empty() {
            return info;
        }

        for rule in &self.rules {
            for pattern in &rule.patterns {
                if let Some(caps) = pattern.captures(&text) {
                    let identity = (rule.extract)(self, &text, &caps);
                    info.brand = Some(identity.brand.to_string());
                    info.series = identity.series;
                    info.model = identity.model;
                    info.variant = identity.variant;
                    return info;
                }
            }
        }

        info
    }
}

impl Default for GpuClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_nvidia(_classifier: &GpuClassifier, text: &str, caps: &Captures<'_>) -> GpuIdentity {
    let groups = captured(caps);

    let series = if text.contains("rtx") {
        Some("RTX".to_string())
    } else if text.contains("gtx") {
        Some("GTX".to_string())
    } else {
        None
    };

    // Model is the series token (40/30/20/16/10) joined with the two-digit
    // group that follows it among the captures.
    let model = groups
        .iter()
        .enumerate()
        .find_map(|(i, g)| match g {
            Some(s @ ("40" | "30" | "20" | "16" | "10")) => Some((i, *s)),
            _ => None,
        })
        .and_then(|(i, series_num)| {
            let suffix = groups[i + 1..]
                .iter()
                .flatten()
                .find(|g| is_digit_run(g, 2, 2))?;
            Some(format!("{series_num}{suffix}"))
        });

    let variant = if text.contains("ti") {
        Some("Ti".to_string())
    } else if text.contains("super") {
        Some("SUPER".to_string())
    } else {
        None
    };

    GpuIdentity {
        brand: "NVIDIA",
        series,
        model,
        variant,
    }
}

fn extract_intel(classifier: &GpuClassifier, text: &str, _caps: &Captures<'_>) -> GpuIdentity {
    let mut series = None;
    let mut model = None;
    let mut variant = None;

    if text.contains("arc") {
        series = Some("Arc".to_string());
        if let Some(caps) = classifier.arc_model.captures(text) {
            let number = caps.get(2).map_or("", |m| m.as_str());
            model = Some(match caps.get(1) {
                Some(prefix) => format!("{}{number}", prefix.as_str().to_uppercase()),
                None => number.to_string(),
            });
        }
    } else if text.contains("iris") {
        series = Some("Iris".to_string());
        // Priority order matters: "xe max" must win over the bare "xe" check.
        variant = if text.contains("xe max") {
            Some("Xe MAX".to_string())
        } else if text.contains("xe") {
            Some("Xe".to_string())
        } else if text.contains("pro") {
            Some("Pro".to_string())
        } else if text.contains("plus") {
            Some("Plus".to_string())
        } else {
            None
        };
    } else if text.contains("uhd") || text.contains("hd") {
        series = Some(if text.contains("uhd") { "UHD" } else { "HD" }.to_string());
        model = classifier
            .graphics_model
            .captures(text)
            .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()));
    }

    GpuIdentity {
        brand: "Intel",
        series,
        model,
        variant,
    }
}

fn extract_amd(_classifier: &GpuClassifier, text: &str, caps: &Captures<'_>) -> GpuIdentity {
    let groups = captured(caps);

    let model = groups
        .iter()
        .enumerate()
        .find_map(|(i, g)| match g {
            Some(s @ ("7" | "6" | "5" | "4")) => Some((i, *s)),
            _ => None,
        })
        .and_then(|(i, generation)| {
            let suffix = groups[i + 1..]
                .iter()
                .flatten()
                .find(|g| is_digit_run(g, 3, 3))?;
            Some(format!("{generation}{suffix}"))
        });

    let variant = if text.contains("xt") {
        Some("XT".to_string())
    } else {
        None
    };

    GpuIdentity {
        brand: "AMD",
        series: Some("RX".to_string()),
        model,
        variant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapspec_core::Confidence;

    fn classifier() -> GpuClassifier {
        GpuClassifier::new()
    }

    // -----------------------------------------------------------------------
    // Provenance tagging
    // -----------------------------------------------------------------------

    #[test]
    fn empty_text_returns_tagged_empty_record() {
        let gpu = classifier().classify("", SpecSource::TechnicalDetail);
        assert!(gpu.brand.is_none());
        assert!(gpu.series.is_none());
        assert!(gpu.model.is_none());
        assert!(gpu.variant.is_none());
        assert_eq!(gpu.source, SpecSource::TechnicalDetail);
        assert_eq!(gpu.confidence, Confidence::High);
    }

    #[test]
    fn whitespace_only_text_returns_tagged_empty_record() {
        let gpu = classifier().classify("   ", SpecSource::Title);
        assert!(gpu.brand.is_none());
        assert_eq!(gpu.source, SpecSource::Title);
        assert_eq!(gpu.confidence, Confidence::Low);
    }

    #[test]
    fn unmatched_text_is_a_valid_brandless_result() {
        let gpu = classifier().classify("thin and light laptop", SpecSource::Title);
        assert!(gpu.brand.is_none());
        assert_eq!(gpu.source, SpecSource::Title);
    }

    // -----------------------------------------------------------------------
    // NVIDIA
    // -----------------------------------------------------------------------

    #[test]
    fn nvidia_geforce_rtx_full_name() {
        let gpu = classifier().classify("NVIDIA GeForce RTX 4070", SpecSource::TechnicalDetail);
        assert_eq!(gpu.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(gpu.series.as_deref(), Some("RTX"));
        assert_eq!(gpu.model.as_deref(), Some("4070"));
        assert!(gpu.variant.is_none());
    }

    #[test]
    fn nvidia_bare_rtx_token() {
        let gpu = classifier().classify("rtx 3060 gaming laptop", SpecSource::Title);
        assert_eq!(gpu.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(gpu.model.as_deref(), Some("3060"));
    }

    #[test]
    fn nvidia_gtx_16_series() {
        let gpu = classifier().classify("GTX 1650", SpecSource::Title);
        assert_eq!(gpu.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(gpu.series.as_deref(), Some("GTX"));
        assert_eq!(gpu.model.as_deref(), Some("1650"));
    }

    #[test]
    fn nvidia_ti_variant() {
        let gpu = classifier().classify("GeForce RTX 4070 Ti", SpecSource::Title);
        assert_eq!(gpu.variant.as_deref(), Some("Ti"));
    }

    #[test]
    fn nvidia_super_variant() {
        let gpu = classifier().classify("RTX 2060 SUPER", SpecSource::Title);
        assert_eq!(gpu.variant.as_deref(), Some("SUPER"));
    }

    #[test]
    fn nvidia_wins_over_amd_when_both_present() {
        // Brand order is NVIDIA → Intel → AMD, first match wins.
        let gpu = classifier().classify("RTX 3060 RX 6600", SpecSource::Title);
        assert_eq!(gpu.brand.as_deref(), Some("NVIDIA"));
        assert_eq!(gpu.model.as_deref(), Some("3060"));
    }

    // -----------------------------------------------------------------------
    // Intel
    // -----------------------------------------------------------------------

    #[test]
    fn intel_arc_with_prefix() {
        let gpu = classifier().classify("Intel Arc A770", SpecSource::TechnicalDetail);
        assert_eq!(gpu.brand.as_deref(), Some("Intel"));
        assert_eq!(gpu.series.as_deref(), Some("Arc"));
        assert_eq!(gpu.model.as_deref(), Some("A770"));
    }

    #[test]
    fn intel_iris_xe() {
        let gpu = classifier().classify("Intel Iris Xe Graphics", SpecSource::Title);
        assert_eq!(gpu.brand.as_deref(), Some("Intel"));
        assert_eq!(gpu.series.as_deref(), Some("Iris"));
        assert_eq!(gpu.variant.as_deref(), Some("Xe"));
    }

    #[test]
    fn intel_iris_xe_max_beats_bare_xe() {
        let gpu = classifier().classify("Iris Xe MAX", SpecSource::Title);
        assert_eq!(gpu.variant.as_deref(), Some("Xe MAX"));
    }

    #[test]
    fn intel_uhd_graphics_with_model() {
        let gpu = classifier().classify("Intel UHD Graphics 630", SpecSource::TechnicalDetail);
        assert_eq!(gpu.series.as_deref(), Some("UHD"));
        assert_eq!(gpu.model.as_deref(), Some("630"));
    }

    #[test]
    fn intel_hd_graphics() {
        let gpu = classifier().classify("Intel HD Graphics 520", SpecSource::TechnicalDetail);
        assert_eq!(gpu.series.as_deref(), Some("HD"));
        assert_eq!(gpu.model.as_deref(), Some("520"));
    }

    // -----------------------------------------------------------------------
    // AMD
    // -----------------------------------------------------------------------

    #[test]
    fn amd_radeon_rx_with_xt() {
        let gpu = classifier().classify("AMD Radeon RX 6600 XT", SpecSource::TechnicalDetail);
        assert_eq!(gpu.brand.as_deref(), Some("AMD"));
        assert_eq!(gpu.series.as_deref(), Some("RX"));
        assert_eq!(gpu.model.as_deref(), Some("6600"));
        assert_eq!(gpu.variant.as_deref(), Some("XT"));
    }

    #[test]
    fn amd_bare_model_number_still_classifies() {
        // Preserved permissive fallback: no AMD token required once the
        // stricter NVIDIA and Intel tables fail.
        let gpu = classifier().classify("6600", SpecSource::Title);
        assert_eq!(gpu.brand.as_deref(), Some("AMD"));
        assert_eq!(gpu.series.as_deref(), Some("RX"));
        assert_eq!(gpu.model.as_deref(), Some("6600"));
    }

    // -----------------------------------------------------------------------
    // Purity
    // -----------------------------------------------------------------------

    #[test]
    fn classification_is_idempotent() {
        let c = classifier();
        let first = c.classify("NVIDIA GeForce RTX 4070", SpecSource::Title);
        let second = c.classify("NVIDIA GeForce RTX 4070", SpecSource::Title);
        assert_eq!(first, second);
    }
}
