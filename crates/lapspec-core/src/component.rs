//! Classified CPU/GPU component records and the conflict type produced when
//! the two text sources disagree on a component's brand.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid component label: {0}")]
    InvalidComponent(String),

    #[error("invalid source label: {0}")]
    InvalidSource(String),
}

/// Which text source a classification was derived from.
///
/// Technical-detail values come from the vendor-supplied spec table; title
/// values come from the free-text product title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecSource {
    TechnicalDetail,
    Title,
}

impl SpecSource {
    /// The confidence tier implied by this source. Confidence is always
    /// derived from the source tag, never set independently.
    #[must_use]
    pub fn confidence(self) -> Confidence {
        match self {
            SpecSource::TechnicalDetail => Confidence::High,
            SpecSource::Title => Confidence::Low,
        }
    }
}

impl FromStr for SpecSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical_detail" => Ok(SpecSource::TechnicalDetail),
            "title" => Ok(SpecSource::Title),
            other => Err(CoreError::InvalidSource(other.to_string())),
        }
    }
}

/// Coarse provenance tier used only to drive source precedence, not a
/// probabilistic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}

/// The hardware component a classification or conflict refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Cpu => f.write_str("CPU"),
            Component::Gpu => f.write_str("GPU"),
        }
    }
}

impl FromStr for Component {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CPU" => Ok(Component::Cpu),
            "GPU" => Ok(Component::Gpu),
            other => Err(CoreError::InvalidComponent(other.to_string())),
        }
    }
}

/// A classified CPU identity. Identity fields are absent when the text did
/// not match any known pattern; that is a valid result, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuInfo {
    /// Normalized brand label, e.g. `"Intel"` or `"AMD"`.
    pub brand: Option<String>,
    /// Product line, e.g. `"I7"` or `"Ryzen 9"`.
    pub series: Option<String>,
    /// Human-readable generation, e.g. `"12th Gen"` (Intel) or `"Gen 7"` (AMD).
    pub generation: Option<String>,
    /// Model number without suffix letters, e.g. `"700"` or `"7940"`.
    pub model: Option<String>,
    /// Suffix variant, e.g. `"H"`, `"U"`, `"HX"`, `"K"`.
    pub variant: Option<String>,
    pub source: SpecSource,
    pub confidence: Confidence,
}

impl CpuInfo {
    /// An all-absent record tagged with the given source. Returned for empty
    /// or unmatched input text.
    #[must_use]
    pub fn empty(source: SpecSource) -> Self {
        Self {
            brand: None,
            series: None,
            generation: None,
            model: None,
            variant: None,
            source,
            confidence: source.confidence(),
        }
    }

    #[must_use]
    pub fn has_brand(&self) -> bool {
        self.brand.is_some()
    }
}

/// A classified GPU identity. Same contract as [`CpuInfo`] minus the
/// generation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuInfo {
    /// Normalized brand label, e.g. `"NVIDIA"`, `"Intel"` or `"AMD"`.
    pub brand: Option<String>,
    /// Product line, e.g. `"RTX"`, `"Arc"`, `"RX"`.
    pub series: Option<String>,
    /// Model number, e.g. `"4070"` or `"A770"`.
    pub model: Option<String>,
    /// Suffix variant, e.g. `"Ti"`, `"SUPER"`, `"XT"`, `"Xe MAX"`.
    pub variant: Option<String>,
    pub source: SpecSource,
    pub confidence: Confidence,
}

impl GpuInfo {
    /// An all-absent record tagged with the given source. Returned for empty
    /// or unmatched input text.
    #[must_use]
    pub fn empty(source: SpecSource) -> Self {
        Self {
            brand: None,
            series: None,
            model: None,
            variant: None,
            source,
            confidence: source.confidence(),
        }
    }

    #[must_use]
    pub fn has_brand(&self) -> bool {
        self.brand.is_some()
    }
}

/// A detected brand-level disagreement between the two sources for one
/// component. Only brand mismatches are recorded; sub-field disagreements
/// (model, variant, generation) pass silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub component: Component,
    /// The disputed field. Always `"brand"` in the current design.
    pub field: String,
    pub tech_value: String,
    pub title_value: String,
    /// Human-readable note naming the winning value.
    pub resolution: String,
}

impl Conflict {
    /// Builds a brand conflict record. The technical-detail value always
    /// wins, so the resolution note names it.
    #[must_use]
    pub fn brand(component: Component, tech_value: &str, title_value: &str) -> Self {
        Self {
            component,
            field: "brand".to_string(),
            tech_value: tech_value.to_string(),
            title_value: title_value.to_string(),
            resolution: format!("Used technical detail value: {tech_value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_high_iff_technical_detail() {
        assert_eq!(SpecSource::TechnicalDetail.confidence(), Confidence::High);
        assert_eq!(SpecSource::Title.confidence(), Confidence::Low);
    }

    #[test]
    fn empty_cpu_record_carries_source_tag() {
        let cpu = CpuInfo::empty(SpecSource::Title);
        assert!(cpu.brand.is_none());
        assert!(cpu.series.is_none());
        assert!(cpu.generation.is_none());
        assert!(cpu.model.is_none());
        assert!(cpu.variant.is_none());
        assert_eq!(cpu.source, SpecSource::Title);
        assert_eq!(cpu.confidence, Confidence::Low);
    }

    #[test]
    fn empty_gpu_record_carries_source_tag() {
        let gpu = GpuInfo::empty(SpecSource::TechnicalDetail);
        assert!(!gpu.has_brand());
        assert_eq!(gpu.source, SpecSource::TechnicalDetail);
        assert_eq!(gpu.confidence, Confidence::High);
    }

    #[test]
    fn component_from_str_accepts_serialized_labels() {
        assert_eq!("CPU".parse::<Component>().unwrap(), Component::Cpu);
        assert_eq!("GPU".parse::<Component>().unwrap(), Component::Gpu);
    }

    #[test]
    fn component_from_str_rejects_unknown_label() {
        let err = "NPU".parse::<Component>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidComponent(s) if s == "NPU"));
    }

    #[test]
    fn source_from_str_round_trips_serialized_labels() {
        assert_eq!(
            "technical_detail".parse::<SpecSource>().unwrap(),
            SpecSource::TechnicalDetail
        );
        assert_eq!("title".parse::<SpecSource>().unwrap(), SpecSource::Title);
        assert!("body".parse::<SpecSource>().is_err());
    }

    #[test]
    fn brand_conflict_resolution_names_tech_value() {
        let conflict = Conflict::brand(Component::Gpu, "AMD", "Intel");
        assert_eq!(conflict.field, "brand");
        assert_eq!(conflict.tech_value, "AMD");
        assert_eq!(conflict.title_value, "Intel");
        assert_eq!(conflict.resolution, "Used technical detail value: AMD");
    }

    #[test]
    fn serde_uses_snake_case_source_and_upper_component() {
        let json = serde_json::to_string(&SpecSource::TechnicalDetail).unwrap();
        assert_eq!(json, "\"technical_detail\"");
        let json = serde_json::to_string(&Component::Gpu).unwrap();
        assert_eq!(json, "\"GPU\"");
        let json = serde_json::to_string(&Confidence::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
