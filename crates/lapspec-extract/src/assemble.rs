//! Source reconciliation and specification assembly.
//!
//! Each component (CPU, GPU) is classified twice: from the vendor
//! technical-detail table (high confidence) and from the product title (low
//! confidence). The technical-detail record wins wholesale whenever it
//! identified a brand; otherwise the title record is used wholesale. There
//! is no field-by-field merge — the losing source's sub-fields are dropped
//! even when more complete. A [`Conflict`] is recorded exactly when both
//! sources produced a brand and the labels differ.

use std::collections::HashMap;

use lapspec_core::{
    BatterySpec, Component, Conflict, ConnectivitySpec, DisplaySpec, MemorySpec, PhysicalSpec,
    SpecSource, Specification, StorageSpec,
};

use crate::cpu::CpuClassifier;
use crate::gpu::GpuClassifier;
use crate::units;

/// The assembler: owns one classifier per component and turns one structured
/// input (title + technical-detail map) into one canonical [`Specification`].
///
/// Stateless beyond its compiled pattern tables; a single instance can be
/// shared across worker threads.
pub struct SpecExtractor {
    cpu: CpuClassifier,
    gpu: GpuClassifier,
}

impl SpecExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cpu: CpuClassifier::new(),
            gpu: GpuClassifier::new(),
        }
    }

    /// Builds the canonical specification for one document.
    ///
    /// Missing technical-detail keys become absent fields, never errors. The
    /// returned record embeds any detected conflicts; callers drive their
    /// stats counters from [`Specification::conflict_count`].
    #[must_use]
    pub fn standardize(
        &self,
        technical_details: &HashMap<String, String>,
        title: Option<&str>,
    ) -> Specification {
        let detail = |key: &str| -> &str {
            technical_details.get(key).map_or("", String::as_str)
        };
        let title_text = title.unwrap_or("");

        let tech_gpu = self
            .gpu
            .classify(detail("Graphics Card Description"), SpecSource::TechnicalDetail);
        let title_gpu = self.gpu.classify(title_text, SpecSource::Title);

        let tech_cpu = self
            .cpu
            .classify(detail("Processor Type"), SpecSource::TechnicalDetail);
        let title_cpu = self.cpu.classify(title_text, SpecSource::Title);

        let mut conflicts = Vec::new();

        if let (Some(tech_brand), Some(title_brand)) =
            (tech_gpu.brand.as_deref(), title_gpu.brand.as_deref())
        {
            if tech_brand != title_brand {
                conflicts.push(Conflict::brand(Component::Gpu, tech_brand, title_brand));
            }
        }
        let graphics = if tech_gpu.has_brand() { tech_gpu } else { title_gpu };

        if let (Some(tech_brand), Some(title_brand)) =
            (tech_cpu.brand.as_deref(), title_cpu.brand.as_deref())
        {
            if tech_brand != title_brand {
                conflicts.push(Conflict::brand(Component::Cpu, tech_brand, title_brand));
            }
        }
        let processor = if tech_cpu.has_brand() { tech_cpu } else { title_cpu };

        // Pass-through strings: absent key or empty value both become None.
        let field = |key: &str| -> Option<String> {
            technical_details
                .get(key)
                .filter(|v| !v.is_empty())
                .cloned()
        };
        let normalized = |key: &str, normalize: fn(&str) -> Option<f64>| -> Option<f64> {
            technical_details.get(key).and_then(|v| normalize(v))
        };

        Specification {
            brand: field("Brand"),
            model: field("Item model number"),
            series: field("Series"),
            processor,
            graphics,
            memory: MemorySpec {
                ram_size: normalized("RAM Size", units::ram_size_gb),
                technology: field("Memory Technology"),
                max_supported: field("Maximum Memory Supported"),
            },
            storage: StorageSpec {
                size: field("Hard Drive Size"),
                kind: field("Hard Disk Description"),
                interface: field("Hard Drive Interface"),
            },
            display: DisplaySpec {
                size: normalized("Standing screen display size", units::display_size_inches),
                resolution: field("Screen Resolution"),
            },
            operating_system: field("Operating System"),
            battery: BatterySpec {
                life: normalized("Average Battery Life (in hours)", units::battery_life_hours),
                cells: field("Number of Lithium Ion Cells"),
                energy_content: field("Lithium Battery Energy Content"),
            },
            physical: PhysicalSpec {
                dimensions: field("Product Dimensions"),
                weight: normalized("Item Weight", units::weight_kg),
                color: field("Colour"),
            },
            connectivity: ConnectivitySpec {
                kind: field("Connectivity Type"),
                usb2_ports: technical_details
                    .get("Number of USB 2.0 Ports")
                    .and_then(|v| units::port_count(v)),
                usb3_ports: technical_details
                    .get("Number of USB 3.0 Ports")
                    .and_then(|v| units::port_count(v)),
            },
            included_components: field("Included Components"),
            specification_conflicts: conflicts,
        }
    }
}

impl Default for SpecExtractor {
    fn default() -> Self {
        Self::new()
    }
}
