//! The canonical specification record produced for each product document.
//!
//! Field names mirror the persisted document schema; scalar fields hold
//! normalized canonical units (GB, inches, hours, kg) produced by
//! `lapspec-extract`.

use serde::{Deserialize, Serialize};

use crate::component::{Component, Conflict, CpuInfo, GpuInfo};

/// One canonical specification per input document. A value object with no
/// identity of its own beyond the source document id carried by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Vendor brand as listed in the technical-detail table, e.g. `"ASUS"`.
    pub brand: Option<String>,
    /// Vendor model number ("Item model number").
    pub model: Option<String>,
    /// Vendor product series ("Series").
    pub series: Option<String>,
    /// Final CPU identity after source precedence.
    pub processor: CpuInfo,
    /// Final GPU identity after source precedence.
    pub graphics: GpuInfo,
    pub memory: MemorySpec,
    pub storage: StorageSpec,
    pub display: DisplaySpec,
    pub operating_system: Option<String>,
    pub battery: BatterySpec,
    pub physical: PhysicalSpec,
    pub connectivity: ConnectivitySpec,
    pub included_components: Option<String>,
    /// Brand-level disagreements between the two sources. Omitted from the
    /// serialized document when no conflict was detected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specification_conflicts: Vec<Conflict>,
}

impl Specification {
    /// Number of recorded conflicts for the given component, for the batch
    /// driver's per-component counters.
    #[must_use]
    pub fn conflict_count(&self, component: Component) -> u64 {
        self.specification_conflicts
            .iter()
            .filter(|c| c.component == component)
            .count() as u64
    }

    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.specification_conflicts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySpec {
    /// RAM size normalized to gigabytes.
    pub ram_size: Option<f64>,
    /// e.g. `"DDR5"`.
    pub technology: Option<String>,
    pub max_supported: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec {
    pub size: Option<String>,
    /// e.g. `"SSD"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub interface: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySpec {
    /// Diagonal size normalized to inches.
    pub size: Option<f64>,
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySpec {
    /// Average battery life normalized to hours.
    pub life: Option<f64>,
    pub cells: Option<String>,
    pub energy_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSpec {
    pub dimensions: Option<String>,
    /// Weight normalized to kilograms.
    pub weight: Option<f64>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivitySpec {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub usb2_ports: Option<u32>,
    pub usb3_ports: Option<u32>,
}
