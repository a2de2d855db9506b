pub mod component;
pub mod document;
pub mod specification;
pub mod stats;

pub use component::{Component, Confidence, Conflict, CoreError, CpuInfo, GpuInfo, SpecSource};
pub use document::{ExtractedDocument, RawDocument};
pub use specification::{
    BatterySpec, ConnectivitySpec, DisplaySpec, MemorySpec, PhysicalSpec, Specification,
    StorageSpec,
};
pub use stats::ProcessingStats;
