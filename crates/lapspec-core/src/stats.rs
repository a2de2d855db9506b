//! Process-wide counters accumulated by the batch driver.

use serde::{Deserialize, Serialize};

/// Counters for one batch run. The extraction core never touches these; the
/// driver increments them from per-document results (conflict counts come
/// from [`crate::Specification::conflict_count`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_documents: u64,
    pub successful_processing: u64,
    pub failed_processing: u64,
    pub inserted_documents: u64,
    pub gpu_conflicts: u64,
    pub cpu_conflicts: u64,
}
