//! Specification-extraction core: unit normalizers, CPU/GPU classifiers and
//! the precedence logic that merges classifications from the technical-detail
//! table and the product title into one canonical [`lapspec_core::Specification`].
//!
//! Everything here is pure and infallible: malformed or absent text yields
//! absent fields, never errors. Logging is the caller's concern.

pub mod assemble;
pub mod cpu;
pub mod gpu;
pub mod patterns;
pub mod units;

pub use assemble::SpecExtractor;
pub use cpu::CpuClassifier;
pub use gpu::GpuClassifier;
pub use patterns::PATTERN_TABLE_VERSION;
