//! Batch extraction runner: fan-out over documents, atomic stats
//! aggregation, single-writer output pass.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use lapspec_core::{Component, ExtractedDocument, ProcessingStats, RawDocument};
use lapspec_extract::{SpecExtractor, PATTERN_TABLE_VERSION};

use super::ExtractArgs;

/// Shared run counters. Workers report concurrently, so increments are
/// atomic; `snapshot` reads a consistent-enough view once the run is done.
#[derive(Default)]
pub(super) struct StatsCounter {
    total_documents: AtomicU64,
    successful_processing: AtomicU64,
    failed_processing: AtomicU64,
    inserted_documents: AtomicU64,
    gpu_conflicts: AtomicU64,
    cpu_conflicts: AtomicU64,
}

impl StatsCounter {
    fn document_seen(&self) {
        self.total_documents.fetch_add(1, Ordering::Relaxed);
    }

    fn document_failed(&self) {
        self.failed_processing.fetch_add(1, Ordering::Relaxed);
    }

    fn document_processed(&self, gpu_conflicts: u64, cpu_conflicts: u64) {
        self.successful_processing.fetch_add(1, Ordering::Relaxed);
        self.gpu_conflicts.fetch_add(gpu_conflicts, Ordering::Relaxed);
        self.cpu_conflicts.fetch_add(cpu_conflicts, Ordering::Relaxed);
    }

    fn document_inserted(&self) {
        self.inserted_documents.fetch_add(1, Ordering::Relaxed);
    }

    pub(super) fn snapshot(&self) -> ProcessingStats {
        ProcessingStats {
            total_documents: self.total_documents.load(Ordering::Relaxed),
            successful_processing: self.successful_processing.load(Ordering::Relaxed),
            failed_processing: self.failed_processing.load(Ordering::Relaxed),
            inserted_documents: self.inserted_documents.load(Ordering::Relaxed),
            gpu_conflicts: self.gpu_conflicts.load(Ordering::Relaxed),
            cpu_conflicts: self.cpu_conflicts.load(Ordering::Relaxed),
        }
    }
}

pub(super) async fn run_extraction(args: &ExtractArgs) -> anyhow::Result<ProcessingStats> {
    let input = File::open(&args.input)
        .with_context(|| format!("opening input {}", args.input.display()))?;
    let lines: Vec<String> = BufReader::new(input)
        .lines()
        .collect::<Result<_, _>>()
        .with_context(|| format!("reading input {}", args.input.display()))?;

    tracing::info!(documents = lines.len(), input = %args.input.display(), "starting extraction run");

    let extractor = Arc::new(SpecExtractor::new());
    let stats = Arc::new(StatsCounter::default());
    let jobs = args.jobs.max(1);

    let results: Vec<Option<ExtractedDocument>> = stream::iter(lines.into_iter().enumerate())
        .map(|(idx, line)| {
            let extractor = Arc::clone(&extractor);
            let stats = Arc::clone(&stats);
            async move {
                let handle = tokio::task::spawn_blocking(move || {
                    process_document(&extractor, &stats, &line, idx + 1)
                });
                match handle.await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!(line = idx + 1, error = %e, "extraction task failed");
                        None
                    }
                }
            }
        })
        .buffer_unordered(jobs)
        .collect()
        .await;

    // Single-writer output pass; create() truncates any previous run.
    let output = File::create(&args.output)
        .with_context(|| format!("creating output {}", args.output.display()))?;
    let mut writer = BufWriter::new(output);
    for doc in results.into_iter().flatten() {
        let json = serde_json::to_string(&doc).context("serializing extracted document")?;
        writeln!(writer, "{json}").context("writing extracted document")?;
        stats.document_inserted();
    }
    writer.flush().context("flushing output")?;

    let snapshot = stats.snapshot();
    tracing::info!(total = snapshot.total_documents, "extraction run completed");
    tracing::info!(successful = snapshot.successful_processing, failed = snapshot.failed_processing, "processing outcomes");
    tracing::info!(inserted = snapshot.inserted_documents, output = %args.output.display(), "documents written");
    tracing::info!(
        gpu = snapshot.gpu_conflicts,
        cpu = snapshot.cpu_conflicts,
        "brand conflicts resolved in favor of technical details"
    );

    Ok(snapshot)
}

/// Processes one input line. Undecodable lines are logged and counted as
/// failures; extraction itself cannot fail, only yield absent fields.
fn process_document(
    extractor: &SpecExtractor,
    stats: &StatsCounter,
    line: &str,
    line_no: usize,
) -> Option<ExtractedDocument> {
    stats.document_seen();

    let raw: RawDocument = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(line = line_no, error = %e, "skipping undecodable document");
            stats.document_failed();
            return None;
        }
    };

    let specifications = extractor.standardize(&raw.technical_details, raw.title.as_deref());

    for conflict in &specifications.specification_conflicts {
        tracing::warn!(
            doc = %raw.id,
            component = %conflict.component,
            tech = %conflict.tech_value,
            title = %conflict.title_value,
            "brand conflict resolved"
        );
    }
    stats.document_processed(
        specifications.conflict_count(Component::Gpu),
        specifications.conflict_count(Component::Cpu),
    );

    Some(ExtractedDocument {
        source_id: raw.id,
        url: raw.url,
        title: raw.title,
        specifications,
        raw_specs: raw.technical_details,
        processed_at: Utc::now(),
        extractor_version: PATTERN_TABLE_VERSION.to_string(),
    })
}
