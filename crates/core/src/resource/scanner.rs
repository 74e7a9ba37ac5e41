//! Best-effort manifest scan across the resource search path.
//!
//! Scanning feeds diagnostics only: every failure becomes a skip outcome and
//! the scan always runs to completion. Nothing here influences engine
//! selection.

use super::{ResourceHit, ResourceLoader, manifest};
use oxbind_api::models::ManifestRecord;
use tracing::{debug, info};

/// Well-known manifest resource name.
pub const MANIFEST_NAME: &str = "META-INF/binding-engine.mf";

pub const IMPLEMENTATION_TITLE: &str = "Implementation-Title";
pub const IMPLEMENTATION_VERSION: &str = "Implementation-Version";

/// Section shipped in manifests of the engine runtimes we report on.
pub const ENGINE_RUNTIME_SECTION: &str = "engine-runtime";

/// Implementation titles worth surfacing at info level.
const ENGINE_TITLE_MARKERS: [&str; 2] = ["Reference Implementation", "Alternate Binding"];

/// One scanned resource: a parsed record or the reason it was skipped.
#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Record(ManifestRecord),
    Skipped { resource: String, reason: String },
}

/// Scan summary, logged after each pass.
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    pub located: usize,
    pub parsed: usize,
    pub skipped: usize,
}

pub struct ManifestScanner<'a> {
    loader: &'a dyn ResourceLoader,
}

impl<'a> ManifestScanner<'a> {
    pub fn new(loader: &'a dyn ResourceLoader) -> Self {
        Self { loader }
    }

    /// Scan every manifest on the search path. Unreadable or malformed
    /// resources become [`ScanOutcome::Skipped`]; the scan itself never
    /// fails.
    pub fn scan(&self) -> Vec<ScanOutcome> {
        self.loader
            .locate(MANIFEST_NAME)
            .into_iter()
            .map(read_one)
            .collect()
    }

    /// Scan and log engine-implementation diagnostics. Advisory only.
    pub fn log_engine_manifests(&self) -> ScanReport {
        let mut report = ScanReport::default();
        for outcome in self.scan() {
            report.located += 1;
            match outcome {
                ScanOutcome::Record(record) => {
                    report.parsed += 1;
                    log_record(&record);
                }
                ScanOutcome::Skipped { resource, reason } => {
                    report.skipped += 1;
                    debug!(resource = %resource, reason = %reason, "skipped unreadable manifest");
                }
            }
        }
        info!(
            located = report.located,
            parsed = report.parsed,
            skipped = report.skipped,
            loader = %self.loader.describe(),
            "manifest scan complete"
        );
        report
    }
}

fn read_one(hit: ResourceHit) -> ScanOutcome {
    let resource = hit.path.display().to_string();
    let bytes = match std::fs::read(&hit.path) {
        Ok(bytes) => bytes,
        Err(err) => {
            return ScanOutcome::Skipped {
                resource,
                reason: err.to_string(),
            };
        }
    };
    match manifest::parse(&resource, &bytes) {
        Ok(record) => ScanOutcome::Record(record),
        Err(err) => ScanOutcome::Skipped {
            resource,
            reason: err.to_string(),
        },
    }
}

fn log_record(record: &ManifestRecord) {
    if let Some(title) = record.attribute(IMPLEMENTATION_TITLE) {
        if ENGINE_TITLE_MARKERS.iter().any(|marker| title.contains(marker)) {
            info!(
                source = %record.source,
                title = %title,
                version = record.attribute(IMPLEMENTATION_VERSION).unwrap_or("unknown"),
                "binding engine manifest"
            );
        }
    }
    if record.has_section(ENGINE_RUNTIME_SECTION) {
        info!(source = %record.source, "binding engine runtime marker present");
    }
    debug!(
        source = %record.source,
        detail = %serde_json::to_string(record).unwrap_or_default(),
        "manifest record"
    );
}
