//! Parsing of manifest-style key/value resources.
//!
//! The format is the classic archive-manifest convention: `Key: value` main
//! attributes, named sub-sections introduced by a `Name:` attribute after a
//! blank line, continuation lines beginning with a single space.

use indexmap::IndexMap;
use oxbind_api::models::ManifestRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid UTF-8")]
    Encoding,
    #[error("malformed attribute on line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("continuation on line {line} without a preceding attribute")]
    DanglingContinuation { line: usize },
}

/// Parse one manifest resource. `source` labels the record for diagnostics.
pub fn parse(source: &str, bytes: &[u8]) -> Result<ManifestRecord, ManifestError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ManifestError::Encoding)?;

    let mut record = ManifestRecord {
        source: source.to_string(),
        attributes: IndexMap::new(),
        sections: IndexMap::new(),
    };
    // Section currently being filled; None means the main attributes.
    let mut section: Option<String> = None;
    let mut last_key: Option<String> = None;
    let mut after_gap = false;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let number = idx + 1;

        if line.is_empty() {
            after_gap = true;
            last_key = None;
            continue;
        }

        if let Some(rest) = line.strip_prefix(' ') {
            let key = last_key
                .clone()
                .ok_or(ManifestError::DanglingContinuation { line: number })?;
            let target = attributes_mut(&mut record, &section);
            if let Some(value) = target.get_mut(&key) {
                value.push_str(rest);
            }
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ManifestError::MalformedLine {
                line: number,
                text: line.to_string(),
            })?;
        let key = key.trim_end();
        let value = value.trim_start();

        if after_gap {
            after_gap = false;
            if key.eq_ignore_ascii_case("Name") {
                record.sections.insert(value.to_string(), IndexMap::new());
                section = Some(value.to_string());
                last_key = None;
                continue;
            }
            // Tolerated: a gap not followed by Name keeps filling the
            // current scope.
        }

        attributes_mut(&mut record, &section).insert(key.to_string(), value.to_string());
        last_key = Some(key.to_string());
    }

    Ok(record)
}

fn attributes_mut<'a>(
    record: &'a mut ManifestRecord,
    section: &Option<String>,
) -> &'a mut IndexMap<String, String> {
    match section {
        Some(name) => record
            .sections
            .entry(name.clone())
            .or_default(),
        None => &mut record.attributes,
    }
}
