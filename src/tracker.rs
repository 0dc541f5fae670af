//! Conversion of a generated PRD into an external tracker's format.
//!
//! Dispatch is a match over a closed format tag. Unrecognized tags can only
//! enter through parsing, so `FromStr` carries the defensive arm and names
//! the bad tag instead of crashing.

use crate::error::{PrdGenError, Result};
use crate::prd::GeneratedPrd;
use crate::store::PrdStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Message returned for the declared-but-unimplemented beads format.
pub const BEADS_NOT_IMPLEMENTED: &str =
    "beads export is not implemented yet; the markdown PRD is unaffected";

/// Target tracker formats the wizard can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerFormat {
    /// Structured JSON document, fully supported.
    Json,
    /// Beads issue database; declared but not implemented.
    Beads,
}

impl TrackerFormat {
    pub const ALL: [TrackerFormat; 2] = [TrackerFormat::Json, TrackerFormat::Beads];

    pub fn label(&self) -> &'static str {
        match self {
            TrackerFormat::Json => "json",
            TrackerFormat::Beads => "beads",
        }
    }
}

impl fmt::Display for TrackerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrackerFormat {
    type Err = PrdGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(TrackerFormat::Json),
            "beads" => Ok(TrackerFormat::Beads),
            other => Err(PrdGenError::UnknownFormat(other.to_string())),
        }
    }
}

/// Outcome of one conversion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub success: bool,
    pub format: TrackerFormat,
    /// Present iff the conversion succeeded.
    pub path: Option<PathBuf>,
    /// Present iff the conversion failed.
    pub error: Option<String>,
}

impl ConversionResult {
    fn succeeded(format: TrackerFormat, path: PathBuf) -> Self {
        Self {
            success: true,
            format,
            path: Some(path),
            error: None,
        }
    }

    fn failed(format: TrackerFormat, error: impl Into<String>) -> Self {
        Self {
            success: false,
            format,
            path: None,
            error: Some(error.into()),
        }
    }
}

/// Serialize the PRD as the tracker JSON document.
///
/// Pure: mirrors every [`GeneratedPrd`] field losslessly.
pub fn to_document(prd: &GeneratedPrd) -> Result<String> {
    let mut doc = serde_json::to_string_pretty(prd)?;
    doc.push('\n');
    Ok(doc)
}

/// Convert the PRD for `format` and persist the result through `store`.
///
/// Never fails the caller: every outcome, including the unimplemented
/// beads stub, is reported as a [`ConversionResult`].
pub fn convert(prd: &GeneratedPrd, format: TrackerFormat, store: &PrdStore) -> ConversionResult {
    match format {
        TrackerFormat::Json => {
            let doc = match to_document(prd) {
                Ok(doc) => doc,
                Err(e) => return ConversionResult::failed(format, e.to_string()),
            };
            let path = store.json_path();
            match store.write(&path, &doc) {
                Ok(()) => ConversionResult::succeeded(format, path),
                Err(e) => ConversionResult::failed(format, e.to_string()),
            }
        }
        TrackerFormat::Beads => ConversionResult::failed(format, BEADS_NOT_IMPLEMENTED),
    }
}
