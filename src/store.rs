use crate::config::WizardConfig;
use crate::error::{PrdGenError, Result};
use crate::generator;
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown PRDs are written as `prd-<slug>.md`.
const MARKDOWN_PREFIX: &str = "prd-";
/// The tracker document always lands at this fixed filename.
pub const JSON_FILE_NAME: &str = "prd.json";

/// File persistence for PRD artifacts, rooted at the output directory.
///
/// Writes are unconditional; overwrite protection is the caller's concern
/// and happens before `write` is reached.
pub struct PrdStore {
    output_dir: PathBuf,
}

impl PrdStore {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn from_config(config: &WizardConfig) -> Self {
        Self::new(config.resolved_output_dir())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target path for a PRD's markdown file.
    pub fn markdown_path(&self, slug: &str) -> PathBuf {
        self.output_dir.join(format!("{MARKDOWN_PREFIX}{slug}.md"))
    }

    /// Target path for the tracker JSON document.
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    /// Create the output directory and any missing ancestors.
    ///
    /// Idempotent: an existing directory is not an error.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| PrdGenError::OutputDir {
            path: self.output_dir.clone(),
            message: e.to_string(),
        })
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Write `content` to `path`, replacing any existing file.
    pub fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| PrdGenError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Does a PRD already exist for this feature?
    ///
    /// Derives the expected markdown path purely from the feature name's
    /// slug, so it answers the same way before and after a wizard run.
    pub fn prd_exists(&self, feature_name: &str) -> Option<PathBuf> {
        let name = generator::derive_name(feature_name);
        let path = self.markdown_path(&generator::slugify(&name));
        if path.exists() {
            Some(path)
        } else {
            None
        }
    }
}
