use crate::error::{PrdGenError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "prdgen";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default directory PRD files are written to, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./tasks";

// ============================================================================
// Global Config File
// ============================================================================

/// User-level settings loaded from `~/.config/prdgen/config.toml`.
///
/// Every field is optional in the file; missing fields fall back to the
/// built-in defaults so partial configs work correctly.
///
/// # Example
///
/// ```toml
/// # Directory PRD files are written to (relative paths resolve against
/// # the working directory)
/// output_dir = "./tasks"
///
/// # Skip the overwrite confirmation when a PRD file already exists
/// force = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where PRD files land. `None` means the built-in default.
    #[serde(default)]
    pub output_dir: Option<String>,

    /// When `true`, existing PRD files are overwritten without asking.
    #[serde(default)]
    pub force: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            force: false,
        }
    }
}

/// Path to the user-level config directory (`~/.config/prdgen`).
pub fn config_base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| PrdGenError::Config("could not determine home directory".into()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Path to the user-level config file.
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_base_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the global config, tolerating a missing file.
///
/// A file that exists but fails to parse is a real error; silently ignoring
/// it would mask typos in user settings.
pub fn load_global_config() -> Result<GlobalConfig> {
    let path = global_config_path()?;
    load_global_config_from(&path)
}

fn load_global_config_from(path: &Path) -> Result<GlobalConfig> {
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| PrdGenError::Config(e.to_string()))
}

// ============================================================================
// Wizard Configuration
// ============================================================================

/// Effective configuration for one wizard run.
///
/// Built by layering CLI flags over the global config file over built-in
/// defaults, then fixed for the lifetime of the run.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Base directory the wizard operates in.
    pub cwd: PathBuf,
    /// Output directory for PRD files; relative paths resolve against `cwd`.
    pub output_dir: PathBuf,
    /// Skip the overwrite confirmation for existing PRD files.
    pub force: bool,
}

impl WizardConfig {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            force: false,
        }
    }

    /// Config rooted at the process working directory.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    /// Layer values from the global config file under any CLI overrides.
    pub fn with_global(mut self, global: &GlobalConfig) -> Self {
        if let Some(dir) = &global.output_dir {
            self.output_dir = PathBuf::from(dir);
        }
        self.force = self.force || global.force;
        self
    }

    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// The output directory resolved against `cwd`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            self.cwd.join(&self.output_dir)
        }
    }
}
