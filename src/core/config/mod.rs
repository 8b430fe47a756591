//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! The registrar has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Settings for the current working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (see [`Config::with_default_limits`])
//!
//! Per-course `[courses."NAME"]` entries beat the scope-wide defaults.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$REGISTRAR_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/registrar/config.toml`
//! 3. `~/.registrar/config.toml` (canonical write location)
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `.registrar/config.toml` (canonical)
//! 2. `registrar.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use registrar::core::config::Config;
//! use registrar::core::types::CourseId;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! let limits = config.limits_for(&CourseId::new("MATH 101"));
//! println!("capacity {} / waitlist {}", limits.capacity, limits.waitlist_capacity);
//! ```

pub mod schema;

pub use schema::{CourseOverride, RegistrarConfig, SeedConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::catalog::CourseCatalog;
use crate::core::types::CourseId;

/// Roster capacity when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 2;
/// Waitlist capacity when nothing is configured.
pub const DEFAULT_WAITLIST_CAPACITY: usize = 4;
/// Students generated by the random fill when nothing is configured.
pub const DEFAULT_SEED_STUDENTS: usize = 60;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Resolved roster and waitlist limits for one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseLimits {
    pub capacity: usize,
    pub waitlist_capacity: usize,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules automatically.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: RegistrarConfig,
    /// Project configuration (if found)
    pub project: Option<RegistrarConfig>,
    /// Scope-wide limits from CLI flags
    flag_capacity: Option<usize>,
    flag_waitlist_capacity: Option<usize>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads project config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or fail
    /// validation. Missing config files are not an error.
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration from an explicit global file and project dir.
    ///
    /// `global_path` may point at a file that does not exist; defaults are
    /// used in that case.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = match global_path {
            Some(path) if path.exists() => (Self::read_config(path)?, Some(path.to_path_buf())),
            _ => (RegistrarConfig::default(), None),
        };

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir, &mut warnings)?,
            None => (None, None),
        };

        let catalog = CourseCatalog::standard();
        global.validate(&catalog)?;
        if let Some(ref p) = project {
            p.validate(&catalog)?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                flag_capacity: None,
                flag_waitlist_capacity: None,
                global_path,
                project_path,
            },
            warnings,
        })
    }

    /// Locate the global config file, if any.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $REGISTRAR_CONFIG
        if let Ok(path) = std::env::var("REGISTRAR_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/registrar/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("registrar/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.registrar/config.toml
        dirs::home_dir()
            .map(|home| home.join(".registrar/config.toml"))
            .filter(|path| path.exists())
    }

    /// Load project configuration from standard locations.
    fn load_project(
        dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<RegistrarConfig>, Option<PathBuf>), ConfigError> {
        let canonical = Self::project_config_path(dir);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        let compat = dir.join("registrar.toml");
        if compat.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please move to '{}'",
                    canonical.display()
                ),
                path: compat.clone(),
            });
            let config = Self::read_config(&compat)?;
            return Ok((Some(config), Some(compat)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<RegistrarConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.registrar/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".registrar/config.toml"))
    }

    /// Get the canonical path for project config under `dir`.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(".registrar/config.toml")
    }

    /// Write project config atomically.
    ///
    /// Creates parent directories if needed.
    pub fn write_project(dir: &Path, config: &RegistrarConfig) -> Result<PathBuf, ConfigError> {
        config.validate(&CourseCatalog::standard())?;
        let path = Self::project_config_path(dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically (temp file, then rename).
    fn write_config_atomic(path: &Path, config: &RegistrarConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Apply scope-wide limits given on the command line.
    ///
    /// Per-course overrides from config files still win for their course.
    pub fn with_default_limits(
        mut self,
        capacity: Option<usize>,
        waitlist_capacity: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if capacity == Some(0) {
            return Err(ConfigError::InvalidValue(
                "capacity must be at least 1".to_string(),
            ));
        }
        self.flag_capacity = capacity.or(self.flag_capacity);
        self.flag_waitlist_capacity = waitlist_capacity.or(self.flag_waitlist_capacity);
        Ok(self)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Look up a field in project scope, then global scope.
    fn layered<T>(&self, get: impl Fn(&RegistrarConfig) -> Option<T>) -> Option<T> {
        self.project.as_ref().and_then(&get).or_else(|| get(&self.global))
    }

    /// Default roster capacity.
    ///
    /// Defaults to [`DEFAULT_CAPACITY`] if not configured.
    pub fn capacity(&self) -> usize {
        self.flag_capacity
            .or_else(|| self.layered(|c| c.capacity))
            .unwrap_or(DEFAULT_CAPACITY)
    }

    /// Default waitlist capacity.
    ///
    /// Defaults to [`DEFAULT_WAITLIST_CAPACITY`] if not configured.
    pub fn waitlist_capacity(&self) -> usize {
        self.flag_waitlist_capacity
            .or_else(|| self.layered(|c| c.waitlist_capacity))
            .unwrap_or(DEFAULT_WAITLIST_CAPACITY)
    }

    /// Limits for a specific course, applying any per-course override.
    pub fn limits_for(&self, course: &CourseId) -> CourseLimits {
        let over = |get: fn(&CourseOverride) -> Option<usize>| {
            self.layered(|c| c.courses.as_ref()?.get(course.as_str()).and_then(get))
        };
        CourseLimits {
            capacity: over(|o| o.capacity).unwrap_or_else(|| self.capacity()),
            waitlist_capacity: over(|o| o.waitlist_capacity)
                .unwrap_or_else(|| self.waitlist_capacity()),
        }
    }

    /// Check if the shell prompts interactively by default.
    ///
    /// Defaults to `true` if not configured.
    pub fn interactive(&self) -> bool {
        self.layered(|c| c.interactive).unwrap_or(true)
    }

    /// Number of students the random fill generates.
    pub fn seed_students(&self) -> usize {
        self.layered(|c| c.seed.as_ref()?.students)
            .unwrap_or(DEFAULT_SEED_STUDENTS)
    }

    /// Fixed RNG seed for the random fill, if configured.
    pub fn rng_seed(&self) -> Option<u64> {
        self.layered(|c| c.seed.as_ref()?.rng_seed)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
