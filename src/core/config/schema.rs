//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for both scopes (global and project); the
//! project file overrides the global one field by field.
//!
//! # Validation
//!
//! Values are validated after parsing: capacities must be usable and
//! per-course override keys must name a course in the catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::catalog::CourseCatalog;

/// Registrar configuration (either scope).
///
/// # Example
///
/// ```toml
/// capacity = 2
/// waitlist_capacity = 4
/// interactive = true
///
/// [seed]
/// students = 60
/// rng_seed = 42
///
/// [courses."MATH 101"]
/// capacity = 30
/// waitlist_capacity = 5
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Default roster capacity for every course
    pub capacity: Option<usize>,

    /// Default waitlist capacity for every course
    pub waitlist_capacity: Option<usize>,

    /// Default interactive mode for the shell
    pub interactive: Option<bool>,

    /// Random fill settings
    pub seed: Option<SeedConfig>,

    /// Per-course limits, keyed by catalog label
    pub courses: Option<BTreeMap<String, CourseOverride>>,
}

impl RegistrarConfig {
    /// Validate the configuration values against a catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self, catalog: &CourseCatalog) -> Result<(), ConfigError> {
        if self.capacity == Some(0) {
            return Err(ConfigError::InvalidValue(
                "capacity must be at least 1".to_string(),
            ));
        }

        if let Some(courses) = &self.courses {
            for (name, limits) in courses {
                if catalog.index_of(name).is_none() {
                    return Err(ConfigError::InvalidValue(format!(
                        "unknown course '{}' in [courses]",
                        name
                    )));
                }
                if limits.capacity == Some(0) {
                    return Err(ConfigError::InvalidValue(format!(
                        "capacity for '{}' must be at least 1",
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Random fill settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// How many students `simulate` generates
    pub students: Option<usize>,

    /// Fixed RNG seed; absent means seed from entropy
    pub rng_seed: Option<u64>,
}

/// Limits for a single course.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CourseOverride {
    pub capacity: Option<usize>,
    pub waitlist_capacity: Option<usize>,
}
