//! JSON generation profile: ID prefix, class label and the subject list
//! with per-subject score ranges and pass policy.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generate::{ClassAssignment, DEFAULT_ID_PREFIX};
use crate::model::names::RANDOM_CLASS_LABEL;
use crate::model::subject::{
    DEFAULT_MAX_SCORE, DEFAULT_MIN_SCORE, DEFAULT_PASS_RATE, DEFAULT_PASS_SCORE, SubjectSpec,
    builtin_subjects,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
}

fn default_min() -> i64 {
    DEFAULT_MIN_SCORE
}

fn default_max() -> i64 {
    DEFAULT_MAX_SCORE
}

fn default_pass_score() -> i64 {
    DEFAULT_PASS_SCORE
}

fn default_pass_rate() -> f64 {
    DEFAULT_PASS_RATE * 100.0
}

fn default_enabled() -> bool {
    true
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: String,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
    #[serde(default = "default_pass_score")]
    pub pass_score: i64,
    /// Percent, 0 to 100.
    #[serde(default = "default_pass_rate")]
    pub pass_rate: f64,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl SubjectEntry {
    pub fn to_spec(&self) -> SubjectSpec {
        SubjectSpec::new(
            self.name.clone(),
            self.min,
            self.max,
            self.pass_score,
            self.pass_rate / 100.0,
        )
    }
}

impl From<&SubjectSpec> for SubjectEntry {
    fn from(spec: &SubjectSpec) -> Self {
        Self {
            name: spec.name.clone(),
            min: spec.min_score,
            max: spec.max_score,
            pass_score: spec.pass_score,
            pass_rate: spec.target_pass_rate * 100.0,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorProfile {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default = "builtin_entries")]
    pub subjects: Vec<SubjectEntry>,
}

fn builtin_entries() -> Vec<SubjectEntry> {
    builtin_subjects().iter().map(SubjectEntry::from).collect()
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GeneratorProfile {
    /// Built-in subject presets, prefix `2023`, random class assignment.
    pub fn builtin() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            class: None,
            subjects: builtin_entries(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Enabled subjects in profile order, or exactly `names` in the given
    /// order when non-empty (an explicit name selects a disabled entry too).
    pub fn selected_subjects(&self, names: &[String]) -> Result<Vec<SubjectSpec>, ConfigError> {
        if names.is_empty() {
            return Ok(self
                .subjects
                .iter()
                .filter(|s| s.enabled)
                .map(SubjectEntry::to_spec)
                .collect());
        }
        names
            .iter()
            .map(|name| {
                let name = name.trim();
                self.subjects
                    .iter()
                    .find(|s| s.name.eq_ignore_ascii_case(name))
                    .map(SubjectEntry::to_spec)
                    .ok_or_else(|| ConfigError::UnknownSubject(name.to_string()))
            })
            .collect()
    }

    /// A command-line label wins over the profile; neither means random.
    pub fn class_assignment(&self, override_label: Option<&str>) -> ClassAssignment {
        let label = override_label
            .or(self.class.as_deref())
            .unwrap_or(RANDOM_CLASS_LABEL);
        ClassAssignment::from_label(label)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config/mod.rs"]
mod tests;
