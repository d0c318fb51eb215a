//! Schema document
//!
//! Static description of the record's field names and their categories.
//! Loaded once at startup and passed around by reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AnnotatorError, Result};

/// Category and optional description for one record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSpec {
    fn new(category: &str, description: &str) -> Self {
        Self {
            category: category.to_string(),
            description: Some(description.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub sheet: FieldSpec,
    pub first_cut: FieldSpec,
    pub double_cut: FieldSpec,
}

/// The schema document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub structure: Structure,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            structure: Structure {
                sheet: FieldSpec::new("Secondness", "Immediate and dynamic objects"),
                first_cut: FieldSpec::new("Firstness", "Sign"),
                double_cut: FieldSpec::new("Thirdness", "Immediate, dynamic and final interpretants"),
            },
        }
    }
}

impl Schema {
    /// Load from a JSON or YAML file, chosen by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AnnotatorError::Schema(format!("cannot read {}: {}", path.display(), e)))?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            Self::from_yaml(&raw)
        } else {
            Self::from_json(&raw)
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| AnnotatorError::Schema(e.to_string()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).map_err(|e| AnnotatorError::Schema(e.to_string()))
    }
}
