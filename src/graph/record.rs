//! Record types
//!
//! One record per processed utterance: the sheet holds the objects, the
//! first cut holds the sign, the double cut holds the interpretant triad.

use serde::{Deserialize, Serialize};

use crate::error::{AnnotatorError, Result};

const IMMEDIATE_PREFIX: &str = "Immediate: ";
const DYNAMIC_PREFIX: &str = "Dynamic: ";
const SHEET_DELIMITER: &str = "; ";

/// A categorized field of the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut<V> {
    pub category: String,
    pub value: V,
}

/// The interpretant triad stored in the double cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretants {
    pub immediate: String,
    pub dynamic: String,
    #[serde(rename = "final")]
    pub final_: String,
}

/// Decomposed sheet value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetParts {
    pub immediate_object: String,
    pub dynamic_object: String,
}

impl SheetParts {
    /// Render as `Immediate: X; Dynamic: Y`
    pub fn render(immediate_object: &str, dynamic_object: &str) -> String {
        format!(
            "{}{}{}{}{}",
            IMMEDIATE_PREFIX, immediate_object, SHEET_DELIMITER, DYNAMIC_PREFIX, dynamic_object
        )
    }

    /// Split a sheet value into its two halves.
    ///
    /// Only the first delimiter separates the halves; the dynamic half may
    /// itself contain `; ` when the utterance did.
    pub fn parse(value: &str) -> Result<Self> {
        let (immediate, dynamic) = value.split_once(SHEET_DELIMITER).ok_or_else(|| {
            AnnotatorError::MalformedRecord(format!("sheet value has no '{}' delimiter: {:?}", SHEET_DELIMITER, value))
        })?;

        let immediate_object = immediate.strip_prefix(IMMEDIATE_PREFIX).ok_or_else(|| {
            AnnotatorError::MalformedRecord(format!("sheet value lacks '{}' prefix: {:?}", IMMEDIATE_PREFIX, value))
        })?;
        let dynamic_object = dynamic.strip_prefix(DYNAMIC_PREFIX).ok_or_else(|| {
            AnnotatorError::MalformedRecord(format!("sheet value lacks '{}' prefix: {:?}", DYNAMIC_PREFIX, value))
        })?;

        Ok(Self {
            immediate_object: immediate_object.to_string(),
            dynamic_object: dynamic_object.to_string(),
        })
    }
}

/// A structured annotation of one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub sheet: Cut<String>,
    pub first_cut: Cut<String>,
    pub double_cut: Cut<Interpretants>,
}

impl Record {
    /// Checked decomposition of the sheet value
    pub fn sheet_parts(&self) -> Result<SheetParts> {
        SheetParts::parse(&self.sheet.value)
    }

    pub fn interpretants(&self) -> &Interpretants {
        &self.double_cut.value
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            sheet: Cut {
                category: "Secondness".to_string(),
                value: SheetParts::render("I be", "confused + I"),
            },
            first_cut: Cut {
                category: "Firstness".to_string(),
                value: "I is confused".to_string(),
            },
            double_cut: Cut {
                category: "Thirdness".to_string(),
                value: Interpretants {
                    immediate: "I is confused".to_string(),
                    dynamic: "User needs help".to_string(),
                    final_: "Confusion implies resolution".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_sheet_render_and_parse() {
        let record = sample();
        assert_eq!(record.sheet.value, "Immediate: I be; Dynamic: confused + I");

        let parts = record.sheet_parts().unwrap();
        assert_eq!(parts.immediate_object, "I be");
        assert_eq!(parts.dynamic_object, "confused + I");
    }

    #[test]
    fn test_dynamic_half_keeps_extra_delimiters() {
        let parts = SheetParts::parse("Immediate: I; Dynamic: done + ; thanks").unwrap();
        assert_eq!(parts.dynamic_object, "done + ; thanks");
    }

    // "I'm done; thanks" keeps its semicolon in the dynamic half
    #[test]
    fn test_semicolon_utterance_round_trips() {
        let value = SheetParts::render("I be", "done + I ; thanks");
        assert_eq!(value, "Immediate: I be; Dynamic: done + I ; thanks");
        assert_eq!(value.split("; ").count(), 3);

        let parts = SheetParts::parse(&value).unwrap();
        assert_eq!(parts.immediate_object, "I be");
        assert_eq!(parts.dynamic_object, "done + I ; thanks");
    }

    #[test]
    fn test_malformed_sheet() {
        let err = SheetParts::parse("Immediate: I Dynamic: done").unwrap_err();
        assert!(matches!(err, AnnotatorError::MalformedRecord(_)));

        let err = SheetParts::parse("I; Dynamic: done").unwrap_err();
        assert!(matches!(err, AnnotatorError::MalformedRecord(_)));

        let err = SheetParts::parse("Immediate: I; done").unwrap_err();
        assert!(matches!(err, AnnotatorError::MalformedRecord(_)));
    }

    #[test]
    fn test_json_layout() {
        let record = sample();
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["double_cut"]["value"]["final"], "Confusion implies resolution");
        assert_eq!(value["first_cut"]["category"], "Firstness");

        let back = Record::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
