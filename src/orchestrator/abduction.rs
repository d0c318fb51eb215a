//! Hypothesis Substitution
//!
//! In abduction mode the first candidate sign for the turn's dynamic
//! interpretant replaces the first cut. The immediate interpretant is then
//! re-derived by feeding that candidate label through `initial_meaning` in
//! the dynamic-object position.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::graph::Record;
use crate::orchestrator::classifier::{hypothesize_signs, initial_meaning};

/// Reasoning mode for a processing call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    ModusPonens,
    Abduction,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::ModusPonens => write!(f, "modus_ponens"),
            Mode::Abduction => write!(f, "abduction"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modus_ponens" => Ok(Mode::ModusPonens),
            "abduction" => Ok(Mode::Abduction),
            other => Err(format!("unknown mode '{}' (expected modus_ponens or abduction)", other)),
        }
    }
}

/// Returns the substituted record, or `None` when the interpretant has no
/// hypotheses.
pub fn substitute_hypothesis(
    record: &Record,
    dynamic_interpretant: &str,
    immediate_object: &str,
    context: &str,
) -> Option<Record> {
    let candidate = hypothesize_signs(dynamic_interpretant).first()?;
    debug!("Abduction: '{}' -> '{}'", dynamic_interpretant, candidate);

    let mut substituted = record.clone();
    substituted.first_cut.value = candidate.to_string();
    substituted.double_cut.value.immediate = initial_meaning(immediate_object, candidate, context);
    Some(substituted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Schema;
    use crate::orchestrator::builder::RecordBuilder;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("abduction".parse::<Mode>().unwrap(), Mode::Abduction);
        assert_eq!(" Modus_Ponens ".parse::<Mode>().unwrap(), Mode::ModusPonens);
        assert!("deduction".parse::<Mode>().is_err());
        assert!("ponens".parse::<Mode>().is_err());
        assert_eq!(Mode::default().to_string(), "modus_ponens");
    }

    #[test]
    fn test_substitution_swaps_argument_role() {
        let schema = Schema::default();
        let record = RecordBuilder::new(&schema).build("I be", "confused + I", "I");

        let out = substitute_hypothesis(&record, "User needs help", "I be", "I").unwrap();
        assert_eq!(out.first_cut.value, "I is confused");
        // "I is confused" contains "confused", so the meaning lookup matches it
        assert_eq!(out.double_cut.value.immediate, "I is confused");
        assert_eq!(out.double_cut.value.dynamic, record.double_cut.value.dynamic);
        assert_eq!(out.sheet, record.sheet);
    }

    #[test]
    fn test_substitution_through_default_row() {
        let schema = Schema::default();
        let record = RecordBuilder::new(&schema).build("I be", "done", "");

        let out = substitute_hypothesis(&record, "User needs closure", "I be", "").unwrap();
        assert_eq!(out.first_cut.value, "I is finished");
        // the candidate label has no "done", so it falls through to the default
        assert_eq!(out.double_cut.value.immediate, "I is processing");
        assert_eq!(record.first_cut.value, "I is finished");
        assert_eq!(record.double_cut.value.immediate, "I is finished");
    }

    #[test]
    fn test_no_hypothesis_no_record() {
        let schema = Schema::default();
        let record = RecordBuilder::new(&schema).build("I", "walking", "");
        assert!(substitute_hypothesis(&record, "User needs insight on walking", "I", "").is_none());
    }
}
