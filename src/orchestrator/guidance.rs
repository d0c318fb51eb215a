//! Guidance Composer
//!
//! Renders the fixed guidance sentence for a record: sensory cues inferred
//! from the dynamic object, the interpretants, and an abduction prompt.

use crate::error::Result;
use crate::graph::Record;
use crate::orchestrator::classifier::hypothesize_signs;

/// Sensory cue row: every listed substring must occur in the dynamic object
#[derive(Debug, Clone, Copy)]
pub struct SensoryRule {
    pub all_of: &'static [&'static str],
    pub cues: &'static str,
}

impl SensoryRule {
    pub fn matches(&self, dynamic_object: &str) -> bool {
        self.all_of.iter().all(|needle| dynamic_object.contains(needle))
    }
}

pub const SENSORY_RULES: &[SensoryRule] = &[
    SensoryRule { all_of: &["pen", "sign"], cues: "see and feel (the pen being handed)" },
    SensoryRule { all_of: &["pen", "gift"], cues: "see and hear (the gift announcement)" },
    SensoryRule { all_of: &["confused"], cues: "feel (mental fog)" },
    SensoryRule { all_of: &["nothing"], cues: "sense (lack of focus)" },
    SensoryRule { all_of: &["done"], cues: "feel (completion)" },
];

pub const DEFAULT_CUES: &str = "sense";

pub fn infer_sensory_cues(dynamic_object: &str) -> &'static str {
    SENSORY_RULES
        .iter()
        .find(|rule| rule.matches(dynamic_object))
        .map(|rule| rule.cues)
        .unwrap_or(DEFAULT_CUES)
}

/// The closing question proposing alternative signs
pub fn abduction_clause(dynamic_interpretant: &str, sign: &str) -> String {
    let candidates = hypothesize_signs(dynamic_interpretant);
    let subject = if candidates.is_empty() {
        format!("'{}' is the main interpretation", sign)
    } else {
        candidates
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(" or ")
    };
    format!("Could it be that {} explains what you\u{2019}re experiencing?", subject)
}

/// Compose the guidance sentence. Fails on a malformed sheet value.
pub fn compose_guidance(record: &Record) -> Result<String> {
    let parts = record.sheet_parts()?;
    let interpretants = record.interpretants();
    let cues = infer_sensory_cues(&parts.dynamic_object);

    Ok(format!(
        "Based on what you {}, you seem to feel '{}' in the context of '{}', which follows a norm: '{}'. {}",
        cues,
        interpretants.immediate,
        parts.dynamic_object,
        interpretants.final_,
        abduction_clause(&interpretants.dynamic, &record.first_cut.value)
    ))
}
