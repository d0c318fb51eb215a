//! Context Differentiator
//!
//! Re-derives a turn's record when it lands on a different sheet than the
//! prior turn. The input record is left untouched; a new one is returned.

use tracing::debug;

use crate::graph::Record;
use crate::orchestrator::builder::RecordBuilder;
use crate::orchestrator::classifier::base_object;
use crate::orchestrator::extractor::{Extraction, FIRST_PERSON_CONTRACTION};

const SPEAKER: &str = "I";

/// Base dynamic object plus a context rebuilt from the raw tokens minus
/// the speaker and the contraction. The separator is kept even when the
/// fresh context is empty.
pub fn differentiate(dynamic_object: &str, tokens: &[String]) -> String {
    let base = base_object(dynamic_object);
    let fresh = if tokens.len() > 2 {
        tokens
            .iter()
            .filter(|t| t.as_str() != SPEAKER && t.as_str() != FIRST_PERSON_CONTRACTION)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        String::new()
    };
    format!("{} + {}", base, fresh)
}

/// Whether a prior turn forces re-derivation of `current`
pub fn needs_shift(prior: Option<&Record>, current: &Record) -> bool {
    prior.map_or(false, |p| p.sheet.value != current.sheet.value)
}

/// Rebuild every field from the differentiated dynamic object.
///
/// The meaning is still matched against the turn's unshifted context.
pub fn shift_context(builder: &RecordBuilder<'_>, extraction: &Extraction) -> Record {
    let shifted = differentiate(&extraction.dynamic_object, &extraction.tokens);
    debug!("Context shift: '{}' -> '{}'", extraction.dynamic_object, shifted);
    builder.build(&extraction.immediate_object, &shifted, &extraction.context)
}
