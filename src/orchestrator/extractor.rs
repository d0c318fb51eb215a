//! Extractor - Object extraction from tagged tokens
//!
//! Picks the immediate object (first pronoun) and the dynamic object
//! (first verb or adjective), then folds the leftover tokens into context.

use serde::{Deserialize, Serialize};

use crate::nlp::{PosTag, Token};

pub const UNKNOWN: &str = "Unknown";
pub const FIRST_PERSON_CONTRACTION: &str = "'m";

/// Output of the extractor for one utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub immediate_object: String,
    /// Predicate token, with ` + <context>` appended when context exists
    pub dynamic_object: String,
    pub context: String,
    /// Raw token texts in order
    pub tokens: Vec<String>,
}

/// Derive `(immediate_object, dynamic_object, context)` from tagged tokens
pub fn extract(tokens: &[Token]) -> Extraction {
    let texts: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();

    let mut immediate_object = tokens
        .iter()
        .find(|t| t.pos == PosTag::Pron)
        .map(|t| t.text.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    if texts.iter().any(|t| t == FIRST_PERSON_CONTRACTION) {
        immediate_object = format!("{} be", immediate_object);
    }

    let predicate = tokens
        .iter()
        .find(|t| t.pos.is_predicate() && t.text != FIRST_PERSON_CONTRACTION)
        .map(|t| t.text.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    // Exclusion is by text, so the suffixed "I be" never removes a bare "I".
    let context = if texts.len() > 2 {
        texts
            .iter()
            .filter(|t| {
                t.as_str() != immediate_object
                    && t.as_str() != FIRST_PERSON_CONTRACTION
                    && t.as_str() != predicate
            })
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        String::new()
    };

    let dynamic_object = if context.is_empty() {
        predicate
    } else {
        format!("{} + {}", predicate, context)
    };

    Extraction {
        immediate_object,
        dynamic_object,
        context,
        tokens: texts,
    }
}
