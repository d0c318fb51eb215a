//! Classifier Table
//!
//! Fixed substring-dispatch tables. Every table is an ordered slice of
//! rows evaluated top to bottom; the first matching row wins and a
//! separate default covers the fall-through case.

use crate::graph::Interpretants;

/// Maps a dynamic object / context pair to a meaning state
#[derive(Debug, Clone, Copy)]
pub struct MeaningRule {
    /// Substring required in the dynamic object
    pub dynamic_contains: &'static str,
    /// Substring additionally required in the context, if any
    pub context_contains: Option<&'static str>,
    pub state: &'static str,
}

impl MeaningRule {
    pub fn matches(&self, dynamic_object: &str, context: &str) -> bool {
        dynamic_object.contains(self.dynamic_contains)
            && self.context_contains.map_or(true, |c| context.contains(c))
    }
}

pub const MEANING_RULES: &[MeaningRule] = &[
    MeaningRule { dynamic_contains: "pen", context_contains: Some("sign"), state: "signing" },
    MeaningRule { dynamic_contains: "pen", context_contains: Some("gift"), state: "gifted" },
    MeaningRule { dynamic_contains: "confused", context_contains: None, state: "confused" },
    MeaningRule { dynamic_contains: "nothing", context_contains: None, state: "disengaged" },
    MeaningRule { dynamic_contains: "done", context_contains: None, state: "finished" },
];

pub const DEFAULT_STATE: &str = "processing";

/// Maps a meaning label to its dynamic and final interpretants
#[derive(Debug, Clone, Copy)]
pub struct InterpretantRule {
    pub label_contains: &'static str,
    pub dynamic: &'static str,
    pub final_: &'static str,
}

pub const INTERPRETANT_RULES: &[InterpretantRule] = &[
    InterpretantRule {
        label_contains: "signing",
        dynamic: "User needs to return pen",
        final_: "Transaction implies return",
    },
    InterpretantRule {
        label_contains: "gifted",
        dynamic: "User needs to accept gift",
        final_: "Gift implies obligation",
    },
    InterpretantRule {
        label_contains: "confused",
        dynamic: "User needs help",
        final_: "Confusion implies resolution",
    },
    InterpretantRule {
        label_contains: "disengaged",
        dynamic: "User needs re-engagement",
        final_: "Disengagement implies re-engagement",
    },
    InterpretantRule {
        label_contains: "finished",
        dynamic: "User needs closure",
        final_: "Completion implies closure",
    },
];

/// Maps a dynamic interpretant to the canned reply
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub contains: &'static str,
    pub response: &'static str,
}

pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule { contains: "return pen", response: "Please return the pen after signing." },
    ResponseRule { contains: "accept gift", response: "Would you like me to hold the gift pen for you?" },
    ResponseRule { contains: "needs help", response: "How can I help?" },
    ResponseRule {
        contains: "needs re-engagement",
        response: "Keeping it light today, or just taking a breather?",
    },
    ResponseRule {
        contains: "needs closure",
        response: "Anything else I can assist with before we wrap up?",
    },
];

pub const DEFAULT_RESPONSE: &str = "Got it, what\u{2019}s next?";

/// Alternative sign labels for an exact dynamic interpretant
#[derive(Debug, Clone, Copy)]
pub struct HypothesisRule {
    pub dynamic_interpretant: &'static str,
    pub candidates: &'static [&'static str],
}

pub const HYPOTHESIS_RULES: &[HypothesisRule] = &[
    HypothesisRule {
        dynamic_interpretant: "User needs to return pen",
        candidates: &["I is signing", "I is borrowing"],
    },
    HypothesisRule {
        dynamic_interpretant: "User needs to accept gift",
        candidates: &["I is gifted", "I is honored"],
    },
    HypothesisRule {
        dynamic_interpretant: "User needs help",
        candidates: &["I is confused", "I is uncertain"],
    },
    HypothesisRule {
        dynamic_interpretant: "User needs re-engagement",
        candidates: &["I is disengaged", "I is distracted"],
    },
    HypothesisRule {
        dynamic_interpretant: "User needs closure",
        candidates: &["I is finished", "I is satisfied"],
    },
];

/// Dynamic object with any appended ` + context` removed
pub fn base_object(dynamic_object: &str) -> &str {
    dynamic_object.split(" + ").next().unwrap_or(dynamic_object)
}

/// `"<first word of immediate object> is <state>"`
pub fn initial_meaning(immediate_object: &str, dynamic_object: &str, context: &str) -> String {
    let display = immediate_object.split_whitespace().next().unwrap_or(immediate_object);
    let state = MEANING_RULES
        .iter()
        .find(|rule| rule.matches(dynamic_object, context))
        .map(|rule| rule.state)
        .unwrap_or(DEFAULT_STATE);

    format!("{} is {}", display, state)
}

/// Lift a meaning label into the interpretant triad
pub fn promote_to_interpretants(meaning: &str, dynamic_object: &str) -> Interpretants {
    let (dynamic, final_) = match INTERPRETANT_RULES.iter().find(|rule| meaning.contains(rule.label_contains)) {
        Some(rule) => (rule.dynamic.to_string(), rule.final_.to_string()),
        None => {
            let base = base_object(dynamic_object);
            (
                format!("User needs insight on {}", base),
                format!("Context implies insight on {}", base),
            )
        }
    };

    Interpretants {
        immediate: meaning.to_string(),
        dynamic,
        final_,
    }
}

pub fn generate_response(dynamic_interpretant: &str) -> &'static str {
    RESPONSE_RULES
        .iter()
        .find(|rule| dynamic_interpretant.contains(rule.contains))
        .map(|rule| rule.response)
        .unwrap_or(DEFAULT_RESPONSE)
}

/// Candidate sign labels for a dynamic interpretant; empty when unknown
pub fn hypothesize_signs(dynamic_interpretant: &str) -> &'static [&'static str] {
    HYPOTHESIS_RULES
        .iter()
        .find(|rule| rule.dynamic_interpretant == dynamic_interpretant)
        .map(|rule| rule.candidates)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meaning_rows_in_priority_order() {
        assert_eq!(initial_meaning("I", "borrow + a pen to sign", "a pen to sign"), "I is signing");
        assert_eq!(initial_meaning("You", "gave + me a pen as a gift", "me a pen as a gift"), "You is gifted");
        assert_eq!(initial_meaning("I be", "confused + I", "I"), "I is confused");
        assert_eq!(initial_meaning("I", "doing + nothing", "nothing"), "I is disengaged");
        assert_eq!(initial_meaning("I be", "done", ""), "I is finished");
        assert_eq!(initial_meaning("Unknown", "Unknown", ""), "Unknown is processing");
    }

    #[test]
    fn test_sign_beats_gift() {
        let meaning = initial_meaning("I", "take + pen gift sign", "pen gift sign");
        assert_eq!(meaning, "I is signing");
    }

    #[test]
    fn test_pen_needs_context_keyword() {
        // "sign" only in the dynamic object, not the context
        assert_eq!(initial_meaning("I", "signing + pen", "pen"), "I is processing");
    }

    #[test]
    fn test_promote_table_rows() {
        let triad = promote_to_interpretants("I is signing", "x");
        assert_eq!(triad.immediate, "I is signing");
        assert_eq!(triad.dynamic, "User needs to return pen");
        assert_eq!(triad.final_, "Transaction implies return");

        let triad = promote_to_interpretants("I is finished", "done");
        assert_eq!(triad.dynamic, "User needs closure");
        assert_eq!(triad.final_, "Completion implies closure");
    }

    #[test]
    fn test_promote_default_strips_context() {
        let triad = promote_to_interpretants("I is processing", "walking + I the dog");
        assert_eq!(triad.dynamic, "User needs insight on walking");
        assert_eq!(triad.final_, "Context implies insight on walking");
    }

    #[test]
    fn test_response_is_deterministic() {
        for rule in INTERPRETANT_RULES {
            let first = generate_response(rule.dynamic);
            assert_eq!(first, generate_response(rule.dynamic));
            assert_ne!(first, DEFAULT_RESPONSE);
        }
        assert_eq!(generate_response("User needs help"), "How can I help?");
        assert_eq!(generate_response("User needs insight on x"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_hypotheses_exact_match_only() {
        assert_eq!(hypothesize_signs("User needs help"), &["I is confused", "I is uncertain"]);
        assert!(hypothesize_signs("User needs help now").is_empty());
        assert!(hypothesize_signs("User needs insight on x").is_empty());
    }
}
