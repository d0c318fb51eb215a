//! NLP Module
//!
//! Tokenization and part-of-speech tagging behind a narrow `Tagger` seam.
//! The annotator only needs two capabilities: split text into tokens and
//! tag each token with a coarse part of speech.

pub mod lexicon;

pub use lexicon::LexiconTagger;

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags (Universal POS subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Pron,
    Verb,
    Aux,
    Adj,
    Noun,
    Det,
    Adp,
    Adv,
    Cconj,
    Sconj,
    Part,
    Num,
    Intj,
    Punct,
}

impl PosTag {
    /// Tags the extractor treats as predicate-like
    pub fn is_predicate(&self) -> bool {
        matches!(self, PosTag::Verb | PosTag::Adj)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PosTag::Pron => "PRON",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adj => "ADJ",
            PosTag::Noun => "NOUN",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Num => "NUM",
            PosTag::Intj => "INTJ",
            PosTag::Punct => "PUNCT",
        };
        write!(f, "{}", label)
    }
}

/// A single tagged token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
}

/// Capability set the pipeline calls into: `{tokenize, pos_tag}`
pub trait Tagger: Send + Sync {
    /// Split raw text into ordered token strings
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Assign a part of speech to every token, preserving order
    fn pos_tag(&self, tokens: &[String]) -> Vec<Token>;

    /// Tokenize and tag in one step
    fn tag(&self, text: &str) -> Vec<Token> {
        let tokens = self.tokenize(text);
        self.pos_tag(&tokens)
    }
}
