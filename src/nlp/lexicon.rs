//! Lexicon Tagger
//!
//! Rule-based English tokenizer and tagger. Closed-class words come from
//! fixed word lists; open-class words fall back to suffix rules and then
//! to NOUN.

use lazy_static::lazy_static;
use regex::Regex;

use super::{PosTag, Tagger, Token};

lazy_static! {
    /// Words (with inner apostrophes kept together) or single punctuation marks
    static ref WORD_PATTERN: Regex =
        Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)*|[^\sA-Za-z0-9]").unwrap();

    /// Trailing English clitics split off into their own tokens
    static ref CLITIC_PATTERN: Regex =
        Regex::new(r"(?i)^(?P<stem>[a-z0-9]+?)(?P<clitic>n't|'m|'s|'re|'ve|'ll|'d)$").unwrap();
}

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves",
    "who", "whom", "whose", "what", "nothing", "something", "anything", "everything",
    "someone", "anyone", "everyone", "nobody", "somebody", "everybody", "none",
];

const DEMONSTRATIVES: &[&str] = &["this", "that", "these", "those"];

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "some", "any", "no", "every", "each", "all", "both", "another",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being",
    "'m", "'re", "'ve", "'ll", "'d",
    "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    "ca", "wo",
];

/// Verbs that act as auxiliaries only when followed by a verb or negation
const LIGHT_VERBS: &[&str] = &["have", "has", "had", "do", "does", "did"];

const VERBS: &[&str] = &[
    "sign", "signs", "give", "gives", "gave", "given", "take", "takes", "took", "taken",
    "return", "returns", "borrow", "borrows", "lend", "lends", "lent", "hand", "hands",
    "accept", "accepts", "keep", "keeps", "kept", "want", "wants", "need", "needs",
    "help", "helps", "think", "thinks", "thought", "know", "knows", "knew", "known",
    "feel", "feels", "felt", "see", "sees", "saw", "seen", "hear", "hears", "heard",
    "say", "says", "said", "tell", "tells", "told", "ask", "asks", "go", "goes", "went",
    "gone", "get", "gets", "got", "make", "makes", "made", "come", "comes", "came",
    "find", "finds", "found", "use", "uses", "try", "tries", "leave", "leaves", "left",
    "call", "calls", "let", "lets", "begin", "begins", "began", "begun", "seem", "seems",
    "show", "shows", "shown", "believe", "believes", "understand", "understands",
    "understood", "love", "loves", "wrap", "wraps", "finish", "finishes", "done",
    "thank", "write", "writes", "wrote", "written", "read", "reads", "hold", "holds",
    "held", "bring", "brings", "brought", "buy", "buys", "bought", "pay", "pays", "paid",
    "open", "opens", "close", "closes", "start", "starts", "stop", "stops", "wait",
    "waits", "work", "works", "play", "plays", "look", "looks", "watch", "watches",
    "forget", "forgets", "forgot", "remember", "remembers", "mean", "means", "meant",
    "guess", "wonder", "care", "cares", "rest", "relax",
];

const ADJECTIVES: &[&str] = &[
    "confused", "tired", "happy", "sad", "good", "bad", "great", "nice", "fine", "new",
    "old", "big", "small", "large", "little", "sure", "ready", "busy", "bored", "lost",
    "sorry", "glad", "free", "late", "early", "right", "wrong", "able", "beautiful",
    "important", "different", "same", "last", "next", "best", "worst", "unsure",
    "uncertain", "overwhelmed", "stuck", "fun", "okay",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "with", "by", "from", "of", "about", "into", "through",
    "during", "before", "after", "above", "below", "between", "under", "over", "against",
    "among", "around", "behind", "beside", "beyond", "within", "without", "upon",
    "toward", "like", "as", "to",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "until", "whether", "than",
    "when", "where",
];

const ADVERBS: &[&str] = &[
    "very", "really", "also", "just", "still", "only", "even", "now", "then", "here",
    "there", "always", "never", "often", "sometimes", "soon", "already", "almost",
    "enough", "quite", "too", "well", "more", "most", "less", "ever", "ago", "again",
    "today", "maybe", "not",
];

const INTERJECTIONS: &[&str] = &[
    "hi", "hello", "hey", "thanks", "please", "oh", "ok", "yes", "wow", "bye",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ish"];

/// Rule-based tagger backed by closed-class word lists
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Tag a token from its own form only
    fn lexical_tag(word: &str) -> PosTag {
        let lower = word.to_lowercase();
        let w = lower.as_str();

        if w.chars().all(|c| !c.is_alphanumeric()) {
            return PosTag::Punct;
        }
        if w.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Num;
        }
        if w == "n't" {
            return PosTag::Part;
        }
        if w == "'s" {
            // possessive unless reattached as a copula by the context pass
            return PosTag::Part;
        }
        if PRONOUNS.contains(&w) || DEMONSTRATIVES.contains(&w) {
            return PosTag::Pron;
        }
        if DETERMINERS.contains(&w) {
            return PosTag::Det;
        }
        if AUXILIARIES.contains(&w) {
            return PosTag::Aux;
        }
        if LIGHT_VERBS.contains(&w) || VERBS.contains(&w) {
            return PosTag::Verb;
        }
        if ADJECTIVES.contains(&w) {
            return PosTag::Adj;
        }
        if ADPOSITIONS.contains(&w) {
            return PosTag::Adp;
        }
        if COORDINATORS.contains(&w) {
            return PosTag::Cconj;
        }
        if SUBORDINATORS.contains(&w) {
            return PosTag::Sconj;
        }
        if ADVERBS.contains(&w) {
            return PosTag::Adv;
        }
        if INTERJECTIONS.contains(&w) {
            return PosTag::Intj;
        }

        if w.len() > 4 && (w.ends_with("ing") || w.ends_with("ed")) {
            return PosTag::Verb;
        }
        if w.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
            return PosTag::Adj;
        }
        if w.len() > 3 && w.ends_with("ly") {
            return PosTag::Adv;
        }

        PosTag::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.replace('\u{2019}', "'");
        let mut tokens = Vec::new();

        for m in WORD_PATTERN.find_iter(&normalized) {
            let word = m.as_str();
            match CLITIC_PATTERN.captures(word) {
                Some(caps) => {
                    tokens.push(caps["stem"].to_string());
                    tokens.push(caps["clitic"].to_lowercase());
                }
                None => tokens.push(word.to_string()),
            }
        }

        tokens
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<Token> {
        let mut tags: Vec<PosTag> = tokens.iter().map(|t| Self::lexical_tag(t)).collect();

        // Context pass: a handful of words change class depending on neighbours.
        for i in 0..tokens.len() {
            let lower = tokens[i].to_lowercase();
            let next = tags.get(i + 1).copied();
            let prev = if i > 0 { Some(tags[i - 1]) } else { None };

            if DEMONSTRATIVES.contains(&lower.as_str())
                && matches!(next, Some(PosTag::Noun) | Some(PosTag::Adj))
            {
                tags[i] = PosTag::Det;
            } else if LIGHT_VERBS.contains(&lower.as_str())
                && (matches!(next, Some(PosTag::Verb) | Some(PosTag::Part))
                    || tokens.get(i + 1).map(|t| t.eq_ignore_ascii_case("not")).unwrap_or(false))
            {
                tags[i] = PosTag::Aux;
            } else if lower == "to" && next == Some(PosTag::Verb) {
                tags[i] = PosTag::Part;
            } else if lower == "'s" && prev == Some(PosTag::Pron) {
                tags[i] = PosTag::Aux;
            }
        }

        tokens
            .iter()
            .zip(tags)
            .map(|(text, pos)| Token {
                text: text.clone(),
                pos,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_contraction_split() {
        let tagger = LexiconTagger::new();
        let tokens = tagger.tokenize("I'm signing this for you");
        assert_eq!(tokens, vec!["I", "'m", "signing", "this", "for", "you"]);

        let tokens = tagger.tokenize("I don't know.");
        assert_eq!(tokens, vec!["I", "do", "n't", "know", "."]);
    }

    #[test]
    fn test_curly_apostrophe_normalized() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tokenize("I\u{2019}m done"), vec!["I", "'m", "done"]);
    }

    #[test]
    fn test_core_tags() {
        let tagger = LexiconTagger::new();
        let tokens = tagger.tag("I'm confused");
        assert_eq!(texts(&tokens), vec!["I", "'m", "confused"]);
        assert_eq!(tokens[0].pos, PosTag::Pron);
        assert_eq!(tokens[1].pos, PosTag::Aux);
        assert_eq!(tokens[2].pos, PosTag::Adj);
        assert_eq!(tokens[1].pos.to_string(), "AUX");
    }

    #[test]
    fn test_suffix_rules() {
        let tagger = LexiconTagger::new();
        let tokens = tagger.tag("signing wonderful pen");
        assert_eq!(tokens[0].pos, PosTag::Verb);
        assert_eq!(tokens[1].pos, PosTag::Adj);
        assert_eq!(tokens[2].pos, PosTag::Noun);
    }

    #[test]
    fn test_context_pass() {
        let tagger = LexiconTagger::new();

        let tokens = tagger.tag("I want to sign this pen");
        assert_eq!(tokens[2].pos, PosTag::Part);
        assert_eq!(tokens[4].pos, PosTag::Det);

        let tokens = tagger.tag("I do n't know");
        assert_eq!(tokens[1].pos, PosTag::Aux);

        let tokens = tagger.tag("sign this");
        assert_eq!(tokens[1].pos, PosTag::Pron);
    }

    #[test]
    fn test_punctuation_and_numbers() {
        let tagger = LexiconTagger::new();
        let tokens = tagger.tag("Hello, 42!");
        assert_eq!(texts(&tokens), vec!["Hello", ",", "42", "!"]);
        assert_eq!(tokens[1].pos, PosTag::Punct);
        assert_eq!(tokens[2].pos, PosTag::Num);
        assert_eq!(tokens[3].pos, PosTag::Punct);
    }
}
