//! Person-name detection via capitalization heuristics.
//!
//! No model, no dictionary of names: a run of two or more capitalized
//! words ("John Doe", "Marie Curie") or a single capitalized word after
//! an honorific ("Dr. Smith") is treated as a person. Sentence-initial
//! function words are filtered through a small stopword list. This
//! over-triggers on things like product names; that is the accepted
//! trade-off of a heuristic engine.

use scrub_core::{IDetector, ScrubResult, Span};

/// Identifier used as `Span::source` for heuristic matches.
pub const SOURCE: &str = "heuristic";

const LABEL: &str = "PERSON";

const HONORIFICS: &[&str] = &["Mr", "Mrs", "Ms", "Dr", "Prof"];

/// Capitalized words that start sentences far more often than names.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "call", "contact", "dear", "for", "from", "he",
    "hello", "her", "hi", "his", "i", "if", "in", "is", "it", "its", "me", "my", "of", "on", "or",
    "our", "please", "regards", "she", "thanks", "that", "the", "their", "they", "this", "those",
    "to", "visit", "was", "we", "with", "you", "your",
];

#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
}

pub struct NameDetector;

impl NameDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NameDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IDetector for NameDetector {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn detect(&self, text: &str) -> ScrubResult<Vec<Span>> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            if !is_name_word(word(text, &tokens[i])) {
                i += 1;
                continue;
            }

            // Extend the run while the next token is another name word
            // separated by exactly one space.
            let mut j = i;
            while j + 1 < tokens.len()
                && &text[tokens[j].end..tokens[j + 1].start] == " "
                && is_name_word(word(text, &tokens[j + 1]))
            {
                j += 1;
            }

            if j > i {
                spans.push(Span::new(tokens[i].start, tokens[j].end, LABEL, SOURCE));
            } else if follows_honorific(text, &tokens, i) {
                spans.push(Span::new(tokens[i].start, tokens[i].end, LABEL, SOURCE));
            }

            i = j + 1;
        }

        Ok(spans)
    }
}

fn word<'t>(text: &'t str, token: &Token) -> &'t str {
    &text[token.start..token.end]
}

/// Split into alphabetic tokens; apostrophes do not break a token.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if c.is_alphabetic() || c == '\'' {
            current.get_or_insert(idx);
        } else if let Some(start) = current.take() {
            tokens.push(Token { start, end: idx });
        }
    }
    if let Some(start) = current {
        tokens.push(Token {
            start,
            end: text.len(),
        });
    }
    tokens
}

/// Capitalized (initial uppercase, rest lowercase), at least two
/// characters, and neither a stopword nor an honorific. The
/// rest-lowercase requirement keeps acronyms and placeholder tokens
/// like `PERSON` out.
fn is_name_word(w: &str) -> bool {
    let mut chars = w.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let mut rest_len = 0;
    for c in chars {
        if !(c.is_lowercase() || c == '\'') {
            return false;
        }
        rest_len += 1;
    }
    if rest_len == 0 {
        return false;
    }
    let lower = w.to_lowercase();
    !STOPWORDS.contains(&lower.as_str()) && !HONORIFICS.iter().any(|h| *h == w)
}

/// A lone capitalized word still counts as a name when preceded by an
/// honorific: "Dr. Smith", "Mr Jones".
fn follows_honorific(text: &str, tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    let prev = &tokens[i - 1];
    if !HONORIFICS.contains(&word(text, prev)) {
        return false;
    }
    matches!(&text[prev.end..tokens[i].start], " " | ". " | ".")
}
