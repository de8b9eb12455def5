//! Parser wire format.
//!
//! One `ParsedToken` per token, in sentence order. The root token names
//! itself as head, matching what dependency parsers emit.

use serde::{Deserialize, Serialize};

/// A single analyzed token from the upstream dependency parser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    /// Token index in the sentence (0-based).
    pub index: usize,
    /// Lowercased surface text.
    pub text: String,
    pub lemma: String,
    /// Universal POS tag (`NOUN`, `VERB`, `PROPN`, ...).
    pub pos: String,
    /// Index of the syntactic head; equal to `index` for the root.
    pub head: usize,
    /// Grammatical relation to the head (`nsubj`, `ccomp`, `ROOT`, ...).
    pub dep: String,
}

impl ParsedToken {
    pub fn new(
        index: usize,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        head: usize,
        dep: impl Into<String>,
    ) -> Self {
        Self {
            index,
            text: text.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            head,
            dep: dep.into(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

/// A fully analyzed sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub tokens: Vec<ParsedToken>,
}

impl ParsedSentence {
    pub fn new(tokens: Vec<ParsedToken>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Surface text joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One orientation question: a sentence and the proposition to locate in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationRequest {
    pub sentence: ParsedSentence,
    /// Literal surface tokens of the proposition, in order.
    pub proposition: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_json() {
        let raw = r#"{
            "sentence": {"tokens": [
                {"index": 0, "text": "he", "lemma": "he", "pos": "PRON", "head": 1, "dep": "nsubj"},
                {"index": 1, "text": "lied", "lemma": "lie", "pos": "VERB", "head": 1, "dep": "ROOT"}
            ]},
            "proposition": ["he"]
        }"#;
        let request: OrientationRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.sentence.len(), 2);
        assert!(request.sentence.tokens[1].is_root());
        assert!(!request.sentence.tokens[0].is_root());
        assert_eq!(request.sentence.text(), "he lied");
        assert_eq!(request.proposition, vec!["he".to_string()]);
    }
}
