//! Hand-built dependency parses shared by the integration suites.
//!
//! Rows are `(text, lemma, pos, head, dep)`; the token index is the row
//! position and the root names itself as head.

#![allow(dead_code)]

use veridical::{ParsedSentence, ParsedToken};

pub type Row = (&'static str, &'static str, &'static str, usize, &'static str);

pub fn sentence(rows: &[Row]) -> ParsedSentence {
    ParsedSentence::new(
        rows.iter()
            .enumerate()
            .map(|(i, (text, lemma, pos, head, dep))| {
                ParsedToken::new(i, *text, *lemma, *pos, *head, *dep)
            })
            .collect(),
    )
}

pub const SUN_IS_YELLOW: &[&str] = &["the", "sun", "is", "yellow"];
pub const IT_IS_RAINING: &[&str] = &["it", "is", "raining"];

// =============================================================================
// End-to-end sentences
// =============================================================================

/// The fiction that George knows the sun is yellow.
pub fn fiction_george_knows() -> ParsedSentence {
    sentence(&[
        ("The", "the", "DET", 1, "det"),
        ("fiction", "fiction", "NOUN", 1, "ROOT"),
        ("that", "that", "SCONJ", 4, "mark"),
        ("George", "George", "PROPN", 4, "nsubj"),
        ("knows", "know", "VERB", 1, "acl"),
        ("the", "the", "DET", 6, "det"),
        ("sun", "sun", "NOUN", 7, "nsubj"),
        ("is", "be", "AUX", 4, "ccomp"),
        ("yellow", "yellow", "ADJ", 7, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// The fiction that the sun is yellow.
pub fn fiction() -> ParsedSentence {
    sentence(&[
        ("The", "the", "DET", 1, "det"),
        ("fiction", "fiction", "NOUN", 1, "ROOT"),
        ("that", "that", "SCONJ", 5, "mark"),
        ("the", "the", "DET", 4, "det"),
        ("sun", "sun", "NOUN", 5, "nsubj"),
        ("is", "be", "AUX", 1, "acl"),
        ("yellow", "yellow", "ADJ", 5, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// If the sun is yellow it will be a good day.
pub fn if_good_day() -> ParsedSentence {
    sentence(&[
        ("If", "if", "SCONJ", 3, "mark"),
        ("the", "the", "DET", 2, "det"),
        ("sun", "sun", "NOUN", 3, "nsubj"),
        ("is", "be", "AUX", 7, "advcl"),
        ("yellow", "yellow", "ADJ", 3, "acomp"),
        ("it", "it", "PRON", 7, "nsubj"),
        ("will", "will", "AUX", 7, "aux"),
        ("be", "be", "AUX", 7, "ROOT"),
        ("a", "a", "DET", 10, "det"),
        ("good", "good", "ADJ", 10, "amod"),
        ("day", "day", "NOUN", 7, "attr"),
        (".", ".", "PUNCT", 7, "punct"),
    ])
}

/// Bill forgot that Sarah believes the sun is yellow.
pub fn bill_forgot() -> ParsedSentence {
    sentence(&[
        ("Bill", "Bill", "PROPN", 1, "nsubj"),
        ("forgot", "forget", "VERB", 1, "ROOT"),
        ("that", "that", "SCONJ", 4, "mark"),
        ("Sarah", "Sarah", "PROPN", 4, "nsubj"),
        ("believes", "believe", "VERB", 1, "ccomp"),
        ("the", "the", "DET", 6, "det"),
        ("sun", "sun", "NOUN", 7, "nsubj"),
        ("is", "be", "AUX", 4, "ccomp"),
        ("yellow", "yellow", "ADJ", 7, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// He disagreed with Bill's assessment that the sun is yellow.
pub fn disagreed_with_assessment() -> ParsedSentence {
    sentence(&[
        ("He", "he", "PRON", 1, "nsubj"),
        ("disagreed", "disagree", "VERB", 1, "ROOT"),
        ("with", "with", "ADP", 1, "prep"),
        ("Bill", "Bill", "PROPN", 5, "poss"),
        ("'s", "'s", "PART", 3, "case"),
        ("assessment", "assessment", "NOUN", 2, "pobj"),
        ("that", "that", "SCONJ", 9, "mark"),
        ("the", "the", "DET", 8, "det"),
        ("sun", "sun", "NOUN", 9, "nsubj"),
        ("is", "be", "AUX", 5, "acl"),
        ("yellow", "yellow", "ADJ", 9, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// It was denied that the sun is yellow.
pub fn it_was_denied() -> ParsedSentence {
    sentence(&[
        ("It", "it", "PRON", 2, "nsubjpass"),
        ("was", "be", "AUX", 2, "auxpass"),
        ("denied", "deny", "VERB", 2, "ROOT"),
        ("that", "that", "SCONJ", 6, "mark"),
        ("the", "the", "DET", 5, "det"),
        ("sun", "sun", "NOUN", 6, "nsubj"),
        ("is", "be", "AUX", 2, "ccomp"),
        ("yellow", "yellow", "ADJ", 6, "acomp"),
        (".", ".", "PUNCT", 2, "punct"),
    ])
}

/// That he denied that the sun is yellow, she denied.
///
/// Not part of [`all`]: the second "denied" is only labeled once the first
/// has been folded into the proposition.
pub fn denied_twice() -> ParsedSentence {
    sentence(&[
        ("That", "that", "SCONJ", 2, "mark"),
        ("he", "he", "PRON", 2, "nsubj"),
        ("denied", "deny", "VERB", 10, "ccomp"),
        ("that", "that", "SCONJ", 6, "mark"),
        ("the", "the", "DET", 5, "det"),
        ("sun", "sun", "NOUN", 6, "nsubj"),
        ("is", "be", "AUX", 2, "ccomp"),
        ("yellow", "yellow", "ADJ", 6, "acomp"),
        (",", ",", "PUNCT", 10, "punct"),
        ("she", "she", "PRON", 10, "nsubj"),
        ("denied", "deny", "VERB", 10, "ROOT"),
        (".", ".", "PUNCT", 10, "punct"),
    ])
}

// =============================================================================
// One sentence per rule
// =============================================================================

/// Sam argues in defense of the idiot’s assertion that it is raining.
pub fn defense_of_idiots_assertion() -> ParsedSentence {
    sentence(&[
        ("Sam", "Sam", "PROPN", 1, "nsubj"),
        ("argues", "argue", "VERB", 1, "ROOT"),
        ("in", "in", "ADP", 1, "prep"),
        ("defense", "defense", "NOUN", 2, "pobj"),
        ("of", "of", "ADP", 3, "prep"),
        ("the", "the", "DET", 6, "det"),
        ("idiot", "idiot", "NOUN", 8, "poss"),
        ("’s", "’s", "PART", 6, "case"),
        ("assertion", "assertion", "NOUN", 4, "pobj"),
        ("that", "that", "SCONJ", 12, "mark"),
        ("it", "it", "PRON", 12, "nsubj"),
        ("is", "be", "AUX", 12, "aux"),
        ("raining", "rain", "VERB", 8, "acl"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// Sam agrees with idiot’s assertion that it is raining.
pub fn agrees_with_idiots_assertion() -> ParsedSentence {
    sentence(&[
        ("Sam", "Sam", "PROPN", 1, "nsubj"),
        ("agrees", "agree", "VERB", 1, "ROOT"),
        ("with", "with", "ADP", 1, "prep"),
        ("idiot", "idiot", "NOUN", 5, "poss"),
        ("’s", "’s", "PART", 3, "case"),
        ("assertion", "assertion", "NOUN", 2, "pobj"),
        ("that", "that", "SCONJ", 9, "mark"),
        ("it", "it", "PRON", 9, "nsubj"),
        ("is", "be", "AUX", 9, "aux"),
        ("raining", "rain", "VERB", 5, "acl"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// He disagreed with President Bush’s assessment earlier in the day that
/// the U.S. is winning the war in Iraq.
pub fn bush_assessment() -> ParsedSentence {
    sentence(&[
        ("He", "he", "PRON", 1, "nsubj"),
        ("disagreed", "disagree", "VERB", 1, "ROOT"),
        ("with", "with", "ADP", 1, "prep"),
        ("President", "President", "PROPN", 4, "compound"),
        ("Bush", "Bush", "PROPN", 6, "poss"),
        ("’s", "’s", "PART", 4, "case"),
        ("assessment", "assessment", "NOUN", 2, "pobj"),
        ("earlier", "early", "ADV", 6, "advmod"),
        ("in", "in", "ADP", 7, "prep"),
        ("the", "the", "DET", 10, "det"),
        ("day", "day", "NOUN", 8, "pobj"),
        ("that", "that", "SCONJ", 15, "mark"),
        ("the", "the", "DET", 13, "det"),
        ("U.S.", "U.S.", "PROPN", 15, "nsubj"),
        ("is", "be", "AUX", 15, "aux"),
        ("winning", "win", "VERB", 1, "ccomp"),
        ("the", "the", "DET", 17, "det"),
        ("war", "war", "NOUN", 15, "dobj"),
        ("in", "in", "ADP", 17, "prep"),
        ("Iraq", "Iraq", "PROPN", 18, "pobj"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

pub const US_IS_WINNING: &[&str] = &["the", "U.S.", "is", "winning", "the", "war", "in", "Iraq"];

/// Sam agrees with assertion of the idiot that it is raining.
pub fn assertion_of_the_idiot() -> ParsedSentence {
    sentence(&[
        ("Sam", "Sam", "PROPN", 1, "nsubj"),
        ("agrees", "agree", "VERB", 1, "ROOT"),
        ("with", "with", "ADP", 1, "prep"),
        ("assertion", "assertion", "NOUN", 2, "pobj"),
        ("of", "of", "ADP", 3, "prep"),
        ("the", "the", "DET", 6, "det"),
        ("idiot", "idiot", "NOUN", 4, "pobj"),
        ("that", "that", "SCONJ", 10, "mark"),
        ("it", "it", "PRON", 10, "nsubj"),
        ("is", "be", "AUX", 10, "aux"),
        ("raining", "rain", "VERB", 6, "relcl"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// It was argued by the idiot that it is raining.
pub fn argued_by_the_idiot() -> ParsedSentence {
    sentence(&[
        ("It", "it", "PRON", 2, "nsubjpass"),
        ("was", "be", "AUX", 2, "auxpass"),
        ("argued", "argue", "VERB", 2, "ROOT"),
        ("by", "by", "ADP", 2, "agent"),
        ("the", "the", "DET", 5, "det"),
        ("idiot", "idiot", "NOUN", 3, "pobj"),
        ("that", "that", "SCONJ", 9, "mark"),
        ("it", "it", "PRON", 9, "nsubj"),
        ("is", "be", "AUX", 9, "aux"),
        ("raining", "rain", "VERB", 5, "relcl"),
        (".", ".", "PUNCT", 2, "punct"),
    ])
}

/// She agreed with the assertion that the sun is yellow.
pub fn agreed_with_the_assertion() -> ParsedSentence {
    sentence(&[
        ("She", "she", "PRON", 1, "nsubj"),
        ("agreed", "agree", "VERB", 1, "ROOT"),
        ("with", "with", "ADP", 1, "prep"),
        ("the", "the", "DET", 4, "det"),
        ("assertion", "assertion", "NOUN", 2, "pobj"),
        ("that", "that", "SCONJ", 8, "mark"),
        ("the", "the", "DET", 7, "det"),
        ("sun", "sun", "NOUN", 8, "nsubj"),
        ("is", "be", "AUX", 4, "acl"),
        ("yellow", "yellow", "ADJ", 8, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// She uttered the falsehood that the sun is yellow.
pub fn uttered_the_falsehood() -> ParsedSentence {
    sentence(&[
        ("She", "she", "PRON", 1, "nsubj"),
        ("uttered", "utter", "VERB", 1, "ROOT"),
        ("the", "the", "DET", 3, "det"),
        ("falsehood", "falsehood", "NOUN", 1, "dobj"),
        ("that", "that", "SCONJ", 7, "mark"),
        ("the", "the", "DET", 6, "det"),
        ("sun", "sun", "NOUN", 7, "nsubj"),
        ("is", "be", "AUX", 3, "acl"),
        ("yellow", "yellow", "ADJ", 7, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// The idiot said that the sun is yellow.
pub fn the_idiot_said() -> ParsedSentence {
    sentence(&[
        ("The", "the", "DET", 1, "det"),
        ("idiot", "idiot", "NOUN", 2, "nsubj"),
        ("said", "say", "VERB", 2, "ROOT"),
        ("that", "that", "SCONJ", 6, "mark"),
        ("the", "the", "DET", 5, "det"),
        ("sun", "sun", "NOUN", 6, "nsubj"),
        ("is", "be", "AUX", 2, "ccomp"),
        ("yellow", "yellow", "ADJ", 6, "acomp"),
        (".", ".", "PUNCT", 2, "punct"),
    ])
}

/// He lied that the sun is yellow.
pub fn he_lied() -> ParsedSentence {
    sentence(&[
        ("He", "he", "PRON", 1, "nsubj"),
        ("lied", "lie", "VERB", 1, "ROOT"),
        ("that", "that", "SCONJ", 5, "mark"),
        ("the", "the", "DET", 4, "det"),
        ("sun", "sun", "NOUN", 5, "nsubj"),
        ("is", "be", "AUX", 1, "ccomp"),
        ("yellow", "yellow", "ADJ", 5, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// It is true that the sun is yellow.
pub fn it_is_true() -> ParsedSentence {
    sentence(&[
        ("It", "it", "PRON", 1, "nsubj"),
        ("is", "be", "AUX", 1, "ROOT"),
        ("true", "true", "ADJ", 1, "acomp"),
        ("that", "that", "SCONJ", 6, "mark"),
        ("the", "the", "DET", 5, "det"),
        ("sun", "sun", "NOUN", 6, "nsubj"),
        ("is", "be", "AUX", 1, "ccomp"),
        ("yellow", "yellow", "ADJ", 6, "acomp"),
        (".", ".", "PUNCT", 1, "punct"),
    ])
}

/// If he is on time the sun is yellow.
pub fn if_on_time() -> ParsedSentence {
    sentence(&[
        ("If", "if", "SCONJ", 2, "mark"),
        ("he", "he", "PRON", 2, "nsubj"),
        ("is", "be", "AUX", 7, "advcl"),
        ("on", "on", "ADP", 2, "prep"),
        ("time", "time", "NOUN", 3, "pobj"),
        ("the", "the", "DET", 6, "det"),
        ("sun", "sun", "NOUN", 7, "nsubj"),
        ("is", "be", "AUX", 7, "ROOT"),
        ("yellow", "yellow", "ADJ", 7, "acomp"),
        (".", ".", "PUNCT", 7, "punct"),
    ])
}

/// The sun is yellow as soon as next week.
pub fn as_soon_as_next_week() -> ParsedSentence {
    sentence(&[
        ("The", "the", "DET", 1, "det"),
        ("sun", "sun", "NOUN", 2, "nsubj"),
        ("is", "be", "AUX", 2, "ROOT"),
        ("yellow", "yellow", "ADJ", 2, "acomp"),
        ("as", "as", "ADV", 5, "advmod"),
        ("soon", "soon", "ADV", 2, "advmod"),
        ("as", "as", "ADP", 5, "prep"),
        ("next", "next", "ADJ", 8, "amod"),
        ("week", "week", "NOUN", 6, "pobj"),
        (".", ".", "PUNCT", 2, "punct"),
    ])
}

/// If the sun is yellow then it will rain.
pub fn if_then_rain() -> ParsedSentence {
    sentence(&[
        ("If", "if", "SCONJ", 3, "mark"),
        ("the", "the", "DET", 2, "det"),
        ("sun", "sun", "NOUN", 3, "nsubj"),
        ("is", "be", "AUX", 8, "advcl"),
        ("yellow", "yellow", "ADJ", 3, "acomp"),
        ("then", "then", "ADV", 8, "advmod"),
        ("it", "it", "PRON", 8, "nsubj"),
        ("will", "will", "AUX", 8, "aux"),
        ("rain", "rain", "VERB", 8, "ROOT"),
        (".", ".", "PUNCT", 8, "punct"),
    ])
}

/// While the sun is yellow it will rain.
pub fn while_rain() -> ParsedSentence {
    sentence(&[
        ("While", "while", "SCONJ", 3, "mark"),
        ("the", "the", "DET", 2, "det"),
        ("sun", "sun", "NOUN", 3, "nsubj"),
        ("is", "be", "AUX", 7, "advcl"),
        ("yellow", "yellow", "ADJ", 3, "acomp"),
        ("it", "it", "PRON", 7, "nsubj"),
        ("will", "will", "AUX", 7, "aux"),
        ("rain", "rain", "VERB", 7, "ROOT"),
        (".", ".", "PUNCT", 7, "punct"),
    ])
}

/// Every fixture with its proposition.
pub fn all() -> Vec<(ParsedSentence, &'static [&'static str])> {
    vec![
        (fiction_george_knows(), SUN_IS_YELLOW),
        (fiction(), SUN_IS_YELLOW),
        (if_good_day(), SUN_IS_YELLOW),
        (bill_forgot(), SUN_IS_YELLOW),
        (disagreed_with_assessment(), SUN_IS_YELLOW),
        (it_was_denied(), SUN_IS_YELLOW),
        (defense_of_idiots_assertion(), IT_IS_RAINING),
        (agrees_with_idiots_assertion(), IT_IS_RAINING),
        (bush_assessment(), US_IS_WINNING),
        (assertion_of_the_idiot(), IT_IS_RAINING),
        (argued_by_the_idiot(), IT_IS_RAINING),
        (agreed_with_the_assertion(), SUN_IS_YELLOW),
        (uttered_the_falsehood(), SUN_IS_YELLOW),
        (the_idiot_said(), SUN_IS_YELLOW),
        (he_lied(), SUN_IS_YELLOW),
        (it_is_true(), SUN_IS_YELLOW),
        (if_on_time(), SUN_IS_YELLOW),
        (as_soon_as_next_week(), SUN_IS_YELLOW),
        (if_then_rain(), SUN_IS_YELLOW),
        (while_rain(), SUN_IS_YELLOW),
    ]
}
