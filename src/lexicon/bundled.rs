//! Lexicon compiled into the binary from the repository's `lexicon/` directory.

use veridical_contract::Category;

use super::loader::parse_category;
use super::PatternLibrary;

macro_rules! lexicon_file {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/lexicon/", $name))
    };
}

static FILES: [(Category, &str); 12] = [
    (Category::Causals, lexicon_file!("causals")),
    (Category::Conditionals, lexicon_file!("conditionals")),
    (Category::CounterFactiveVerbs, lexicon_file!("counter_factive_verbs")),
    (Category::FactiveVerbs, lexicon_file!("factive_verbs")),
    (Category::NegativeAdjectives, lexicon_file!("negative_adjectives")),
    (Category::NegativeNouns, lexicon_file!("negative_nouns")),
    (Category::NegativeSources, lexicon_file!("negative_sources")),
    (Category::NegativeVerbs, lexicon_file!("negative_verbs")),
    (Category::NeutralVerbs, lexicon_file!("neutral_verbs")),
    (Category::PositiveAdjectives, lexicon_file!("positive_adjectives")),
    (Category::PositiveNouns, lexicon_file!("positive_nouns")),
    (Category::PositiveVerbs, lexicon_file!("positive_verbs")),
];

pub(super) fn library() -> PatternLibrary {
    PatternLibrary::new(
        FILES
            .iter()
            .flat_map(|(category, contents)| parse_category(*category, contents)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_covers_standard_categories() {
        let lib = library();
        let categories = lib.categories();
        assert_eq!(categories.len(), 12);
        assert!(!categories.contains(&Category::FactiveNouns));
        assert!(lib.patterns().iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_bundled_has_no_function_words() {
        let lib = library();
        for word in ["that", "as", "the", "with", "then"] {
            assert!(
                !lib.patterns().iter().any(|p| p.tokens == [word]),
                "{} should not be a trigger",
                word
            );
        }
    }
}
