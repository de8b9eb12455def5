//! Directory loader: one file per category, one phrase per line.

use std::fs;
use std::path::Path;

use veridical_contract::Category;

use super::{LexiconError, Pattern, PatternLibrary};

/// Phrases of one category file. Blank lines and `#` comments are skipped.
pub(crate) fn parse_category(category: Category, contents: &str) -> impl Iterator<Item = Pattern> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(move |line| Pattern::new(category, line))
}

pub(crate) fn load_dir(dir: &Path) -> Result<PatternLibrary, LexiconError> {
    if !dir.is_dir() {
        return Err(LexiconError::MissingDirectory(dir.to_path_buf()));
    }
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| LexiconError::Io { path, source }
    };

    let mut patterns = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let entry = entry.map_err(io_err(dir))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !path.is_file() {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(name);
        let category: Category = stem
            .parse()
            .map_err(|_| LexiconError::UnknownCategory { name: stem.clone() })?;

        let contents = fs::read_to_string(&path).map_err(io_err(&path))?;
        let before = patterns.len();
        patterns.extend(parse_category(category, &contents));
        log::debug!("{}: {} phrases", category, patterns.len() - before);
    }

    Ok(PatternLibrary::new(patterns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_skips_comments() {
        let found: Vec<Pattern> =
            parse_category(Category::Causals, "# causal links\nbecause\n\n  Due To  \n").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].tokens, vec!["due", "to"]);
    }

    #[test]
    fn test_load_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("factive_verbs"), "know\nfind out\n").unwrap();
        fs::write(dir.join("negative_nouns.txt"), "myth\n").unwrap();
        fs::write(dir.join(".hidden"), "ignored\n").unwrap();
        fs::create_dir_all(dir.join("nested")).unwrap();

        let lib = load_dir(dir).unwrap();
        assert_eq!(lib.len(), 3);
        assert_eq!(lib.patterns()[0].tokens, vec!["find", "out"]);
        assert_eq!(
            lib.categories().into_iter().collect::<Vec<_>>(),
            vec![Category::FactiveVerbs, Category::NegativeNouns]
        );
    }

    #[test]
    fn test_unknown_category_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("sarcastic_verbs"), "quip\n").unwrap();
        assert!(matches!(
            load_dir(tmp.path()),
            Err(LexiconError::UnknownCategory { name }) if name == "sarcastic_verbs"
        ));
    }

    #[test]
    fn test_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("missing");
        assert!(matches!(load_dir(&dir), Err(LexiconError::MissingDirectory(_))));
    }
}
