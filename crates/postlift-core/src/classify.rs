//! Keyword classifiers for content theme and profile country.
//!
//! The analytics never depend on a concrete classifier; they only read the
//! label already stored on each [`crate::PostRecord`]. Any [`Classifier`] can
//! be swapped in when records are built.

/// Maps free text to a single category label.
pub trait Classifier {
    fn classify(&self, text: &str) -> String;
}

/// Theme labels and the substrings that select them. Scanned in order; the
/// first label with any matching keyword wins.
pub(crate) const THEMES: KeywordTable = &[
    (
        "grammar",
        &["grammar", "grammartips", "pasttense", "presentperfect", "articles", "tenses"],
    ),
    (
        "vocabulary",
        &["vocabulary", "vocab", "wordoftheday", "phrases", "idioms", "phrasalverbs"],
    ),
    ("pronunciation", &["pronunciation", "accent", "phonetics", "ipa", "sounds"]),
    ("exam/test prep", &["ielts", "toefl", "toeic", "cambridge", "pte"]),
    ("slang/culture", &["slang", "culture", "britishvsamerican", "usvsuk"]),
    (
        "business english",
        &["businessenglish", "interview", "resume", "cv", "email"],
    ),
    ("study tips", &["study", "tips", "learnenglish", "englishlearning"]),
];

pub const DEFAULT_THEME: &str = "general english";

pub(crate) const COUNTRIES: KeywordTable = &[
    ("United States", &["usa", "us", "america", "american"]),
    ("United Kingdom", &["uk", "united kingdom", "british", "england"]),
    ("Canada", &["canada", "canadian"]),
    ("Australia", &["australia", "aussie", "australian"]),
    ("India", &["india", "indian"]),
    ("Poland", &["poland", "polish"]),
    ("France", &["france", "french"]),
    ("Germany", &["germany", "german"]),
    ("Spain", &["spain", "spanish"]),
    ("Italy", &["italy", "italian"]),
    ("Brazil", &["brazil", "brazilian"]),
    ("Mexico", &["mexico", "mexican"]),
    ("China", &["china", "chinese"]),
    ("Japan", &["japan", "japanese"]),
    ("Korea", &["korea", "korean"]),
    ("Turkey", &["turkey", "turkish"]),
];

pub const UNKNOWN_COUNTRY: &str = "Unknown";

type KeywordTable = &'static [(&'static str, &'static [&'static str])];

fn first_match(table: KeywordTable, text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(label, _)| *label)
}

/// Assigns a content theme from hashtags and caption text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeClassifier;

impl Classifier for ThemeClassifier {
    fn classify(&self, text: &str) -> String {
        first_match(THEMES, text)
            .unwrap_or(DEFAULT_THEME)
            .to_string()
    }
}

/// Guesses a country from a profile bio.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryClassifier;

impl Classifier for CountryClassifier {
    fn classify(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return UNKNOWN_COUNTRY.to_string();
        }
        first_match(COUNTRIES, text)
            .unwrap_or(UNKNOWN_COUNTRY)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_matches_hashtag_keyword() {
        assert_eq!(ThemeClassifier.classify("#grammartips quick one"), "grammar");
    }

    #[test]
    fn theme_is_case_insensitive() {
        assert_eq!(ThemeClassifier.classify("My IELTS band 9 story"), "exam/test prep");
    }

    #[test]
    fn theme_first_listed_label_wins() {
        // "vocab" and "study" both match; vocabulary is listed first.
        assert_eq!(ThemeClassifier.classify("#vocab #study"), "vocabulary");
    }

    #[test]
    fn theme_falls_back_to_default() {
        assert_eq!(ThemeClassifier.classify("hello world"), DEFAULT_THEME);
        assert_eq!(ThemeClassifier.classify(""), DEFAULT_THEME);
    }

    #[test]
    fn country_from_bio() {
        assert_eq!(CountryClassifier.classify("Teacher from Canada 🇨🇦"), "Canada");
    }

    #[test]
    fn country_empty_bio_is_unknown() {
        assert_eq!(CountryClassifier.classify("   "), UNKNOWN_COUNTRY);
    }

    #[test]
    fn country_no_match_is_unknown() {
        assert_eq!(CountryClassifier.classify("xyz"), UNKNOWN_COUNTRY);
    }

    #[test]
    fn country_substring_match_is_greedy() {
        // "us" is a substring of "music", so the table order decides.
        assert_eq!(CountryClassifier.classify("music lover"), "United States");
    }
}
