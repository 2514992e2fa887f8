//! Deterministic text normalization for review content.
//!
//! The cleaning steps run in a fixed order: URL strip, HTML-tag strip, NFKC,
//! optional lowercasing, optional emoji removal, whitespace collapse. The
//! full [`TextNormalizer::preprocess`] pipeline additionally tokenizes and
//! (optionally) drops stopwords. All invalid or empty input degrades to an
//! empty string; nothing in this module panics or errors.


use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://\S+|www\.\S+").expect("URL regex is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag regex is valid"));

/// Default stopword set: common short Polish function words.
pub static DEFAULT_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "w", "na", "z", "do", "nie", "że", "to", "się", "o", "ale", "jak", "jest", "po",
        "za", "od", "dla", "czy", "już", "tak", "bardzo", "tylko", "przez", "przed", "nad",
        "pod", "bez", "aż", "gdy", "gdzie",
    ]
    .into_iter()
    .collect()
});

// Covers the main pictograph blocks only. A full emoji lexicon would catch
// more (flags, keycaps, ZWJ sequences); this range is a documented
// approximation, not a guarantee.
const EMOJI_RANGE: std::ops::RangeInclusive<char> = '\u{1F300}'..='\u{1F9FF}';

/// Constructor-time toggles for [`TextNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    /// Fold to lowercase after Unicode normalization.
    pub lowercase: bool,
    /// Strip emoji code points (bounded-range approximation).
    pub remove_emoji: bool,
    /// Drop tokens matching the stopword set (case-insensitive).
    pub remove_stopwords: bool,
    /// Override for the default Polish stopword set.
    pub stopwords: Option<HashSet<String>>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            lowercase: false,
            remove_emoji: true,
            remove_stopwords: false,
            stopwords: None,
        }
    }
}

/// Deterministic string-cleaning transform for review text.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lowercase: bool,
    remove_emoji: bool,
    remove_stopwords: bool,
    stopwords: HashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerOptions::default())
    }
}

impl TextNormalizer {
    pub fn new(options: NormalizerOptions) -> Self {
        let stopwords = options.stopwords.unwrap_or_else(|| {
            DEFAULT_STOPWORDS.iter().map(|s| (*s).to_string()).collect()
        });

        Self {
            lowercase: options.lowercase,
            remove_emoji: options.remove_emoji,
            remove_stopwords: options.remove_stopwords,
            stopwords,
        }
    }

    /// Runs the ordered cleaning steps, returning a single-line,
    /// whitespace-collapsed string. Empty or whitespace-only input short
    /// circuits to `""`.
    pub fn clean(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let text = URL_RE.replace_all(text, "");
        let text = TAG_RE.replace_all(&text, "");

        let mut text: String = text.nfkc().collect();

        if self.lowercase {
            text = text.to_lowercase();
        }

        if self.remove_emoji {
            text.retain(|c| !EMOJI_RANGE.contains(&c));
        }

        collapse_whitespace(&text)
    }

    /// Splits on whitespace into non-empty tokens, order preserved.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }

    /// Full pipeline: clean, tokenize, optionally drop stopwords, rejoin.
    pub fn preprocess(&self, text: &str) -> String {
        let cleaned = self.clean(text);
        let tokens = self.tokenize(&cleaned);

        if self.remove_stopwords {
            let kept: Vec<&str> = tokens
                .into_iter()
                .filter(|t| !self.stopwords.contains(&t.to_lowercase()))
                .collect();
            kept.join(" ")
        } else {
            tokens.join(" ")
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
