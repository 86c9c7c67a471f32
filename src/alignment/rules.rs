use once_cell::sync::Lazy;
use regex::Regex;

// @module: Heuristic rules for cleaning, validating and segmenting text

// @const: Leading hierarchical numbering prefix (e.g. "12.2.3.1 ", "18.1.1.")
static NUMBERING_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+)*\.?\s*").unwrap()
});

// @const: Text composed solely of digits, whitespace and basic punctuation
static NOISE_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\d\s.\-,°%]+$").unwrap()
});

// @const: Sentence boundary: terminal punctuation, whitespace, capital letter
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])(\s+)([A-ZÀ-Ü])").unwrap()
});

/// The heuristic rules driving line normalization and segmentation.
///
/// The defaults encode Latin-script capitalization and Western numbering
/// conventions. Bundling them as a value keeps the alignment algorithm
/// independent of the locale assumptions, so a variant rule set can be
/// swapped in without touching the aligner.
#[derive(Debug, Clone)]
pub struct AlignmentRules {
    // @field: Anchored numbering prefix to strip during normalization
    numbering_prefix: Regex,

    // @field: Full-match noise pattern rejected by the validator
    noise_only: Regex,

    // @field: Sentence boundary with punctuation/whitespace/capital captures
    sentence_boundary: Regex,
}

impl Default for AlignmentRules {
    fn default() -> Self {
        AlignmentRules {
            numbering_prefix: NUMBERING_PREFIX.clone(),
            noise_only: NOISE_ONLY.clone(),
            sentence_boundary: SENTENCE_BOUNDARY.clone(),
        }
    }
}

impl AlignmentRules {
    /// Create a rule set with custom patterns
    pub fn new(numbering_prefix: Regex, noise_only: Regex, sentence_boundary: Regex) -> Self {
        AlignmentRules {
            numbering_prefix,
            noise_only,
            sentence_boundary,
        }
    }

    /// Clean and normalize one raw line of text
    ///
    /// Trims surrounding whitespace and removes a single leading section
    /// numbering prefix anchored at the start of the line.
    pub fn normalize_line(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        self.numbering_prefix.replace(trimmed, "").into_owned()
    }

    /// Check if a text segment is meaningful enough to keep
    ///
    /// Rejects empty text, single characters, and spans made up entirely of
    /// digits, whitespace and basic punctuation (page numbers, table cells,
    /// section markers).
    pub fn is_valid_segment(&self, text: &str) -> bool {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return false;
        }

        // Single letters and digits are noise
        if trimmed.chars().count() == 1 {
            return false;
        }

        !self.noise_only.is_match(trimmed)
    }

    /// Split a normalized line into valid sentence segments
    ///
    /// A boundary is a sentence-ending mark followed by whitespace and a
    /// capital letter (including accented capitals). The punctuation stays
    /// with the preceding piece; the boundary whitespace is dropped. Each
    /// piece is trimmed and filtered through the segment validator.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut pieces = Vec::new();
        let mut start = 0;

        for caps in self.sentence_boundary.captures_iter(text) {
            // The piece ends right after the punctuation mark; the next one
            // starts at the capital letter.
            let punctuation_end = caps.get(1).map(|m| m.end()).unwrap_or(0);
            let next_start = caps.get(3).map(|m| m.start()).unwrap_or(punctuation_end);

            pieces.push(&text[start..punctuation_end]);
            start = next_start;
        }

        pieces.push(&text[start..]);

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| self.is_valid_segment(piece))
            .map(String::from)
            .collect()
    }
}
