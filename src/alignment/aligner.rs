use std::collections::HashSet;
use crate::alignment::rules::AlignmentRules;

// @module: Pairing of source and target lines into translation units

// @struct: One aligned (source, target) segment pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationUnit {
    // @field: Source-language segment
    pub source: String,

    // @field: Target-language segment
    pub target: String,
}

impl TranslationUnit {
    /// Create a new translation unit
    pub fn new(source: String, target: String) -> Self {
        TranslationUnit { source, target }
    }
}

/// State of a single alignment pass over one file pair.
///
/// Holds the ordered unit list and the set of seen pairs, owned exclusively
/// by the pass and discarded once serialization completes. Modeled as an
/// explicit value so independent runs never share state.
#[derive(Debug, Default)]
pub struct AlignmentRun {
    // @field: Units in creation order
    units: Vec<TranslationUnit>,

    // @field: Literal (source, target) pairs already emitted
    seen_pairs: HashSet<(String, String)>,
}

impl AlignmentRun {
    /// Start a fresh alignment pass
    pub fn new() -> Self {
        AlignmentRun::default()
    }

    /// Number of units emitted so far
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Consume the run, yielding the units in creation order
    pub fn into_units(self) -> Vec<TranslationUnit> {
        self.units
    }

    /// Process the raw lines at one index of the two input sequences.
    ///
    /// Both sides are normalized; an index where both normalized lines are
    /// empty is skipped. When both sides segment into the same non-zero
    /// number of sentences they are paired positionally, otherwise the two
    /// whole lines form a single candidate pair. Candidates are kept only
    /// when both members pass the validator and the literal pair is new.
    pub fn process_line_pair(&mut self, rules: &AlignmentRules, raw_source: &str, raw_target: &str) {
        let source = rules.normalize_line(raw_source);
        let target = rules.normalize_line(raw_target);

        if source.is_empty() && target.is_empty() {
            return;
        }

        // An empty side still contributes a single empty candidate so the
        // whole-line fallback below gets a chance; the validator drops it.
        let source_segments = if source.is_empty() {
            vec![String::new()]
        } else {
            rules.split_sentences(&source)
        };
        let target_segments = if target.is_empty() {
            vec![String::new()]
        } else {
            rules.split_sentences(&target)
        };

        if !source_segments.is_empty() && source_segments.len() == target_segments.len() {
            // Sentence-level alignment path
            for (source_segment, target_segment) in source_segments.iter().zip(&target_segments) {
                self.push_pair(rules, source_segment, target_segment);
            }
        } else {
            // Counts differ or a side produced nothing: whole-line fallback
            self.push_pair(rules, &source, &target);
        }
    }

    // @appends: Candidate pair, subject to validation and deduplication
    fn push_pair(&mut self, rules: &AlignmentRules, source: &str, target: &str) {
        if !rules.is_valid_segment(source) || !rules.is_valid_segment(target) {
            return;
        }

        let pair_key = (source.to_string(), target.to_string());
        if self.seen_pairs.contains(&pair_key) {
            return;
        }

        self.units.push(TranslationUnit::new(source.to_string(), target.to_string()));
        self.seen_pairs.insert(pair_key);
    }
}

/// Walks two line sequences in lockstep and produces validated,
/// deduplicated translation units.
#[derive(Debug, Default)]
pub struct Aligner {
    // @field: Heuristic rules applied to every line
    rules: AlignmentRules,
}

impl Aligner {
    /// Create an aligner with the default Latin-script rules
    pub fn new() -> Self {
        Aligner::default()
    }

    /// Create an aligner with a custom rule set
    pub fn with_rules(rules: AlignmentRules) -> Self {
        Aligner { rules }
    }

    /// The rules this aligner applies
    pub fn rules(&self) -> &AlignmentRules {
        &self.rules
    }

    /// Align two ordered sequences of raw lines into translation units.
    ///
    /// Indices run from 0 to the longer sequence's length; the shorter side
    /// is zero-padded with empty lines. Output preserves input line order,
    /// and sentence-level sub-pairs preserve segmentation order.
    pub fn align(&self, source_lines: &[String], target_lines: &[String]) -> Vec<TranslationUnit> {
        let mut run = AlignmentRun::new();
        let line_count = source_lines.len().max(target_lines.len());

        for index in 0..line_count {
            let raw_source = source_lines.get(index).map(String::as_str).unwrap_or("");
            let raw_target = target_lines.get(index).map(String::as_str).unwrap_or("");

            run.process_line_pair(&self.rules, raw_source, raw_target);
        }

        run.into_units()
    }
}
