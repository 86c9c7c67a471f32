/*!
 * Line-to-sentence alignment pipeline.
 *
 * Raw lines flow one way through the pipeline: normalization strips
 * whitespace and numbering prefixes, segmentation splits lines into
 * candidate sentences, and the aligner pairs validated segments across
 * the two languages, deduplicating as it goes.
 *
 * - `rules`: the heuristic regular expressions (normalization, noise
 *   detection, sentence boundaries) bundled as a swappable value
 * - `aligner`: the pairing algorithm and its per-run state
 */

pub mod rules;
pub mod aligner;

pub use rules::AlignmentRules;
pub use aligner::{Aligner, AlignmentRun, TranslationUnit};
