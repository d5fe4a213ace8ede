/*!
 * Alignment of a free-flowing translation with the original subtitle lines.
 *
 * - `line_set`: line set types and the partition check
 * - `aligner`: greedy matcher that builds line sets from the translated text
 * - `splitter`: proportional split of a line set's text into per-line text
 */

pub use self::aligner::{Aligner, MIN_MATCH_CHARS};
pub use self::line_set::{is_partition, LineSet, LineSetKind, LineSetRange};
pub use self::splitter::{split_line_set, split_ratio, split_steps, translated_chars, LineSplitter, SplitStep};

pub mod aligner;
pub mod line_set;
pub mod splitter;
