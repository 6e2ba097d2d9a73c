//! Split run metrics.
//!
//! Metrics are opt-in and intentionally small: the plain [`crate::split`]
//! path only reads the total, while [`crate::split_verbose`] surfaces the
//! per-pass counts for debugging and regression hunting. Nothing here feeds
//! back into the split itself.

use crate::grammar::Grammar;
use std::time::Duration;

/// Timings and counters for one `split_grammar` invocation.
#[derive(Debug, Default, Clone)]
pub struct SplitMetrics {
    /// Total elapsed time for the split.
    pub total: Duration,
    /// The pass over the grammar's named rules.
    pub rules_pass: PassMetrics,
    /// The pass over the grammar's auxiliary rules.
    pub aux_pass: PassMetrics,
    /// Distinct token definitions generated across both passes.
    pub tokens_generated: usize,
    /// Intern calls answered by an existing table entry (dedup effectiveness).
    pub intern_hits: usize,
}

/// Counters for one pass over a rule collection.
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    /// Elapsed time for the pass.
    pub duration: Duration,
    /// Rules scanned in the input collection.
    pub scanned: usize,
    /// Whole rules classified as tokens and moved verbatim to the lexical side.
    pub moved_whole: usize,
    /// Rules run through the extraction transform into the syntactic side.
    pub rewritten: usize,
}

/// Splitter output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct SplitRun {
    pub syntactic: Grammar,
    pub lexical: Grammar,
    pub metrics: SplitMetrics,
}
