//! Grammar preparation pipeline.
//!
//! This module is the compilation front end proper: everything that happens
//! between "one validated grammar" and "two grammars the table builders can
//! consume".
//!
//! ## How the parts work together
//!
//! ```text
//! Grammar ──▶ split_grammar            (extract_tokens.rs)
//!               ├─ is_token            (classify.rs)    whole-rule check
//!               ├─ TokenExtractor      (extract_tokens.rs) leaf rewriting
//!               │    └─ TokenTable     (token_table.rs)  interning/dedup
//!               └─ SplitMetrics        (metrics.rs)      opt-in counters
//!                      │
//!                      ▼
//!         (syntactic Grammar, lexical Grammar)
//!
//! check_patterns (pattern_check.rs) — advisory, independent of the split
//! ```
//!
//! Later pipeline stages (lexer NFA construction, parse-table building) are
//! separate consumers of the split output and do not live in this crate.
//!
//! ## Debugging
//!
//! Set `RULEGRAM_DEBUG_TOKENS=1` to print interning decisions as the
//! extractor hoists terminals.

#[path = "prepare/classify.rs"]
mod classify;
#[path = "prepare/extract_tokens.rs"]
mod extract_tokens;
#[path = "prepare/metrics.rs"]
mod metrics;
#[path = "prepare/pattern_check.rs"]
mod pattern_check;
#[path = "prepare/token_table.rs"]
mod token_table;

pub(crate) use classify::is_token;
pub(crate) use extract_tokens::split_grammar;
pub use metrics::{PassMetrics, SplitMetrics};
pub use pattern_check::{PatternDiagnostic, check_patterns};
