extern crate self as rulegram;

#[macro_use]
mod macros;
mod api;
mod grammar;
mod prepare;
mod rules;

pub mod samples;

pub use api::{
    RuleDestination, RuleProfile, SplitDetails, SplitResult, SplitResultVerbose, TokenSummary,
    split, split_verbose,
};
pub use grammar::{Grammar, RuleMap};
pub use prepare::{PassMetrics, PatternDiagnostic, SplitMetrics, check_patterns};
pub use rules::{Rule, RuleProps, RuleTransform, RuleVisitor, SymbolKind};
