//! Advisory pattern diagnostics.
//!
//! The splitter itself never validates pattern sources — a malformed regex
//! only surfaces downstream, when lexer construction tries to compile it.
//! This pass lets a front end report those early instead: it walks every rule
//! of a grammar, compiles each `Pattern` source with the `regex` crate, and
//! returns the failures as plain values. It never fails and never modifies
//! the grammar.

use crate::grammar::Grammar;
use crate::rules::{Rule, RuleVisitor};

/// A pattern source that failed to compile.
#[derive(Debug, Clone)]
pub struct PatternDiagnostic {
    /// Name of the rule the pattern occurs in.
    pub rule_name: String,
    /// The offending pattern source.
    pub source: String,
    /// The regex engine's error message.
    pub message: String,
}

/// Check every `Pattern` source in `grammar`, across `rules` and `aux_rules`.
///
/// Duplicate sources within one rule are reported once; the same source in
/// two rules is reported for each (the rule name is the actionable part).
pub fn check_patterns(grammar: &Grammar) -> Vec<PatternDiagnostic> {
    let mut diagnostics = Vec::new();
    let all_rules = grammar.rules.iter().chain(grammar.aux_rules.iter());

    for (name, rule) in all_rules {
        let mut collector = PatternCollector { sources: Vec::new() };
        collector.visit(rule);

        for source in collector.sources {
            if let Err(err) = regex::Regex::new(&source) {
                diagnostics.push(PatternDiagnostic {
                    rule_name: name.to_string(),
                    source,
                    message: err.to_string(),
                });
            }
        }
    }
    diagnostics
}

struct PatternCollector {
    sources: Vec<String>,
}

impl RuleVisitor for PatternCollector {
    fn enter(&mut self, rule: &Rule) {
        if let Rule::Pattern(source) = rule {
            if !self.sources.contains(source) {
                self.sources.push(source.clone());
            }
        }
    }
}
