//! Token extraction: splitting one grammar into syntactic and lexical halves.
//!
//! This is the operational core of the front end. Given one validated input
//! grammar it produces two:
//!
//! ```text
//! input grammar ──┬─ rule is a bare terminal ──────▶ lexical.rules
//!                 │  (classify.rs, shallow)            (moved verbatim)
//!                 │
//!                 └─ anything else ── TokenExtractor ──▶ syntactic.rules
//!                                        │ hoists Literal/Pattern leaves
//!                                        ▼
//!                                    TokenTable ─────▶ lexical.aux_rules
//!                                    (shared, deduplicated, token<N>)
//! ```
//!
//! The same partition runs over `aux_rules`, with one twist: pure-terminal
//! auxiliary rules end up in the lexical grammar's `aux_rules`, unioned with
//! the generated token table at the end.
//!
//! Invariants the rest of the pipeline relies on:
//!
//! - The syntactic grammar contains no bare `Literal`/`Pattern` node; every
//!   terminal use has become an auxiliary `Symbol`.
//! - Structurally equal terminals anywhere in the input share one generated
//!   definition (one `TokenTable` threaded through both passes).
//! - Symbol references are inert: a leaf already pointing at another rule is
//!   never re-extracted, so the pass cannot cascade.
//! - The input is only consumed, never half-rewritten: the splitter builds
//!   fresh grammars and cannot fail on well-formed input. Dangling symbol
//!   references are not this pass's business — they propagate unchanged for
//!   a later phase to reject.

use super::classify::is_token;
use super::metrics::{PassMetrics, SplitMetrics, SplitRun};
use super::token_table::TokenTable;
use crate::grammar::{Grammar, RuleMap};
use crate::rules::{Rule, RuleTransform};
use std::time::Instant;

/// The extraction pass: hoists terminal leaves into a shared token table.
#[derive(Debug, Default)]
pub(crate) struct TokenExtractor {
    pub table: TokenTable,
}

impl RuleTransform for TokenExtractor {
    fn transform_leaf(&mut self, leaf: Rule) -> Rule {
        if is_token(&leaf) {
            Rule::auxiliary(self.table.intern(leaf))
        } else {
            // Symbol or Blank: inert.
            leaf
        }
    }
}

/// Split `input` into (syntactic, lexical) grammars.
///
/// The token table is scoped to this call and shared across both rule
/// collections, so generated names depend only on the input's iteration
/// order: running twice on the same grammar gives identical output.
pub(crate) fn split_grammar(input: Grammar) -> SplitRun {
    let started = Instant::now();
    let Grammar { start_rule_name, rules: in_rules, aux_rules: in_aux_rules } = input;
    let mut extractor = TokenExtractor::default();

    let (rules, tokens, rules_pass) = partition(in_rules, &mut extractor);
    let (aux_rules, mut aux_tokens, aux_pass) = partition(in_aux_rules, &mut extractor);

    let metrics = SplitMetrics {
        total: started.elapsed(),
        rules_pass,
        aux_pass,
        tokens_generated: extractor.table.len(),
        intern_hits: extractor.table.hits(),
    };

    // Generated definitions join the declared pure-terminal aux rules. Token
    // names come from a reserved namespace, so the union cannot clobber an
    // author-visible definition.
    aux_tokens.extend(extractor.table.into_rule_map());

    SplitRun {
        syntactic: Grammar::new(start_rule_name, rules, aux_rules),
        lexical: Grammar::new("", tokens, aux_tokens),
        metrics,
    }
}

/// Run one pass over a rule collection: whole-token rules are moved verbatim,
/// everything else goes through the extractor.
fn partition(input: RuleMap, extractor: &mut TokenExtractor) -> (RuleMap, RuleMap, PassMetrics) {
    let started = Instant::now();
    let mut rewritten = RuleMap::new();
    let mut moved = RuleMap::new();
    let scanned = input.len();

    for (name, rule) in input {
        if is_token(&rule) {
            moved.insert(name, rule);
        } else {
            rewritten.insert(name, extractor.apply(rule));
        }
    }

    let metrics = PassMetrics {
        duration: started.elapsed(),
        scanned,
        moved_whole: moved.len(),
        rewritten: rewritten.len(),
    };
    (rewritten, moved, metrics)
}
