use crate::grammar::Grammar;
use crate::prepare::{self, SplitMetrics};
use crate::rules::RuleProps;
use std::time::Duration;

/// Result from [`split`].
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Structural rules, every terminal use rewritten to a symbol reference.
    pub syntactic: Grammar,
    /// Token definitions only; `start_rule_name` is empty.
    pub lexical: Grammar,
    /// Total elapsed time for the split.
    pub elapsed: Duration,
}

/// Which output grammar an input rule's definition landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDestination {
    Syntactic,
    Lexical,
}

/// Per-input-rule summary used in verbose output.
#[derive(Debug, Clone)]
pub struct RuleProfile {
    pub name: String,
    /// True for entries that came from the input's `aux_rules`.
    pub auxiliary: bool,
    pub destination: RuleDestination,
    /// Node-kind mask of the rule *before* extraction.
    pub props: RuleProps,
}

/// A generated token definition, rendered for display.
#[derive(Debug, Clone)]
pub struct TokenSummary {
    pub name: String,
    pub preview: String,
}

/// Additional details returned by [`split_verbose`].
///
/// This is intentionally compact: enough to see what the pass did (and what
/// it deduplicated) without dumping the whole output grammars again.
#[derive(Debug, Clone)]
pub struct SplitDetails {
    /// Timings and per-pass counters.
    pub metrics: SplitMetrics,
    /// Generated token definitions, in generation order.
    pub generated_tokens: Vec<TokenSummary>,
    /// One profile per input rule, in input order (named rules first).
    pub rule_profiles: Vec<RuleProfile>,
}

/// Result from [`split_verbose`].
#[derive(Debug, Clone)]
pub struct SplitResultVerbose {
    pub syntactic: Grammar,
    pub lexical: Grammar,
    pub elapsed: Duration,
    pub details: SplitDetails,
}

/// Split `grammar` into a syntactic grammar and a lexical grammar.
///
/// Whole-token rules (a bare literal or pattern at the top level) move
/// verbatim to the lexical side; every other rule is rewritten with its
/// terminal sub-expressions hoisted into shared, deduplicated `token<N>`
/// definitions in the lexical grammar's `aux_rules`.
///
/// The pass is total on well-formed grammars and deterministic: identical
/// input (including rule order) produces identical output, names included.
///
/// # Example
/// ```
/// use rulegram::{Rule, RuleMap, Grammar, split};
///
/// let rules: RuleMap = vec![
///     ("stmt", Rule::choice(vec![Rule::literal("return"), Rule::named("expr")])),
///     ("expr", Rule::pattern("[a-z]+")),
/// ]
/// .into_iter()
/// .collect();
///
/// let out = split(Grammar::new("stmt", rules, RuleMap::new()));
/// assert_eq!(out.syntactic.start_rule_name, "stmt");
/// assert_eq!(out.lexical.aux_rules.get("token1"), Some(&Rule::literal("return")));
/// ```
pub fn split(grammar: Grammar) -> SplitResult {
    let run = prepare::split_grammar(grammar);
    SplitResult { syntactic: run.syntactic, lexical: run.lexical, elapsed: run.metrics.total }
}

/// Split `grammar` and return extra (compact) debug details.
///
/// Useful for inspecting what was hoisted and how well dedup worked. The
/// plain [`split`] path does not allocate these extra summaries.
pub fn split_verbose(grammar: Grammar) -> SplitResultVerbose {
    // Profile the input before it is consumed by the split.
    let mut rule_profiles = Vec::with_capacity(grammar.rules.len() + grammar.aux_rules.len());
    for (auxiliary, collection) in [(false, &grammar.rules), (true, &grammar.aux_rules)] {
        for (name, rule) in collection.iter() {
            let destination = if prepare::is_token(rule) {
                RuleDestination::Lexical
            } else {
                RuleDestination::Syntactic
            };
            rule_profiles.push(RuleProfile {
                name: name.to_string(),
                auxiliary,
                destination,
                props: RuleProps::scan(rule),
            });
        }
    }

    let run = prepare::split_grammar(grammar);

    // The generated definitions are the trailing `tokens_generated` entries
    // of the lexical aux table (declared pure-terminal aux rules come first).
    let skip = run.lexical.aux_rules.len() - run.metrics.tokens_generated;
    let generated_tokens = run
        .lexical
        .aux_rules
        .iter()
        .skip(skip)
        .map(|(name, rule)| TokenSummary { name: name.to_string(), preview: rule.to_string() })
        .collect();

    SplitResultVerbose {
        elapsed: run.metrics.total,
        details: SplitDetails { metrics: run.metrics, generated_tokens, rule_profiles },
        syntactic: run.syntactic,
        lexical: run.lexical,
    }
}
