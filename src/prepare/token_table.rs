//! The shared token table: interning for hoisted terminals.
//!
//! Extraction hoists every terminal sub-expression into a table of freshly
//! named token definitions. Without a *stable* interning strategy the pass
//! could:
//!
//! - Emit two names for the same literal appearing in different rules
//! - Produce different names across runs (iteration-order dependence)
//!
//! The table therefore keys on *structural* equality of the rule tree — not
//! identity — and allocates names purely from its own size, so the mapping
//! from input grammar to generated names is a function of traversal order and
//! nothing else.
//!
//! One table is scoped to one split invocation and threaded through both the
//! `rules` and `aux_rules` passes, which is what makes a literal shared
//! between the two collections collapse to a single entry.
//!
//! ## Tradeoffs
//!
//! Lookup is a linear scan over `(name, rule)` pairs. Token tables are small
//! (one entry per *distinct* terminal in the grammar), and the scan keeps the
//! first-structural-match semantics obvious. A hash-keyed index can be added
//! later without changing the names produced.

use crate::grammar::RuleMap;
use crate::rules::Rule;

/// Insertion-ordered table of generated token definitions.
#[derive(Debug, Default)]
pub(crate) struct TokenTable {
    entries: Vec<(String, Rule)>,
    hits: usize,
}

impl TokenTable {
    /// Intern `rule`: return the generated name of the first structurally
    /// equal entry, or allocate the next `token<N>` name and insert.
    pub fn intern(&mut self, rule: Rule) -> String {
        for (name, existing) in &self.entries {
            if *existing == rule {
                self.hits += 1;
                if std::env::var_os("RULEGRAM_DEBUG_TOKENS").is_some() {
                    eprintln!("[token_table] hit {} <- {}", name, rule);
                }
                return name.clone();
            }
        }

        let name = format!("token{}", self.entries.len() + 1);
        if std::env::var_os("RULEGRAM_DEBUG_TOKENS").is_some() {
            eprintln!("[token_table] new {} <- {}", name, rule);
        }
        self.entries.push((name.clone(), rule));
        name
    }

    /// Number of distinct token definitions interned so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of intern calls answered by an existing entry.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Consume the table into a `RuleMap`, preserving generation order.
    pub fn into_rule_map(self) -> RuleMap {
        self.entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_table_size() {
        let mut table = TokenTable::default();
        assert_eq!(table.intern(Rule::literal("if")), "token1");
        assert_eq!(table.intern(Rule::pattern("[0-9]+")), "token2");
        assert_eq!(table.intern(Rule::literal("else")), "token3");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn structurally_equal_rules_share_an_entry() {
        let mut table = TokenTable::default();
        let first = table.intern(Rule::literal("if"));
        let second = table.intern(Rule::literal("if"));
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
        assert_eq!(table.hits(), 1);
    }

    #[test]
    fn distinct_rules_get_distinct_names() {
        let mut table = TokenTable::default();
        let a = table.intern(Rule::literal("if"));
        let b = table.intern(Rule::literal("iff"));
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
        assert_eq!(table.hits(), 0);

        // A literal and a pattern with the same text are different tokens.
        let c = table.intern(Rule::pattern("if"));
        assert_ne!(a, c);
    }

    #[test]
    fn into_rule_map_preserves_generation_order() {
        let mut table = TokenTable::default();
        table.intern(Rule::literal("a"));
        table.intern(Rule::literal("b"));
        let map = table.into_rule_map();
        let names: Vec<&str> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["token1", "token2"]);
        assert_eq!(map.get("token2"), Some(&Rule::literal("b")));
    }
}
