//! Grammars and the ordered rule container backing them.
//!
//! A `Grammar` is the unit of work for the whole pipeline: one named
//! collection of rules plus a distinguished start rule. The splitter consumes
//! a grammar by value and builds two new ones; nothing in this crate mutates
//! a grammar in place after construction.
//!
//! `RuleMap` is deliberately a thin `Vec`-backed container rather than a hash
//! map: rule counts are small, and iteration order is part of the pipeline's
//! determinism contract — generated token names depend on the order rules are
//! walked, so the container must iterate exactly in insertion (author) order
//! on every run.

use crate::rules::Rule;

/// Insertion-ordered mapping from rule name to [`Rule`], with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMap {
    entries: Vec<(String, Rule)>,
}

impl RuleMap {
    /// Create an empty `RuleMap`.
    pub fn new() -> Self {
        RuleMap { entries: Vec::new() }
    }

    /// Insert a rule under `name`. If the name is already present its rule is
    /// replaced in place (keys are unique; the entry keeps its position).
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = rule,
            None => self.entries.push((name, rule)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, rule)| rule)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Append all of `other`'s entries, replacing same-named rules in `self`.
    pub fn extend(&mut self, other: RuleMap) {
        for (name, rule) in other {
            self.insert(name, rule);
        }
    }
}

impl IntoIterator for RuleMap {
    type Item = (String, Rule);
    type IntoIter = std::vec::IntoIter<(String, Rule)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<N: Into<String>> FromIterator<(N, Rule)> for RuleMap {
    fn from_iter<I: IntoIterator<Item = (N, Rule)>>(iter: I) -> Self {
        let mut map = RuleMap::new();
        for (name, rule) in iter {
            map.insert(name, rule);
        }
        map
    }
}

/// A grammar: a start rule name plus named and auxiliary rule collections.
///
/// `aux_rules` holds hidden definitions — rules the author marked hidden
/// upstream, and (after splitting) compiler-generated token definitions. The
/// lexical grammar produced by the splitter carries an empty
/// `start_rule_name`: it is a flat bag of token definitions, not a language
/// with a start symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub start_rule_name: String,
    pub rules: RuleMap,
    pub aux_rules: RuleMap,
}

impl Grammar {
    pub fn new(start_rule_name: impl Into<String>, rules: RuleMap, aux_rules: RuleMap) -> Self {
        Grammar { start_rule_name: start_rule_name.into(), rules, aux_rules }
    }
}
