//! Bundled demonstration grammars.
//!
//! Small grammars used by the debug binary (and handy in tests) to show the
//! splitter working on something richer than a two-rule fixture. They are
//! written with the builder macros the way a real front end would hand a
//! grammar to this crate: already name-resolved, terminals inline.

use crate::grammar::{Grammar, RuleMap};
use crate::{choice, lit, pat, rep, seq, sym};

pub fn names() -> &'static [&'static str] {
    &["arith", "json-lite"]
}

pub fn by_name(name: &str) -> Option<Grammar> {
    match name {
        "arith" => Some(arith()),
        "json-lite" => Some(json_lite()),
        _ => None,
    }
}

/// Infix arithmetic. Shows operator literals being hoisted and the shared
/// table deduplicating the parentheses used by two rules.
pub fn arith() -> Grammar {
    let rules: RuleMap = vec![
        (
            "expression",
            choice![
                seq![sym!("expression"), lit!("+"), sym!("expression")],
                seq![sym!("expression"), lit!("*"), sym!("expression")],
                seq![lit!("("), sym!("expression"), lit!(")")],
                sym!("call"),
                sym!("number"),
                sym!("variable"),
            ],
        ),
        ("call", seq![sym!("variable"), lit!("("), sym!("expression"), lit!(")")]),
        ("number", pat!("[0-9]+")),
        ("variable", pat!("[a-zA-Z_][a-zA-Z0-9_]*")),
    ]
    .into_iter()
    .collect();

    let aux_rules: RuleMap = vec![("_ws", pat!("\\s+"))].into_iter().collect();

    Grammar::new("expression", rules, aux_rules)
}

/// A JSON-ish grammar. The comma shows up in arrays, objects and pairs and
/// still produces a single generated token.
pub fn json_lite() -> Grammar {
    let rules: RuleMap = vec![
        (
            "value",
            choice![
                sym!("object"),
                sym!("array"),
                sym!("string"),
                sym!("number"),
                lit!("true"),
                lit!("false"),
                lit!("null"),
            ],
        ),
        (
            "object",
            seq![
                lit!("{"),
                choice![seq![sym!("pair"), rep![seq![lit!(","), sym!("pair")]]], crate::Rule::Blank],
                lit!("}"),
            ],
        ),
        ("pair", seq![sym!("string"), lit!(":"), sym!("value")]),
        (
            "array",
            seq![
                lit!("["),
                choice![
                    seq![sym!("value"), rep![seq![lit!(","), sym!("value")]]],
                    crate::Rule::Blank
                ],
                lit!("]"),
            ],
        ),
        ("string", pat!("\"[^\"]*\"")),
        ("number", pat!("-?[0-9]+(\\.[0-9]+)?")),
    ]
    .into_iter()
    .collect();

    Grammar::new("value", rules, RuleMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleProps;
    use crate::{check_patterns, split};

    #[test]
    fn every_sample_splits_cleanly() {
        for name in names() {
            let grammar = by_name(name).unwrap();
            assert!(check_patterns(&grammar).is_empty(), "broken pattern in {}", name);

            let out = split(grammar);
            for (rule_name, rule) in
                out.syntactic.rules.iter().chain(out.syntactic.aux_rules.iter())
            {
                assert!(
                    RuleProps::scan(rule).terminal_free(),
                    "bare terminal left in {}::{}",
                    name,
                    rule_name
                );
            }
        }
    }

    #[test]
    fn json_lite_dedups_the_comma() {
        let out = split(json_lite());
        let commas = out
            .lexical
            .aux_rules
            .iter()
            .filter(|(_, rule)| **rule == lit!(","))
            .count();
        assert_eq!(commas, 1);
    }

    #[test]
    fn arith_keeps_patterns_as_whole_tokens() {
        let out = split(arith());
        assert!(out.lexical.rules.contains("number"));
        assert!(out.lexical.rules.contains("variable"));
        assert!(out.lexical.aux_rules.contains("_ws"));
        assert_eq!(out.syntactic.start_rule_name, "expression");
    }
}
