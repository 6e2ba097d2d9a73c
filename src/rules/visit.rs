//! Polymorphic traversal over rule trees.
//!
//! Every compilation pass — the token extractor here, NFA construction and
//! conflict analysis downstream — walks `Rule` trees the same way: recurse
//! into the three composite variants (`Seq`, `Choice`, `Repeat`), do
//! something pass-specific at the leaves. These two traits capture that
//! discipline once so each pass only writes its leaf case:
//!
//! - [`RuleTransform`] consumes a rule and produces a rewritten one. The
//!   skeleton rebuilds composites through the smart constructors, so a
//!   transform's output is always in canonical form.
//! - [`RuleVisitor`] is a read-only pre-order walk for folds that accumulate
//!   over every node (see `props.rs`).
//!
//! A pass that needs different composite behavior can override `apply` /
//! `visit`, but none of the current passes do.

use super::rule::Rule;

/// A rewrite pass over a rule tree.
pub trait RuleTransform {
    /// Rewrite a non-composite node (`Blank`, `Literal`, `Pattern`,
    /// `Symbol`). Composite recursion is handled by [`RuleTransform::apply`].
    fn transform_leaf(&mut self, leaf: Rule) -> Rule;

    /// Apply the pass top-down, rebuilding composites in canonical form.
    fn apply(&mut self, rule: Rule) -> Rule {
        match rule {
            Rule::Seq(left, right) => {
                let left = self.apply(*left);
                let right = self.apply(*right);
                Rule::seq(vec![left, right])
            }
            Rule::Choice(alternatives) => {
                Rule::choice(alternatives.into_iter().map(|alt| self.apply(alt)).collect())
            }
            Rule::Repeat(content) => Rule::Repeat(Box::new(self.apply(*content))),
            leaf => self.transform_leaf(leaf),
        }
    }
}

/// A read-only fold over every node of a rule tree, pre-order.
pub trait RuleVisitor {
    /// Called once per node, parents before children.
    fn enter(&mut self, rule: &Rule);

    fn visit(&mut self, rule: &Rule) {
        self.enter(rule);
        match rule {
            Rule::Seq(left, right) => {
                self.visit(left);
                self.visit(right);
            }
            Rule::Choice(alternatives) => {
                for alternative in alternatives {
                    self.visit(alternative);
                }
            }
            Rule::Repeat(content) => self.visit(content),
            Rule::Blank | Rule::Literal(_) | Rule::Pattern(_) | Rule::Symbol { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Upper-cases literal text, leaves everything else alone.
    struct ShoutLiterals;

    impl RuleTransform for ShoutLiterals {
        fn transform_leaf(&mut self, leaf: Rule) -> Rule {
            match leaf {
                Rule::Literal(text) => Rule::Literal(text.to_uppercase()),
                other => other,
            }
        }
    }

    #[test]
    fn transform_reaches_every_leaf() {
        let rule = Rule::choice(vec![
            Rule::seq(vec![Rule::literal("if"), Rule::named("expr")]),
            Rule::repeat(Rule::literal("x")),
        ]);
        let rewritten = ShoutLiterals.apply(rule);
        assert_eq!(
            rewritten,
            Rule::choice(vec![
                Rule::seq(vec![Rule::literal("IF"), Rule::named("expr")]),
                Rule::repeat(Rule::literal("X")),
            ])
        );
    }

    #[test]
    fn transform_output_is_canonical() {
        /// Rewrites every literal to `Blank`.
        struct EraseLiterals;

        impl RuleTransform for EraseLiterals {
            fn transform_leaf(&mut self, leaf: Rule) -> Rule {
                match leaf {
                    Rule::Literal(_) => Rule::Blank,
                    other => other,
                }
            }
        }

        // Dropping a literal from a two-element sequence must collapse the
        // sequence, not leave a dangling binary node.
        let rule = Rule::seq(vec![Rule::literal("let"), Rule::named("binding")]);
        assert_eq!(EraseLiterals.apply(rule), Rule::named("binding"));
    }

    struct CountNodes(usize);

    impl RuleVisitor for CountNodes {
        fn enter(&mut self, _rule: &Rule) {
            self.0 += 1;
        }
    }

    #[test]
    fn visitor_walks_every_node() {
        let rule = Rule::seq(vec![
            Rule::literal("a"),
            Rule::choice(vec![Rule::named("x"), Rule::Blank]),
        ]);
        // Seq + Literal + Choice + Symbol + Blank = 5
        let mut counter = CountNodes(0);
        counter.visit(&rule);
        assert_eq!(counter.0, 5);
    }
}
