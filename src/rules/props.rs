//! Coarse rule properties.
//!
//! A `RuleProps` mask answers cheap shape questions about a whole rule tree
//! ("does it contain a bare literal anywhere?") without committing to a full
//! analysis pass. The splitter's output contract is stated in these terms:
//! every rule of the syntactic grammar must be [`RuleProps::terminal_free`]
//! after extraction, because every terminal use has been replaced by an
//! auxiliary symbol reference.
//!
//! The mask is computed by a [`RuleVisitor`] fold and surfaced per rule in
//! the verbose API (`RuleProfile`) and the debug report.

use super::rule::Rule;
use super::visit::RuleVisitor;

bitflags::bitflags! {
    /// Which node kinds occur anywhere in a rule tree.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleProps: u8 {
        const HAS_LITERAL = 1 << 0;
        const HAS_PATTERN = 1 << 1;
        const HAS_SYMBOL  = 1 << 2;
        const HAS_BLANK   = 1 << 3;
        const HAS_REPEAT  = 1 << 4;
    }
}

impl RuleProps {
    /// Compute the property mask for `rule`.
    pub fn scan(rule: &Rule) -> RuleProps {
        let mut scan = PropScan { props: RuleProps::empty() };
        scan.visit(rule);
        scan.props
    }

    /// True if the tree contains no bare `Literal` or `Pattern` node.
    pub fn terminal_free(&self) -> bool {
        !self.intersects(RuleProps::HAS_LITERAL | RuleProps::HAS_PATTERN)
    }
}

struct PropScan {
    props: RuleProps,
}

impl RuleVisitor for PropScan {
    fn enter(&mut self, rule: &Rule) {
        match rule {
            Rule::Literal(_) => self.props |= RuleProps::HAS_LITERAL,
            Rule::Pattern(_) => self.props |= RuleProps::HAS_PATTERN,
            Rule::Symbol { .. } => self.props |= RuleProps::HAS_SYMBOL,
            Rule::Blank => self.props |= RuleProps::HAS_BLANK,
            Rule::Repeat(_) => self.props |= RuleProps::HAS_REPEAT,
            Rule::Seq(_, _) | Rule::Choice(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_collects_flags_from_the_whole_tree() {
        let rule = Rule::seq(vec![
            Rule::literal("let"),
            Rule::repeat(Rule::choice(vec![Rule::named("binding"), Rule::pattern(",")])),
        ]);
        let props = RuleProps::scan(&rule);
        assert!(props.contains(RuleProps::HAS_LITERAL));
        assert!(props.contains(RuleProps::HAS_PATTERN));
        assert!(props.contains(RuleProps::HAS_SYMBOL));
        assert!(props.contains(RuleProps::HAS_REPEAT));
        assert!(!props.contains(RuleProps::HAS_BLANK));
        assert!(!props.terminal_free());
    }

    #[test]
    fn symbol_only_rules_are_terminal_free() {
        let rule = Rule::seq(vec![Rule::named("expr"), Rule::auxiliary("token1")]);
        assert!(RuleProps::scan(&rule).terminal_free());
        assert!(RuleProps::scan(&Rule::Blank).terminal_free());
    }
}
