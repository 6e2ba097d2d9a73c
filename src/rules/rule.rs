//! The rule intermediate representation.
//!
//! Every phase of grammar compilation operates on `Rule` trees: the splitter
//! in this crate, and the NFA/table builders downstream. The type is pure
//! data — a closed recursive enum with *structural* equality and hashing, so
//! two trees with the same shape and payloads compare equal no matter where
//! they were allocated. Deduplication in `prepare/token_table.rs` depends on
//! exactly that.
//!
//! ## Canonical form
//!
//! Later phases assume rules arrive pre-simplified, so composite nodes are
//! built through smart constructors rather than raw variants:
//!
//! - [`Rule::seq`] flattens nested sequences, drops `Blank` identity
//!   elements, and right-nests the rest into binary `Seq` nodes.
//! - [`Rule::choice`] flattens nested choices and folds structurally
//!   identical alternatives (first occurrence wins).
//!
//! Building the same element list twice — or rebuilding a tree after a
//! rewrite pass — therefore always yields structurally equal results. Passes
//! that rebuild composites must go through these constructors (the
//! `RuleTransform` skeleton in `visit.rs` does).

use std::fmt;

/// How a symbol reference resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Reference to a rule the grammar author named.
    Named,
    /// Reference to a hidden, compiler-generated rule (e.g. a hoisted token).
    Auxiliary,
}

/// A grammar expression.
///
/// `Seq` is binary; n-ary sequences are right-nested chains built by
/// [`Rule::seq`]. `Choice` is n-ary with ordered alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Matches the empty string.
    Blank,
    /// Matches an exact terminal string.
    Literal(String),
    /// Matches strings described by a regular-expression source.
    Pattern(String),
    /// Reference to another rule by name.
    Symbol { name: String, kind: SymbolKind },
    /// Ordered concatenation.
    Seq(Box<Rule>, Box<Rule>),
    /// Ordered alternation.
    Choice(Vec<Rule>),
    /// Zero-or-more repetition.
    Repeat(Box<Rule>),
}

impl Rule {
    pub fn literal(text: impl Into<String>) -> Rule {
        Rule::Literal(text.into())
    }

    pub fn pattern(source: impl Into<String>) -> Rule {
        Rule::Pattern(source.into())
    }

    /// Reference to an author-named rule.
    pub fn named(name: impl Into<String>) -> Rule {
        Rule::Symbol { name: name.into(), kind: SymbolKind::Named }
    }

    /// Reference to a hidden/generated rule.
    pub fn auxiliary(name: impl Into<String>) -> Rule {
        Rule::Symbol { name: name.into(), kind: SymbolKind::Auxiliary }
    }

    pub fn repeat(content: Rule) -> Rule {
        Rule::Repeat(Box::new(content))
    }

    /// Build a sequence in canonical form.
    ///
    /// Nested `Seq` children are spliced in, `Blank` elements are dropped
    /// (identity for concatenation), and the survivors are right-nested:
    /// `seq([a, b, c])` is `Seq(a, Seq(b, c))`. An empty list collapses to
    /// `Blank`, a singleton to the element itself.
    pub fn seq(elements: Vec<Rule>) -> Rule {
        let mut flat = Vec::with_capacity(elements.len());
        flatten_seq(elements, &mut flat);

        let mut result = match flat.pop() {
            Some(last) => last,
            None => return Rule::Blank,
        };
        while let Some(element) = flat.pop() {
            result = Rule::Seq(Box::new(element), Box::new(result));
        }
        result
    }

    /// Build an alternation in canonical form.
    ///
    /// Nested `Choice` children are spliced in and structurally identical
    /// alternatives are folded, keeping the first occurrence's position. An
    /// empty list collapses to `Blank`, a singleton to the alternative
    /// itself.
    pub fn choice(alternatives: Vec<Rule>) -> Rule {
        let mut flat = Vec::with_capacity(alternatives.len());
        flatten_choice(alternatives, &mut flat);

        match flat.len() {
            0 => Rule::Blank,
            1 => flat.remove(0),
            _ => Rule::Choice(flat),
        }
    }
}

fn flatten_seq(elements: Vec<Rule>, out: &mut Vec<Rule>) {
    for element in elements {
        match element {
            Rule::Blank => {}
            Rule::Seq(left, right) => flatten_seq(vec![*left, *right], out),
            other => out.push(other),
        }
    }
}

fn flatten_choice(alternatives: Vec<Rule>, out: &mut Vec<Rule>) {
    for alternative in alternatives {
        match alternative {
            Rule::Choice(inner) => flatten_choice(inner, out),
            other => {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
    }
}

/// Compact EBNF-ish rendering, used for previews in the verbose API and the
/// debug report. Auxiliary symbol references are prefixed with `@`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Blank => write!(f, "()"),
            Rule::Literal(text) => write!(f, "{:?}", text),
            Rule::Pattern(source) => write!(f, "/{}/", source),
            Rule::Symbol { name, kind: SymbolKind::Named } => write!(f, "{}", name),
            Rule::Symbol { name, kind: SymbolKind::Auxiliary } => write!(f, "@{}", name),
            Rule::Seq(left, right) => {
                write!(f, "({}", left)?;
                // Unroll the right spine so `(a b c)` prints flat.
                let mut rest: &Rule = right;
                while let Rule::Seq(l, r) = rest {
                    write!(f, " {}", l)?;
                    rest = r;
                }
                write!(f, " {})", rest)
            }
            Rule::Choice(alternatives) => {
                write!(f, "(")?;
                for (idx, alternative) in alternatives.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                write!(f, ")")
            }
            Rule::Repeat(content) => write!(f, "{}*", content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Rule::seq(vec![Rule::literal("if"), Rule::named("expr")]);
        let b = Rule::seq(vec![Rule::literal("if"), Rule::named("expr")]);
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a, Rule::seq(vec![Rule::literal("iff"), Rule::named("expr")]));
    }

    #[test]
    fn seq_drops_blank_and_flattens() {
        let nested = Rule::seq(vec![
            Rule::seq(vec![Rule::literal("a"), Rule::literal("b")]),
            Rule::Blank,
            Rule::literal("c"),
        ]);
        let flat = Rule::seq(vec![Rule::literal("a"), Rule::literal("b"), Rule::literal("c")]);
        assert_eq!(nested, flat);

        // Right-nested shape.
        match &flat {
            Rule::Seq(left, right) => {
                assert_eq!(**left, Rule::literal("a"));
                assert!(matches!(**right, Rule::Seq(_, _)));
            }
            other => panic!("expected Seq, got {:?}", other),
        }
    }

    #[test]
    fn seq_collapses_trivial_lists() {
        assert_eq!(Rule::seq(vec![]), Rule::Blank);
        assert_eq!(Rule::seq(vec![Rule::Blank, Rule::Blank]), Rule::Blank);
        assert_eq!(Rule::seq(vec![Rule::literal("x")]), Rule::literal("x"));
        assert_eq!(Rule::seq(vec![Rule::Blank, Rule::literal("x")]), Rule::literal("x"));
    }

    #[test]
    fn choice_flattens_and_folds_duplicates() {
        let nested = Rule::choice(vec![
            Rule::choice(vec![Rule::literal("a"), Rule::literal("b")]),
            Rule::literal("a"),
            Rule::literal("c"),
        ]);
        assert_eq!(
            nested,
            Rule::Choice(vec![Rule::literal("a"), Rule::literal("b"), Rule::literal("c")])
        );
    }

    #[test]
    fn choice_collapses_trivial_lists() {
        assert_eq!(Rule::choice(vec![]), Rule::Blank);
        assert_eq!(Rule::choice(vec![Rule::named("x")]), Rule::named("x"));
        assert_eq!(Rule::choice(vec![Rule::literal("a"), Rule::literal("a")]), Rule::literal("a"));
    }

    #[test]
    fn display_renders_compact_previews() {
        let rule = Rule::choice(vec![
            Rule::seq(vec![Rule::literal("if"), Rule::named("expr")]),
            Rule::repeat(Rule::pattern("[0-9]+")),
            Rule::auxiliary("token1"),
        ]);
        assert_eq!(rule.to_string(), "((\"if\" expr) | /[0-9]+/* | @token1)");
    }
}
