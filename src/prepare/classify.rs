//! Token classification.
//!
//! Decides whether a rule is, *by itself*, a terminal definition. The check
//! is shallow on purpose: only a bare `Literal` or `Pattern` at the top level
//! counts. A `Choice` of two literals is not a token rule even though every
//! element of it is — the whole named rule stays in the syntactic grammar and
//! the extraction pass hoists its literals one level down instead. This
//! asymmetry is upstream policy and callers rely on it: it controls which
//! author-named rules land in the lexical grammar as a whole unit.

use crate::rules::Rule;

/// True iff `rule` is exactly a `Literal` or `Pattern` node.
pub(crate) fn is_token(rule: &Rule) -> bool {
    matches!(rule, Rule::Literal(_) | Rule::Pattern(_))
}
