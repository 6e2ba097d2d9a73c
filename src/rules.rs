//! The rule IR and the traversal infrastructure every pass builds on.
//!
//! ## How the parts work together
//!
//! ```text
//! rule.rs   — `Rule`: closed recursive enum, structural equality/hashing,
//!             smart constructors keeping trees in canonical form
//! visit.rs  — `RuleTransform` (rewrite) and `RuleVisitor` (fold) skeletons
//! props.rs  — `RuleProps`: bitflags fold over a tree's node kinds
//! ```
//!
//! Passes live elsewhere (see `prepare.rs`); this module only defines the
//! data and the traversal contract. A new pass is a plain type implementing
//! one of the two traits with its pass-local state as fields.

#[path = "rules/props.rs"]
mod props;
#[path = "rules/rule.rs"]
mod rule;
#[path = "rules/visit.rs"]
mod visit;

pub use props::RuleProps;
pub use rule::{Rule, SymbolKind};
pub use visit::{RuleTransform, RuleVisitor};
