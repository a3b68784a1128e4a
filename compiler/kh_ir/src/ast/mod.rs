//! Syntax tree types.
//!
//! Two node families: [`Expr`] for expressions and [`Stmt`] for statements.
//! Both pair a closed `*Kind` enum with a [`Span`](crate::Span).
//!
//! # Tree operations
//!
//! - Deep copy: `Clone`. The copy shares no storage with the source.
//! - Deep delete: `Drop`. Each child is released once, by its single owner.
//! - Render: `Display`. The text forms are listed in the `render` module.
//!
//! All three are exhaustive over the variants, so adding a variant fails to
//! compile until every operation handles it.

mod expr;
mod operators;
mod render;
mod stmt;

pub use expr::{
    ComparisonChain, DictEntry, DictLiteral, Expr, ExprKind, Signature, VariableDeclaration,
};
pub use operators::{BinaryOp, ComparisonOp, UnaryOp};
pub use render::render_block;
pub use stmt::{ConditionalBranch, Function, IfBranch, Import, Include, Stmt, StmtKind, TypeDecl};
