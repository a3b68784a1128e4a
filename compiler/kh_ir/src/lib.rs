//! Kithare IR - token and syntax tree types.
//!
//! This crate holds the data shared by every stage of the front end:
//! - [`Span`] for source locations (code point offsets)
//! - [`Token`] and [`TokenKind`], the tokenizer's output
//! - [`ast`]: the expression and statement trees a parser builds from tokens
//! - [`escape`]: the quoting rules used when tokens and literals are rendered
//!
//! # Ownership
//!
//! Trees are plain owned values. Every child is held through `Box`, `Vec` or
//! `Option<Box<_>>`, so a tree has exactly one owner and no cycles. Deep copy
//! is `Clone`, deep delete is `Drop`, and the canonical text form is
//! `Display`.
//!
//! # Caching
//!
//! With the `cache` feature every public type derives `serde` traits.

pub mod ast;
pub mod escape;
mod span;
mod token;

pub use ast::{
    BinaryOp, ComparisonChain, ComparisonOp, ConditionalBranch, DictEntry, DictLiteral, Expr,
    ExprKind, Function, IfBranch, Import, Include, Signature, Stmt, StmtKind, TypeDecl, UnaryOp,
    VariableDeclaration,
};
pub use span::Span;
pub use token::{Delimiter, Keyword, Operator, Token, TokenKind, TokenTag};
