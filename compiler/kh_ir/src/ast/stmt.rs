//! Statement nodes.

use std::fmt;

use kh_stack::ensure_sufficient_stack;

use super::expr::{Expr, Signature};
use crate::Span;

/// Statement node: a kind plus its source span.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` recurse once per nesting level,
/// so each of them runs under [`ensure_sufficient_stack`].
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl Clone for Stmt {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Stmt {
            kind: self.kind.clone(),
            span: self.span,
        })
    }
}

impl PartialEq for Stmt {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.span == other.span && self.kind == other.kind)
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Stmt")
                .field("kind", &self.kind)
                .field("span", &self.span)
                .finish()
        })
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, StmtKind::Break);
        ensure_sufficient_stack(move || drop(kind));
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    Expression(Expr),

    Import(Import),
    Include(Include),
    Function(Function),
    Class(TypeDecl),
    Struct(TypeDecl),
    Enum {
        name: String,
        members: Vec<String>,
    },
    Alias {
        is_incase: bool,
        name: String,
        expression: Expr,
    },

    IfBranch(IfBranch),
    WhileLoop {
        condition: Expr,
        content: Vec<Stmt>,
    },
    DoWhileLoop {
        condition: Expr,
        content: Vec<Stmt>,
    },
    /// `for initial, condition, update { ... }`
    ForLoop {
        initial: Box<Expr>,
        condition: Box<Expr>,
        update: Box<Expr>,
        content: Vec<Stmt>,
    },
    /// `for a, b in iteratee { ... }`
    ForEachLoop {
        iterators: Vec<Expr>,
        iteratee: Expr,
        content: Vec<Stmt>,
    },
    Break,
    Continue,
    Return(Vec<Expr>),
}

impl StmtKind {
    /// Short variant name, as used in tree dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            StmtKind::Expression(_) => "expression",
            StmtKind::Import(_) => "import",
            StmtKind::Include(_) => "include",
            StmtKind::Function(_) => "function",
            StmtKind::Class(_) => "class",
            StmtKind::Struct(_) => "struct",
            StmtKind::Enum { .. } => "enum",
            StmtKind::Alias { .. } => "alias",
            StmtKind::IfBranch(_) => "if_branch",
            StmtKind::WhileLoop { .. } => "while_loop",
            StmtKind::DoWhileLoop { .. } => "do_while_loop",
            StmtKind::ForLoop { .. } => "for_loop",
            StmtKind::ForEachLoop { .. } => "for_each_loop",
            StmtKind::Break => "break",
            StmtKind::Continue => "continue",
            StmtKind::Return(_) => "return",
        }
    }
}

/// `import [.]a.b[ as alias];`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    pub path: Vec<String>,
    /// Leading `.`: resolved next to the importing file.
    pub relative: bool,
    pub optional_alias: Option<String>,
}

/// `include [.]a.b;`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Include {
    pub path: Vec<String>,
    pub relative: bool,
}

/// `[incase] [static] def name(args) [-> [ref] T] { ... }`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub is_incase: bool,
    pub is_static: bool,
    /// Identifier, or a scope expression for methods defined out of line.
    pub name_point: Expr,
    pub signature: Signature,
    pub content: Vec<Stmt>,
}

/// Shared shape of `class` and `struct` declarations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub is_incase: bool,
    pub name: String,
    pub template_arguments: Vec<String>,
    pub optional_base_type: Option<Box<Expr>>,
    pub content: Vec<Stmt>,
}

/// One `if`/`elif` arm.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalBranch {
    pub condition: Expr,
    pub content: Vec<Stmt>,
}

/// `if c { } elif c { } else { }`
///
/// Always holds at least one conditioned branch; each condition is stored
/// with its block, so conditions and contents pair up one to one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IfBranch {
    branches: Vec<ConditionalBranch>,
    pub else_content: Option<Vec<Stmt>>,
}

impl IfBranch {
    pub fn new(condition: Expr, content: Vec<Stmt>) -> Self {
        IfBranch {
            branches: vec![ConditionalBranch { condition, content }],
            else_content: None,
        }
    }

    /// Append an `elif` arm.
    #[must_use]
    pub fn elif(mut self, condition: Expr, content: Vec<Stmt>) -> Self {
        self.branches.push(ConditionalBranch { condition, content });
        self
    }

    #[must_use]
    pub fn with_else(mut self, content: Vec<Stmt>) -> Self {
        self.else_content = Some(content);
        self
    }

    /// Build from parallel condition and block lists.
    ///
    /// Returns `None` when the lists are empty or differ in length.
    pub fn from_parts(
        branch_conditions: Vec<Expr>,
        branch_contents: Vec<Vec<Stmt>>,
        else_content: Option<Vec<Stmt>>,
    ) -> Option<Self> {
        if branch_conditions.is_empty() || branch_conditions.len() != branch_contents.len() {
            return None;
        }
        let branches = branch_conditions
            .into_iter()
            .zip(branch_contents)
            .map(|(condition, content)| ConditionalBranch { condition, content })
            .collect();
        Some(IfBranch {
            branches,
            else_content,
        })
    }

    /// The `if` arm followed by every `elif` arm.
    pub fn branches(&self) -> &[ConditionalBranch] {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut [ConditionalBranch] {
        &mut self.branches
    }

    pub fn branch_conditions(&self) -> impl ExactSizeIterator<Item = &Expr> {
        self.branches.iter().map(|branch| &branch.condition)
    }

    pub fn branch_contents(&self) -> impl ExactSizeIterator<Item = &[Stmt]> {
        self.branches.iter().map(|branch| branch.content.as_slice())
    }
}
