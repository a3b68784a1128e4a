//! Expression nodes.

use std::fmt;

use kh_stack::ensure_sufficient_stack;

use super::operators::{BinaryOp, ComparisonOp, UnaryOp};
use super::stmt::Stmt;
use crate::Span;

/// Expression node: a kind plus its source span.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` recurse once per nesting level,
/// so each of them runs under [`ensure_sufficient_stack`].
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Identifier expression.
    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Identifier(name.into()), span)
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Expr {
            kind: self.kind.clone(),
            span: self.span,
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.span == other.span && self.kind == other.kind)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Expr")
                .field("kind", &self.kind)
                .field("span", &self.span)
                .finish()
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, ExprKind::Integer(0));
        ensure_sufficient_stack(move || drop(kind));
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    // Literals
    Identifier(String),
    Char(char),
    String(String),
    Buffer(Vec<u8>),
    Byte(u8),
    Integer(i64),
    UInteger(u64),
    Float(f32),
    Double(f64),
    IFloat(f32),
    IDouble(f64),

    // Composite literals
    Tuple(Vec<Expr>),
    Array(Vec<Expr>),
    Dict(DictLiteral),

    // Operators
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `value if condition else otherwise`
    Ternary {
        condition: Box<Expr>,
        value: Box<Expr>,
        otherwise: Box<Expr>,
    },
    Comparison(ComparisonChain),
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    Index {
        indexee: Box<Expr>,
        arguments: Vec<Expr>,
    },

    // Declarative forms
    VariableDeclaration(VariableDeclaration),
    Lambda {
        signature: Signature,
        content: Vec<Stmt>,
    },
    /// `value.name.name`
    Scope {
        value: Box<Expr>,
        scope_names: Vec<String>,
    },
    /// `def(T, U) -> R`
    FunctionType {
        argument_types: Vec<Expr>,
        is_return_type_ref: bool,
        return_type: Box<Expr>,
    },
    /// `value!(T, U)`
    Templatize {
        value: Box<Expr>,
        template_arguments: Vec<Expr>,
    },
}

impl ExprKind {
    /// Short variant name, as used in tree dumps.
    pub const fn name(&self) -> &'static str {
        match self {
            ExprKind::Identifier(_) => "identifier",
            ExprKind::Char(_) => "char",
            ExprKind::String(_) => "string",
            ExprKind::Buffer(_) => "buffer",
            ExprKind::Byte(_) => "byte",
            ExprKind::Integer(_) => "integer",
            ExprKind::UInteger(_) => "uinteger",
            ExprKind::Float(_) => "float",
            ExprKind::Double(_) => "double",
            ExprKind::IFloat(_) => "ifloat",
            ExprKind::IDouble(_) => "idouble",
            ExprKind::Tuple(_) => "tuple",
            ExprKind::Array(_) => "array",
            ExprKind::Dict(_) => "dict",
            ExprKind::Unary { .. } => "unary",
            ExprKind::Binary { .. } => "binary",
            ExprKind::Ternary { .. } => "ternary",
            ExprKind::Comparison(_) => "comparison",
            ExprKind::Call { .. } => "call",
            ExprKind::Index { .. } => "index",
            ExprKind::VariableDeclaration(_) => "variable_declaration",
            ExprKind::Lambda { .. } => "lambda",
            ExprKind::Scope { .. } => "scope",
            ExprKind::FunctionType { .. } => "function_type",
            ExprKind::Templatize { .. } => "templatize",
        }
    }
}

/// One `key: value` pair of a dict literal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DictEntry {
    pub key: Expr,
    pub value: Expr,
}

/// Dict literal. Keys and values are stored pairwise, so their counts
/// always match.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct DictLiteral {
    pub entries: Vec<DictEntry>,
}

impl DictLiteral {
    pub fn new(entries: Vec<DictEntry>) -> Self {
        DictLiteral { entries }
    }

    /// Pair up parallel key and value lists.
    ///
    /// Returns `None` when the lists differ in length.
    pub fn from_parts(keys: Vec<Expr>, values: Vec<Expr>) -> Option<Self> {
        if keys.len() != values.len() {
            return None;
        }
        let entries = keys
            .into_iter()
            .zip(values)
            .map(|(key, value)| DictEntry { key, value })
            .collect();
        Some(DictLiteral { entries })
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Expr> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Expr> {
        self.entries.iter().map(|entry| &entry.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Chained comparison `a < b <= c`.
///
/// Stored as the first operand followed by `(operator, operand)` links, so
/// there is always exactly one operator fewer than operands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonChain {
    pub first: Box<Expr>,
    pub rest: Vec<(ComparisonOp, Expr)>,
}

impl ComparisonChain {
    /// Single comparison `left op right`.
    pub fn new(left: Expr, op: ComparisonOp, right: Expr) -> Self {
        ComparisonChain {
            first: Box::new(left),
            rest: vec![(op, right)],
        }
    }

    /// Append another link to the chain.
    pub fn push(&mut self, op: ComparisonOp, operand: Expr) {
        self.rest.push((op, operand));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn then(mut self, op: ComparisonOp, operand: Expr) -> Self {
        self.push(op, operand);
        self
    }

    /// Build from parallel operand and operator lists.
    ///
    /// Returns `None` unless `operators.len() + 1 == operands.len()` and there
    /// is at least one operator.
    pub fn from_parts(operands: Vec<Expr>, operators: Vec<ComparisonOp>) -> Option<Self> {
        if operators.is_empty() || operators.len() + 1 != operands.len() {
            return None;
        }
        let mut operands = operands.into_iter();
        let first = Box::new(operands.next()?);
        let rest = operators.into_iter().zip(operands).collect();
        Some(ComparisonChain { first, rest })
    }

    pub fn operands(&self) -> impl Iterator<Item = &Expr> {
        std::iter::once(&*self.first).chain(self.rest.iter().map(|(_, operand)| operand))
    }

    pub fn operators(&self) -> impl ExactSizeIterator<Item = ComparisonOp> + '_ {
        self.rest.iter().map(|(op, _)| *op)
    }

    pub fn operand_count(&self) -> usize {
        self.rest.len() + 1
    }
}

/// `[static] [wild] [ref] name[: Type][ = initializer]`
///
/// The flags are carried as written; their meaning is decided later.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDeclaration {
    pub is_static: bool,
    pub is_wild: bool,
    pub is_ref: bool,
    pub name: String,
    pub optional_type: Option<Box<Expr>>,
    pub optional_initializer: Option<Box<Expr>>,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        VariableDeclaration {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: Expr) -> Self {
        self.optional_type = Some(Box::new(ty));
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: Expr) -> Self {
        self.optional_initializer = Some(Box::new(initializer));
        self
    }
}

/// Parameter list and return type shared by lambdas and function statements.
///
/// `arguments` and the variadic argument are variable declaration
/// expressions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    pub arguments: Vec<Expr>,
    pub optional_variadic_argument: Option<Box<Expr>>,
    pub is_return_type_ref: bool,
    pub optional_return_type: Option<Box<Expr>>,
}
