//! Canonical text form of syntax trees.
//!
//! The output is a debug and snapshot view. It reads like Kithare source but
//! is not guaranteed to parse back. Forms:
//!
//! | Node | Text |
//! |---|---|
//! | binary | `left op right` |
//! | unary | `-x`, `not x`, `x++` |
//! | ternary | `value if condition else otherwise` |
//! | comparison | `a < b <= c` |
//! | tuple / array / dict | `(a, b)` `(a,)` / `[a, b]` / `{k: v}` |
//! | call / index | `f(a)` / `x[i]` |
//! | scope / templatize | `v.a.b` / `v!(T, U)` |
//! | variable declaration | `static wild ref name: T = init` |
//! | lambda / function type | `def(a: int) -> ref T { ... }` / `def(int) -> T` |
//! | block | `{ s1 s2 }` or `{}` |
//!
//! Operands that are themselves operator forms are parenthesized, so the
//! text never depends on precedence rules. Numeric literals carry their
//! suffix (`u`, `f`, `j`, `i`) so every literal kind reads back distinctly.

use std::fmt::{self, Write as _};

use kh_stack::ensure_sufficient_stack;

use super::expr::{ComparisonChain, DictLiteral, Expr, ExprKind, Signature, VariableDeclaration};
use super::operators::UnaryOp;
use super::stmt::{Function, IfBranch, Import, Include, Stmt, StmtKind, TypeDecl};
use crate::escape::{
    write_escaped_byte, write_escaped_char, write_quoted_buffer, write_quoted_string,
};

/// Render a statement block as `{ s1 s2 }`, or `{}` when empty.
pub fn render_block(content: &[Stmt]) -> String {
    Block(content).to_string()
}

struct Block<'a>(&'a [Stmt]);

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("{}");
        }
        f.write_char('{')?;
        for stmt in self.0 {
            write!(f, " {stmt}")?;
        }
        f.write_str(" }")
    }
}

/// Expression in operand position: parenthesized unless atomic.
struct Operand<'a>(&'a Expr);

impl Operand<'_> {
    fn is_atomic(&self) -> bool {
        match &self.0.kind {
            ExprKind::Integer(v) => *v >= 0,
            ExprKind::Float(v) | ExprKind::IFloat(v) => v.is_sign_positive(),
            ExprKind::Double(v) | ExprKind::IDouble(v) => v.is_sign_positive(),
            ExprKind::Identifier(_)
            | ExprKind::Char(_)
            | ExprKind::String(_)
            | ExprKind::Buffer(_)
            | ExprKind::Byte(_)
            | ExprKind::UInteger(_)
            | ExprKind::Tuple(_)
            | ExprKind::Array(_)
            | ExprKind::Dict(_)
            | ExprKind::Call { .. }
            | ExprKind::Index { .. }
            | ExprKind::Scope { .. }
            | ExprKind::Templatize { .. } => true,
            ExprKind::Unary { .. }
            | ExprKind::Binary { .. }
            | ExprKind::Ternary { .. }
            | ExprKind::Comparison(_)
            | ExprKind::VariableDeclaration(_)
            | ExprKind::Lambda { .. }
            | ExprKind::FunctionType { .. } => false,
        }
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

fn comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn dotted_path(f: &mut fmt::Formatter<'_>, path: &[String], relative: bool) -> fmt::Result {
    if relative {
        f.write_char('.')?;
    }
    for (i, name) in path.iter().enumerate() {
        if i > 0 {
            f.write_char('.')?;
        }
        f.write_str(name)?;
    }
    Ok(())
}

// ─── Expressions ───────────────────────────────────────────────

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| fmt::Display::fmt(&self.kind, f))
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Identifier(name) => f.write_str(name),
            ExprKind::Char(c) => {
                f.write_char('\'')?;
                write_escaped_char(f, *c)?;
                f.write_char('\'')
            }
            ExprKind::String(text) => write_quoted_string(f, text),
            ExprKind::Buffer(bytes) => write_quoted_buffer(f, bytes),
            ExprKind::Byte(byte) => {
                f.write_str("b'")?;
                write_escaped_byte(f, *byte)?;
                f.write_char('\'')
            }
            ExprKind::Integer(v) => write!(f, "{v}"),
            ExprKind::UInteger(v) => write!(f, "{v}u"),
            ExprKind::Float(v) => write!(f, "{v:?}f"),
            ExprKind::Double(v) => write!(f, "{v:?}"),
            ExprKind::IFloat(v) => write!(f, "{v:?}j"),
            ExprKind::IDouble(v) => write!(f, "{v:?}i"),

            ExprKind::Tuple(values) => {
                f.write_char('(')?;
                comma_separated(f, values)?;
                if values.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            ExprKind::Array(values) => {
                f.write_char('[')?;
                comma_separated(f, values)?;
                f.write_char(']')
            }
            ExprKind::Dict(dict) => write!(f, "{dict}"),

            ExprKind::Unary { op, operand } => {
                let operand = Operand(operand);
                if op.is_postfix() {
                    write!(f, "{operand}{}", op.as_symbol())
                } else if *op == UnaryOp::Not {
                    write!(f, "not {operand}")
                } else {
                    write!(f, "{}{operand}", op.as_symbol())
                }
            }
            ExprKind::Binary { op, left, right } => {
                write!(f, "{} {} {}", Operand(left), op.as_symbol(), Operand(right))
            }
            ExprKind::Ternary {
                condition,
                value,
                otherwise,
            } => write!(
                f,
                "{} if {} else {}",
                Operand(value),
                Operand(condition),
                Operand(otherwise)
            ),
            ExprKind::Comparison(chain) => write!(f, "{chain}"),
            ExprKind::Call { callee, arguments } => {
                write!(f, "{}(", Operand(callee))?;
                comma_separated(f, arguments)?;
                f.write_char(')')
            }
            ExprKind::Index { indexee, arguments } => {
                write!(f, "{}[", Operand(indexee))?;
                comma_separated(f, arguments)?;
                f.write_char(']')
            }

            ExprKind::VariableDeclaration(declaration) => write!(f, "{declaration}"),
            ExprKind::Lambda { signature, content } => {
                write!(f, "def{signature} {}", Block(content))
            }
            ExprKind::Scope { value, scope_names } => {
                write!(f, "{}", Operand(value))?;
                for name in scope_names {
                    write!(f, ".{name}")?;
                }
                Ok(())
            }
            ExprKind::FunctionType {
                argument_types,
                is_return_type_ref,
                return_type,
            } => {
                f.write_str("def(")?;
                comma_separated(f, argument_types)?;
                f.write_str(") -> ")?;
                if *is_return_type_ref {
                    f.write_str("ref ")?;
                }
                write!(f, "{return_type}")
            }
            ExprKind::Templatize {
                value,
                template_arguments,
            } => {
                write!(f, "{}!(", Operand(value))?;
                comma_separated(f, template_arguments)?;
                f.write_char(')')
            }
        }
    }
}

impl fmt::Display for DictLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.key, entry.value)?;
        }
        f.write_char('}')
    }
}

impl fmt::Display for ComparisonChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Operand(&self.first))?;
        for (op, operand) in &self.rest {
            write!(f, " {} {}", op.as_symbol(), Operand(operand))?;
        }
        Ok(())
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            f.write_str("static ")?;
        }
        if self.is_wild {
            f.write_str("wild ")?;
        }
        if self.is_ref {
            f.write_str("ref ")?;
        }
        f.write_str(&self.name)?;
        if let Some(ty) = &self.optional_type {
            write!(f, ": {ty}")?;
        }
        if let Some(initializer) = &self.optional_initializer {
            write!(f, " = {initializer}")?;
        }
        Ok(())
    }
}

/// `(a, b, ...rest) -> ref T`
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        comma_separated(f, &self.arguments)?;
        if let Some(variadic) = &self.optional_variadic_argument {
            if !self.arguments.is_empty() {
                f.write_str(", ")?;
            }
            write!(f, "...{variadic}")?;
        }
        f.write_char(')')?;
        match (&self.optional_return_type, self.is_return_type_ref) {
            (Some(ty), true) => write!(f, " -> ref {ty}"),
            (Some(ty), false) => write!(f, " -> {ty}"),
            (None, true) => f.write_str(" -> ref"),
            (None, false) => Ok(()),
        }
    }
}

// ─── Statements ────────────────────────────────────────────────

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| fmt::Display::fmt(&self.kind, f))
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StmtKind::Expression(expr) => write!(f, "{expr};"),
            StmtKind::Import(import) => write!(f, "{import}"),
            StmtKind::Include(include) => write!(f, "{include}"),
            StmtKind::Function(function) => write!(f, "{function}"),
            StmtKind::Class(decl) => type_decl(f, "class", decl),
            StmtKind::Struct(decl) => type_decl(f, "struct", decl),
            StmtKind::Enum { name, members } => {
                write!(f, "enum {name} {{")?;
                if members.is_empty() {
                    return f.write_char('}');
                }
                f.write_char(' ')?;
                comma_separated(f, members)?;
                f.write_str(" }")
            }
            StmtKind::Alias {
                is_incase,
                name,
                expression,
            } => {
                if *is_incase {
                    f.write_str("incase ")?;
                }
                write!(f, "alias {name} {expression};")
            }
            StmtKind::IfBranch(branch) => write!(f, "{branch}"),
            StmtKind::WhileLoop { condition, content } => {
                write!(f, "while {condition} {}", Block(content))
            }
            StmtKind::DoWhileLoop { condition, content } => {
                write!(f, "do {} while {condition};", Block(content))
            }
            StmtKind::ForLoop {
                initial,
                condition,
                update,
                content,
            } => write!(f, "for {initial}, {condition}, {update} {}", Block(content)),
            StmtKind::ForEachLoop {
                iterators,
                iteratee,
                content,
            } => {
                f.write_str("for ")?;
                comma_separated(f, iterators)?;
                write!(f, " in {iteratee} {}", Block(content))
            }
            StmtKind::Break => f.write_str("break;"),
            StmtKind::Continue => f.write_str("continue;"),
            StmtKind::Return(values) => {
                if values.is_empty() {
                    return f.write_str("return;");
                }
                f.write_str("return ")?;
                comma_separated(f, values)?;
                f.write_char(';')
            }
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import ")?;
        dotted_path(f, &self.path, self.relative)?;
        if let Some(alias) = &self.optional_alias {
            write!(f, " as {alias}")?;
        }
        f.write_char(';')
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("include ")?;
        dotted_path(f, &self.path, self.relative)?;
        f.write_char(';')
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_incase {
            f.write_str("incase ")?;
        }
        if self.is_static {
            f.write_str("static ")?;
        }
        write!(
            f,
            "def {}{} {}",
            self.name_point,
            self.signature,
            Block(&self.content)
        )
    }
}

fn type_decl(f: &mut fmt::Formatter<'_>, keyword: &str, decl: &TypeDecl) -> fmt::Result {
    if decl.is_incase {
        f.write_str("incase ")?;
    }
    write!(f, "{keyword} {}", decl.name)?;
    if !decl.template_arguments.is_empty() {
        f.write_str("!(")?;
        comma_separated(f, &decl.template_arguments)?;
        f.write_char(')')?;
    }
    if let Some(base) = &decl.optional_base_type {
        write!(f, "({base})")?;
    }
    write!(f, " {}", Block(&decl.content))
}

impl fmt::Display for IfBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, branch) in self.branches().iter().enumerate() {
            let keyword = if i == 0 { "if" } else { " elif" };
            write!(f, "{keyword} {} {}", branch.condition, Block(&branch.content))?;
        }
        if let Some(content) = &self.else_content {
            write!(f, " else {}", Block(content))?;
        }
        Ok(())
    }
}
