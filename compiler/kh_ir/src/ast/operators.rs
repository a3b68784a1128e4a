//! Unary, binary and comparison operators.
//!
//! Comparison operators are kept apart from [`BinaryOp`] because comparisons
//! chain (`a < b <= c`) and live in their own expression node.

use crate::Operator;

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Positive,
    Negative,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Not,
    BitNot,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
            Self::PreIncrement | Self::PostIncrement => "++",
            Self::PreDecrement | Self::PostDecrement => "--",
            Self::Not => "not",
            Self::BitNot => "~",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::PreIncrement => "pre_increment",
            Self::PreDecrement => "pre_decrement",
            Self::PostIncrement => "post_increment",
            Self::PostDecrement => "post_decrement",
            Self::Not => "not",
            Self::BitNot => "bit_not",
        }
    }

    /// Written after the operand.
    pub const fn is_postfix(self) -> bool {
        matches!(self, Self::PostIncrement | Self::PostDecrement)
    }

    /// Prefix reading of a token operator.
    pub const fn from_prefix(op: Operator) -> Option<Self> {
        Some(match op {
            Operator::Add => Self::Positive,
            Operator::Sub => Self::Negative,
            Operator::Increment => Self::PreIncrement,
            Operator::Decrement => Self::PreDecrement,
            Operator::Not => Self::Not,
            Operator::BitNot => Self::BitNot,
            _ => return None,
        })
    }

    /// Postfix reading of a token operator.
    pub const fn from_postfix(op: Operator) -> Option<Self> {
        match op {
            Operator::Increment => Some(Self::PostIncrement),
            Operator::Decrement => Some(Self::PostDecrement),
            _ => None,
        }
    }
}

/// Binary operators, including assignment and its in-place forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Dot,

    // In-place arithmetic
    IAdd,
    ISub,
    IMul,
    IDiv,
    IMod,
    IPow,
    IDot,

    Assign,

    // Logical
    And,
    Or,
    Xor,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitLShift,
    BitRShift,

    // In-place bitwise
    IBitAnd,
    IBitOr,
    IBitXor,
    IBitLShift,
    IBitRShift,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Dot => "@",
            Self::IAdd => "+=",
            Self::ISub => "-=",
            Self::IMul => "*=",
            Self::IDiv => "/=",
            Self::IMod => "%=",
            Self::IPow => "^=",
            Self::IDot => "@=",
            Self::Assign => "=",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "~",
            Self::BitLShift => "<<",
            Self::BitRShift => ">>",
            Self::IBitAnd => "&=",
            Self::IBitOr => "|=",
            Self::IBitXor => "~=",
            Self::IBitLShift => "<<=",
            Self::IBitRShift => ">>=",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::Dot => "dot",
            Self::IAdd => "iadd",
            Self::ISub => "isub",
            Self::IMul => "imul",
            Self::IDiv => "idiv",
            Self::IMod => "imod",
            Self::IPow => "ipow",
            Self::IDot => "idot",
            Self::Assign => "assign",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::BitAnd => "bit_and",
            Self::BitOr => "bit_or",
            Self::BitXor => "bit_xor",
            Self::BitLShift => "bit_lshift",
            Self::BitRShift => "bit_rshift",
            Self::IBitAnd => "ibit_and",
            Self::IBitOr => "ibit_or",
            Self::IBitXor => "ibit_xor",
            Self::IBitLShift => "ibit_lshift",
            Self::IBitRShift => "ibit_rshift",
        }
    }

    /// Plain or in-place assignment.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Self::Assign
                | Self::IAdd
                | Self::ISub
                | Self::IMul
                | Self::IDiv
                | Self::IMod
                | Self::IPow
                | Self::IDot
                | Self::IBitAnd
                | Self::IBitOr
                | Self::IBitXor
                | Self::IBitLShift
                | Self::IBitRShift
        )
    }

    /// Binary reading of a token operator. `~` reads as bitwise xor here.
    pub const fn from_operator(op: Operator) -> Option<Self> {
        Some(match op {
            Operator::Add => Self::Add,
            Operator::Sub => Self::Sub,
            Operator::Mul => Self::Mul,
            Operator::Div => Self::Div,
            Operator::Mod => Self::Mod,
            Operator::Pow => Self::Pow,
            Operator::Dot => Self::Dot,
            Operator::IAdd => Self::IAdd,
            Operator::ISub => Self::ISub,
            Operator::IMul => Self::IMul,
            Operator::IDiv => Self::IDiv,
            Operator::IMod => Self::IMod,
            Operator::IPow => Self::IPow,
            Operator::IDot => Self::IDot,
            Operator::Assign => Self::Assign,
            Operator::And => Self::And,
            Operator::Or => Self::Or,
            Operator::Xor => Self::Xor,
            Operator::BitAnd => Self::BitAnd,
            Operator::BitOr => Self::BitOr,
            Operator::BitNot => Self::BitXor,
            Operator::BitLShift => Self::BitLShift,
            Operator::BitRShift => Self::BitRShift,
            Operator::IBitAnd => Self::IBitAnd,
            Operator::IBitOr => Self::IBitOr,
            Operator::IBitXor => Self::IBitXor,
            Operator::IBitLShift => Self::IBitLShift,
            Operator::IBitRShift => Self::IBitRShift,
            Operator::Increment
            | Operator::Decrement
            | Operator::Equal
            | Operator::NotEqual
            | Operator::Less
            | Operator::More
            | Operator::ELess
            | Operator::EMore
            | Operator::Not => return None,
        })
    }
}

/// Comparison operators, the links of a comparison chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Less,
    More,
    ELess,
    EMore,
}

impl ComparisonOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::More => ">",
            Self::ELess => "<=",
            Self::EMore => ">=",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::Less => "less",
            Self::More => "more",
            Self::ELess => "eless",
            Self::EMore => "emore",
        }
    }

    pub const fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Equal => Some(Self::Equal),
            Operator::NotEqual => Some(Self::NotEqual),
            Operator::Less => Some(Self::Less),
            Operator::More => Some(Self::More),
            Operator::ELess => Some(Self::ELess),
            Operator::EMore => Some(Self::EMore),
            _ => None,
        }
    }
}
