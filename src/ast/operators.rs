use crate::errors::{AstError, AstResult};
use std::fmt;
use std::str::FromStr;

/// Binary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    LogicalAnd,
    LogicalOr,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 18] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Mod,
        BinaryOperator::Less,
        BinaryOperator::Greater,
        BinaryOperator::LessEqual,
        BinaryOperator::GreaterEqual,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::LogicalAnd,
        BinaryOperator::LogicalOr,
        BinaryOperator::BitAnd,
        BinaryOperator::BitOr,
        BinaryOperator::BitXor,
        BinaryOperator::ShiftLeft,
        BinaryOperator::ShiftRight,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }

    /// True for operators whose result is a truth value.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::Less
                | BinaryOperator::Greater
                | BinaryOperator::LessEqual
                | BinaryOperator::GreaterEqual
                | BinaryOperator::Equal
                | BinaryOperator::NotEqual
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = AstError;

    fn from_str(s: &str) -> AstResult<Self> {
        BinaryOperator::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| AstError::UnknownOperator(s.to_string()))
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = AstError;

    // Single-character token codes as a yacc-style lexer hands them over
    fn try_from(c: char) -> AstResult<Self> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// Prefix operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Plus,
    LogicalNot,
    BitNot,
    AddressOf,
    Deref,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 6] = [
        UnaryOperator::Negate,
        UnaryOperator::Plus,
        UnaryOperator::LogicalNot,
        UnaryOperator::BitNot,
        UnaryOperator::AddressOf,
        UnaryOperator::Deref,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::LogicalNot => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::AddressOf => "&",
            UnaryOperator::Deref => "*",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for UnaryOperator {
    type Err = AstError;

    fn from_str(s: &str) -> AstResult<Self> {
        UnaryOperator::ALL
            .iter()
            .copied()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| AstError::UnknownOperator(s.to_string()))
    }
}

impl TryFrom<char> for UnaryOperator {
    type Error = AstError;

    fn try_from(c: char) -> AstResult<Self> {
        let mut buf = [0u8; 4];
        c.encode_utf8(&mut buf).parse()
    }
}

/// Primitive type designators (`int`, `char`, `void`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Char,
    Void,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Char => "char",
            PrimitiveType::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for PrimitiveType {
    type Err = AstError;

    fn from_str(s: &str) -> AstResult<Self> {
        match s {
            "int" => Ok(PrimitiveType::Int),
            "char" => Ok(PrimitiveType::Char),
            "void" => Ok(PrimitiveType::Void),
            other => Err(AstError::UnknownType(other.to_string())),
        }
    }
}
