use std::fmt::Display;

use pest::iterators::Pair;

use super::{Expression, Position, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Less,
    LessEqual,
    Equal,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Equal => "=",
        };
        f.write_str(op)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary<T> {
    pub op: BinaryOp,
    pub left: Box<Expression<T>>,
    pub right: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl Binary<()> {
    /// Fold a comparison, additive or multiplicative level into a left
    /// associative chain of binary expressions.
    pub fn from_pair(pair: Pair<Rule>) -> Expression<()> {
        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let mut expression = Expression::from_pair(inner.next().unwrap());

        while let Some(op) = inner.next() {
            let op = match op.as_str() {
                "+" => BinaryOp::Add,
                "-" => BinaryOp::Sub,
                "*" => BinaryOp::Mul,
                "/" => BinaryOp::Div,
                "<=" => BinaryOp::LessEqual,
                "<" => BinaryOp::Less,
                "=" => BinaryOp::Equal,
                op => unreachable!("invalid binary operator '{op}'"),
            };

            let right = Expression::from_pair(inner.next().unwrap());

            expression = Expression::Binary(Binary {
                op,
                left: Box::new(expression),
                right: Box::new(right),
                position,
                info: (),
            });
        }

        expression
    }
}
