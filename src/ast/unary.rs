use std::fmt::Display;

use pest::iterators::Pair;

use super::{Expression, Position, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    IsVoid,
    Complement,
    Not,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            UnaryOp::IsVoid => "isvoid",
            UnaryOp::Complement => "~",
            UnaryOp::Not => "not",
        };
        f.write_str(op)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unary<T> {
    pub op: UnaryOp,
    pub expression: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl Unary<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Expression<()> {
        assert_eq!(pair.as_rule(), Rule::unary);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let first = inner.next().unwrap();

        match first.as_rule() {
            Rule::unaryOp => {
                let op = match first.as_str() {
                    "isvoid" => UnaryOp::IsVoid,
                    "~" => UnaryOp::Complement,
                    op => unreachable!("invalid unary operator '{op}'"),
                };

                Expression::Unary(Unary {
                    op,
                    expression: Box::new(Expression::from_pair(inner.next().unwrap())),
                    position,
                    info: (),
                })
            }
            _ => Expression::from_pair(first),
        }
    }

    /// A `not` level either wraps another `not` level or falls through to a
    /// comparison.
    pub fn from_not_pair(pair: Pair<Rule>) -> Expression<()> {
        assert_eq!(pair.as_rule(), Rule::notExpr);

        let position = pair.line_col();

        let inner = pair.into_inner().next().unwrap();

        if inner.as_rule() == Rule::notExpr {
            Expression::Unary(Unary {
                op: UnaryOp::Not,
                expression: Box::new(Expression::from_pair(inner)),
                position,
                info: (),
            })
        } else {
            Expression::from_pair(inner)
        }
    }
}
