use pest::iterators::Pair;

use super::{Expression, Position, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T> {
    pub expressions: Vec<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl Block<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Block<()> {
        assert_eq!(pair.as_rule(), Rule::blockExpr);

        let position = pair.line_col();

        let expressions = pair.into_inner().map(Expression::from_pair).collect();

        Block {
            expressions,
            position,
            info: (),
        }
    }
}
