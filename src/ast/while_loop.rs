use pest::iterators::Pair;

use super::{Expression, Position, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileLoop<T> {
    pub condition: Box<Expression<T>>,
    pub body: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl WhileLoop<()> {
    pub fn from_pair(pair: Pair<Rule>) -> WhileLoop<()> {
        assert_eq!(pair.as_rule(), Rule::whileExpr);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let condition = Expression::from_pair(inner.next().unwrap());
        let body = Expression::from_pair(inner.next().unwrap());

        WhileLoop {
            condition: Box::new(condition),
            body: Box::new(body),
            position,
            info: (),
        }
    }
}
