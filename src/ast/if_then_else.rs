use pest::iterators::Pair;

use super::{Expression, Position, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfThenElse<T> {
    pub condition: Box<Expression<T>>,
    pub if_body: Box<Expression<T>>,
    pub else_body: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl IfThenElse<()> {
    pub fn from_pair(pair: Pair<Rule>) -> IfThenElse<()> {
        assert_eq!(pair.as_rule(), Rule::ifExpr);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let condition = Expression::from_pair(inner.next().unwrap());
        let if_body = Expression::from_pair(inner.next().unwrap());
        let else_body = Expression::from_pair(inner.next().unwrap());

        IfThenElse {
            condition: Box::new(condition),
            if_body: Box::new(if_body),
            else_body: Box::new(else_body),
            position,
            info: (),
        }
    }
}
