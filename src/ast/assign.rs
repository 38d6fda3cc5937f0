use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign<T> {
    pub id: Token,
    pub expression: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl Assign<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Assign<()> {
        assert_eq!(pair.as_rule(), Rule::assign);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());
        let expression = Expression::from_pair(inner.next().unwrap());

        Assign {
            id,
            expression: Box::new(expression),
            position,
            info: (),
        }
    }
}
