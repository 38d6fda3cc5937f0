use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

/// A dispatch on `self`, i.e., `f(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCall<T> {
    pub id: Token,
    pub args: Vec<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl MemberCall<()> {
    pub fn from_pair(pair: Pair<Rule>) -> MemberCall<()> {
        assert_eq!(pair.as_rule(), Rule::memberCall);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());

        let args = match inner.next() {
            Some(args) => args.into_inner().map(Expression::from_pair).collect(),
            None => vec![],
        };

        MemberCall {
            id,
            args,
            position,
            info: (),
        }
    }
}
