use pest::iterators::Pair;

use super::{Position, Rule, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct New<T> {
    pub type_annotation: Token,
    pub position: Position,
    pub info: T,
}

impl New<()> {
    pub fn from_pair(pair: Pair<Rule>) -> New<()> {
        assert_eq!(pair.as_rule(), Rule::newExpr);

        let position = pair.line_col();

        let type_annotation = Token::from_pair(pair.into_inner().next().unwrap());

        New {
            type_annotation,
            position,
            info: (),
        }
    }
}
