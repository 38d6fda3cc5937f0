use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetBinding<T> {
    pub id: Token,
    pub type_annotation: Token,
    pub expression: Option<Expression<T>>,
    pub position: Position,
}

impl LetBinding<()> {
    pub fn from_pair(pair: Pair<Rule>) -> LetBinding<()> {
        assert_eq!(pair.as_rule(), Rule::letBinding);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());
        let type_annotation = Token::from_pair(inner.next().unwrap());
        let expression = inner.next().map(Expression::from_pair);

        LetBinding {
            id,
            type_annotation,
            expression,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetIn<T> {
    pub bindings: Vec<LetBinding<T>>,
    pub in_body: Box<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl LetIn<()> {
    pub fn from_pair(pair: Pair<Rule>) -> LetIn<()> {
        assert_eq!(pair.as_rule(), Rule::letExpr);

        let position = pair.line_col();

        let mut bindings = vec![];
        let mut in_body = None;

        for pair in pair.into_inner() {
            match pair.as_rule() {
                Rule::letBinding => bindings.push(LetBinding::from_pair(pair)),
                Rule::expr => in_body = Some(Expression::from_pair(pair)),
                _ => unreachable!(),
            }
        }

        LetIn {
            bindings,
            in_body: Box::new(in_body.unwrap()),
            position,
            info: (),
        }
    }
}
