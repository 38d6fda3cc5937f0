use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

/// A dispatch on an object, i.e., `obj.f(...)` or `obj@Type.f(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall<T> {
    pub obj: Box<Expression<T>>,
    pub dispatch_type: Option<Token>,
    pub id: Token,
    pub args: Vec<Expression<T>>,
    pub position: Position,
    pub info: T,
}

impl FunctionCall<()> {
    /// Fold a dispatch level into a chain of function calls. An atom without
    /// any dispatch suffix collapses to the atom itself.
    pub fn from_pair(pair: Pair<Rule>) -> Expression<()> {
        assert_eq!(pair.as_rule(), Rule::dispatch);

        let mut inner = pair.into_inner();
        let mut expression = Expression::from_pair(inner.next().unwrap());

        for suffix in inner {
            let position = suffix.line_col();

            let mut dispatch_type = None;
            let mut id = None;
            let mut args = vec![];

            for pair in suffix.into_inner() {
                match pair.as_rule() {
                    Rule::typeId => dispatch_type = Some(Token::from_pair(pair)),
                    Rule::objectId => id = Some(Token::from_pair(pair)),
                    Rule::argList => {
                        args = pair.into_inner().map(Expression::from_pair).collect();
                    }
                    _ => unreachable!(),
                }
            }

            expression = Expression::FunctionCall(FunctionCall {
                obj: Box::new(expression),
                dispatch_type,
                id: id.unwrap(),
                args,
                position,
                info: (),
            });
        }

        expression
    }
}
