use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBranch<T> {
    pub id: Token,
    pub type_annotation: Token,
    pub expression: Expression<T>,
    pub position: Position,
}

impl CaseBranch<()> {
    pub fn from_pair(pair: Pair<Rule>) -> CaseBranch<()> {
        assert_eq!(pair.as_rule(), Rule::caseBranch);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());
        let type_annotation = Token::from_pair(inner.next().unwrap());
        let expression = Expression::from_pair(inner.next().unwrap());

        CaseBranch {
            id,
            type_annotation,
            expression,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOf<T> {
    pub expression: Box<Expression<T>>,
    pub branches: Vec<CaseBranch<T>>,
    pub position: Position,
    pub info: T,
}

impl CaseOf<()> {
    pub fn from_pair(pair: Pair<Rule>) -> CaseOf<()> {
        assert_eq!(pair.as_rule(), Rule::caseExpr);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let expression = Expression::from_pair(inner.next().unwrap());

        let branches = inner.map(CaseBranch::from_pair).collect();

        CaseOf {
            expression: Box::new(expression),
            branches,
            position,
            info: (),
        }
    }
}
