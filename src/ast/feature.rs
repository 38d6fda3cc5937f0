use pest::iterators::Pair;

use super::{Expression, Position, Rule, Token};

/// A single feature of a class, i.e., an attribute or a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature<T> {
    Attr(AttrDeclaration<T>),
    Func(FuncDeclaration<T>),
}

impl Feature<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Feature<()> {
        assert_eq!(pair.as_rule(), Rule::feature);

        let inner = pair.into_inner().next().unwrap();

        match inner.as_rule() {
            Rule::attrDecl => Feature::Attr(AttrDeclaration::from_pair(inner)),
            Rule::funcDecl => Feature::Func(FuncDeclaration::from_pair(inner)),
            _ => unreachable!(),
        }
    }
}

impl<T> Feature<T> {
    pub fn position(&self) -> Position {
        match self {
            Feature::Attr(attr) => attr.position,
            Feature::Func(func) => func.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrDeclaration<T> {
    pub id: Token,
    pub type_annotation: Token,
    pub expression: Option<Expression<T>>,
    pub position: Position,
}

impl AttrDeclaration<()> {
    pub fn from_pair(pair: Pair<Rule>) -> AttrDeclaration<()> {
        assert_eq!(pair.as_rule(), Rule::attrDecl);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());
        let type_annotation = Token::from_pair(inner.next().unwrap());
        let expression = inner.next().map(Expression::from_pair);

        AttrDeclaration {
            id,
            type_annotation,
            expression,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDeclaration<T> {
    pub id: Token,
    pub params: Vec<Param>,
    pub return_type: Token,
    pub body: Expression<T>,
    pub position: Position,
}

impl FuncDeclaration<()> {
    pub fn from_pair(pair: Pair<Rule>) -> FuncDeclaration<()> {
        assert_eq!(pair.as_rule(), Rule::funcDecl);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());

        let mut params = vec![];
        let mut return_type = None;
        let mut body = None;

        for pair in inner {
            match pair.as_rule() {
                Rule::paramList => {
                    for param in pair.into_inner() {
                        params.push(Param::from_pair(param));
                    }
                }
                Rule::typeId => return_type = Some(Token::from_pair(pair)),
                Rule::expr => body = Some(Expression::from_pair(pair)),
                _ => unreachable!(),
            }
        }

        FuncDeclaration {
            id,
            params,
            return_type: return_type.unwrap(),
            body: body.unwrap(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub id: Token,
    pub type_annotation: Token,
    pub position: Position,
}

impl Param {
    pub fn from_pair(pair: Pair<Rule>) -> Param {
        assert_eq!(pair.as_rule(), Rule::param);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());
        let type_annotation = Token::from_pair(inner.next().unwrap());

        Param {
            id,
            type_annotation,
            position,
        }
    }
}
