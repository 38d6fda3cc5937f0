use pest::iterators::Pair;

use super::{Feature, Position, Rule, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration<T> {
    pub id: Token,
    pub parent: Option<Token>,
    pub features: Vec<Feature<T>>,
    pub position: Position,
}

impl ClassDeclaration<()> {
    pub fn from_pair(pair: Pair<Rule>) -> ClassDeclaration<()> {
        assert_eq!(pair.as_rule(), Rule::classDecl);

        let position = pair.line_col();

        let mut inner = pair.into_inner();
        let id = Token::from_pair(inner.next().unwrap());

        let mut parent = None;
        let mut features = vec![];

        for pair in inner {
            match pair.as_rule() {
                Rule::typeId => parent = Some(Token::from_pair(pair)),
                Rule::feature => features.push(Feature::from_pair(pair)),
                _ => unreachable!(),
            }
        }

        ClassDeclaration {
            id,
            parent,
            features,
            position,
        }
    }
}
