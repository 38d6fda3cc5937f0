use pest::iterators::Pair;

use super::{Position, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boolean<T> {
    pub value: bool,
    pub position: Position,
    pub info: T,
}

impl Boolean<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Boolean<()> {
        assert_eq!(pair.as_rule(), Rule::boolLit);

        Boolean {
            value: pair.as_str() == "true",
            position: pair.line_col(),
            info: (),
        }
    }
}
