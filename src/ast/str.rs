use pest::iterators::Pair;

use super::{Position, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Str<T> {
    pub value: String,
    pub position: Position,
    pub info: T,
}

impl Str<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Str<()> {
        assert_eq!(pair.as_rule(), Rule::string);

        let position = pair.line_col();

        let quoted = pair.as_str();
        let raw = &quoted[1..quoted.len() - 1];

        Str {
            value: unescape::unescape(raw).unwrap_or_else(|| raw.to_owned()),
            position,
            info: (),
        }
    }
}
