use log::error;
use pest::iterators::Pair;

use super::{
    Assign, Binary, Block, Boolean, CaseOf, FunctionCall, Ident, IfThenElse, Integer, LetIn,
    MemberCall, New, Position, Rule, Str, Unary, WhileLoop,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression<T> {
    IfThenElse(IfThenElse<T>),
    WhileLoop(WhileLoop<T>),
    Block(Block<T>),
    LetIn(LetIn<T>),
    CaseOf(CaseOf<T>),
    Assign(Assign<T>),
    FunctionCall(FunctionCall<T>),
    MemberCall(MemberCall<T>),
    New(New<T>),
    Unary(Unary<T>),
    Binary(Binary<T>),
    Integer(Integer<T>),
    Str(Str<T>),
    Boolean(Boolean<T>),
    Ident(Ident<T>),
}

impl Expression<()> {
    pub fn from_pair(pair: Pair<Rule>) -> Expression<()> {
        match pair.as_rule() {
            Rule::expr | Rule::atom | Rule::parenExpr => {
                Expression::from_pair(pair.into_inner().next().unwrap())
            }
            Rule::letExpr => Expression::LetIn(LetIn::from_pair(pair)),
            Rule::assign => Expression::Assign(Assign::from_pair(pair)),
            Rule::notExpr => Unary::from_not_pair(pair),
            Rule::comparison | Rule::arith | Rule::term => Binary::from_pair(pair),
            Rule::unary => Unary::from_pair(pair),
            Rule::dispatch => FunctionCall::from_pair(pair),
            Rule::ifExpr => Expression::IfThenElse(IfThenElse::from_pair(pair)),
            Rule::whileExpr => Expression::WhileLoop(WhileLoop::from_pair(pair)),
            Rule::blockExpr => Expression::Block(Block::from_pair(pair)),
            Rule::caseExpr => Expression::CaseOf(CaseOf::from_pair(pair)),
            Rule::newExpr => Expression::New(New::from_pair(pair)),
            Rule::memberCall => Expression::MemberCall(MemberCall::from_pair(pair)),
            Rule::objectId => Expression::Ident(Ident::from_pair(pair)),
            Rule::integer => Expression::Integer(Integer::from_pair(pair)),
            Rule::string => Expression::Str(Str::from_pair(pair)),
            Rule::boolLit => Expression::Boolean(Boolean::from_pair(pair)),
            _ => {
                error!(
                    "Unexpected expression '{}' at {}:{}",
                    pair.as_str(),
                    pair.line_col().0,
                    pair.line_col().1
                );
                std::process::exit(-1)
            }
        }
    }
}

impl<T> Expression<T> {
    pub fn position(&self) -> Position {
        match self {
            Expression::IfThenElse(IfThenElse { position, .. })
            | Expression::WhileLoop(WhileLoop { position, .. })
            | Expression::Block(Block { position, .. })
            | Expression::LetIn(LetIn { position, .. })
            | Expression::CaseOf(CaseOf { position, .. })
            | Expression::Assign(Assign { position, .. })
            | Expression::FunctionCall(FunctionCall { position, .. })
            | Expression::MemberCall(MemberCall { position, .. })
            | Expression::New(New { position, .. })
            | Expression::Unary(Unary { position, .. })
            | Expression::Binary(Binary { position, .. })
            | Expression::Integer(Integer { position, .. })
            | Expression::Str(Str { position, .. })
            | Expression::Boolean(Boolean { position, .. })
            | Expression::Ident(Ident { position, .. }) => *position,
        }
    }

    pub fn info(&self) -> &T {
        match self {
            Expression::IfThenElse(IfThenElse { info, .. })
            | Expression::WhileLoop(WhileLoop { info, .. })
            | Expression::Block(Block { info, .. })
            | Expression::LetIn(LetIn { info, .. })
            | Expression::CaseOf(CaseOf { info, .. })
            | Expression::Assign(Assign { info, .. })
            | Expression::FunctionCall(FunctionCall { info, .. })
            | Expression::MemberCall(MemberCall { info, .. })
            | Expression::New(New { info, .. })
            | Expression::Unary(Unary { info, .. })
            | Expression::Binary(Binary { info, .. })
            | Expression::Integer(Integer { info, .. })
            | Expression::Str(Str { info, .. })
            | Expression::Boolean(Boolean { info, .. })
            | Expression::Ident(Ident { info, .. }) => info,
        }
    }

    pub fn info_mut(&mut self) -> &mut T {
        match self {
            Expression::IfThenElse(IfThenElse { info, .. })
            | Expression::WhileLoop(WhileLoop { info, .. })
            | Expression::Block(Block { info, .. })
            | Expression::LetIn(LetIn { info, .. })
            | Expression::CaseOf(CaseOf { info, .. })
            | Expression::Assign(Assign { info, .. })
            | Expression::FunctionCall(FunctionCall { info, .. })
            | Expression::MemberCall(MemberCall { info, .. })
            | Expression::New(New { info, .. })
            | Expression::Unary(Unary { info, .. })
            | Expression::Binary(Binary { info, .. })
            | Expression::Integer(Integer { info, .. })
            | Expression::Str(Str { info, .. })
            | Expression::Boolean(Boolean { info, .. })
            | Expression::Ident(Ident { info, .. }) => info,
        }
    }
}
