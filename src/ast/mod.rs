//! Module for parsing COOL programs.
//!
//! It contains all structs for the internal representation of COOL (i.e., the AST).
mod assign;
mod binary;
mod block;
mod boolean;
mod case_of;
mod class_declaration;
mod expression;
mod feature;
mod function_call;
mod ident;
mod if_then_else;
mod integer;
mod let_in;
mod member_call;
mod new_expr;
mod parser;
mod str;
mod unary;
mod while_loop;

pub use self::assign::*;
pub use self::binary::*;
pub use self::block::*;
pub use self::boolean::*;
pub use self::case_of::*;
pub use self::class_declaration::*;
pub use self::expression::*;
pub use self::feature::*;
pub use self::function_call::*;
pub use self::ident::*;
pub use self::if_then_else::*;
pub use self::integer::*;
pub use self::let_in::*;
pub use self::member_call::*;
pub use self::new_expr::*;
pub use self::parser::*;
pub use self::str::*;
pub use self::unary::*;
pub use self::while_loop::*;

use pest::iterators::{Pair, Pairs};

/// A position within a source file (i.e., line and column).
pub type Position = (usize, usize);

/// A single token of the source, carrying its lexeme and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn from_pair(pair: Pair<Rule>) -> Token {
        Token {
            lexeme: pair.as_str().to_owned(),
            position: pair.line_col(),
        }
    }
}

/// AST, representing a single COOL program.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Ast<T> {
    /// Class declarations within this AST.
    nodes: Vec<ClassDeclaration<T>>,
}

impl Ast<()> {
    /// Create a new AST from the pairs of a parsed program.
    /// Note: This AST is not type-correct by default.
    pub fn from_program(mut program: Pairs<Rule>) -> Ast<()> {
        let mut nodes = vec![];

        let program = program
            .next()
            .expect("parsed program should contain a root pair");

        for declaration in program.into_inner() {
            if declaration.as_rule() != Rule::EOI {
                nodes.push(ClassDeclaration::from_pair(declaration));
            }
        }

        Self { nodes }
    }
}

impl<T> Ast<T> {
    pub fn from_nodes(nodes: Vec<ClassDeclaration<T>>) -> Ast<T> {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ClassDeclaration<T>] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [ClassDeclaration<T>] {
        &mut self.nodes
    }
}
