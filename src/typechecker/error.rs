use std::{error::Error, fmt::Display};

use serde::Serialize;

use crate::ast::Position;

/// Classification of everything the semantic passes can complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    TypeRedeclared,
    TypeUnknown,
    InheritanceRule,
    AttrRedeclared,
    MethodRedeclared,
    MethodArity,
    IncompatibleTypes,
    InvalidOperands,
    NameUnknown,
    SelfAssignment,
    InvalidParamType,
    MissingEntryPoint,
}

#[derive(Debug, Clone, Serialize)]
pub struct SemanticError {
    pub kind: ErrorKind,
    pub message: String,
    pub position: Position,
}

impl SemanticError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: Position) -> SemanticError {
        SemanticError {
            kind,
            message: message.into(),
            position,
        }
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, column) = self.position;
        write!(f, "Ln {}, Col {}: {}", line, column, self.message)
    }
}

impl Error for SemanticError {}
