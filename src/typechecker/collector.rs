use log::debug;

use crate::ast::Ast;

use super::context::Context;
use super::error::{ErrorKind, SemanticError};

/// First pass: make every class name known before any type reference is
/// resolved. Parents, features and bodies are untouched here.
pub struct TypeCollector<'a> {
    pub context: Context,
    errors: &'a mut Vec<SemanticError>,
}

impl<'a> TypeCollector<'a> {
    pub fn new(errors: &'a mut Vec<SemanticError>) -> TypeCollector<'a> {
        let mut context = Context::new();

        for builtin in ["Object", "IO", "Int", "String", "Bool"] {
            context
                .create_type(builtin)
                .expect("a fresh context cannot already contain the built-in types");
        }

        TypeCollector { context, errors }
    }

    pub fn collect(&mut self, ast: &Ast<()>) {
        for declaration in ast.nodes() {
            if let Err(message) = self.context.create_type(&declaration.id.lexeme) {
                self.errors.push(SemanticError::new(
                    ErrorKind::TypeRedeclared,
                    message,
                    declaration.position,
                ));
            }
        }

        debug!("collected {} types", self.context.types().count());
    }
}
