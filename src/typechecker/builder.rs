use log::debug;

use crate::ast::{Ast, AttrDeclaration, ClassDeclaration, Feature, FuncDeclaration};

use super::context::Context;
use super::error::{ErrorKind, SemanticError};
use super::types::TypeId;

/// Second pass: wire the inheritance graph and define every attribute and
/// method signature in the context. Also installs the built-in method
/// signatures on `Object`, `IO` and `String`.
pub struct TypeBuilder<'a> {
    context: &'a mut Context,
    errors: &'a mut Vec<SemanticError>,
    current_type: TypeId,
    object_type: TypeId,
}

impl<'a> TypeBuilder<'a> {
    pub fn new(context: &'a mut Context, errors: &'a mut Vec<SemanticError>) -> TypeBuilder<'a> {
        let object_type = context
            .get_type("Object")
            .expect("Object is registered by the collector");
        let io_type = context
            .get_type("IO")
            .expect("IO is registered by the collector");
        let int_type = context
            .get_type("Int")
            .expect("Int is registered by the collector");
        let string_type = context
            .get_type("String")
            .expect("String is registered by the collector");
        let bool_type = context
            .get_type("Bool")
            .expect("Bool is registered by the collector");

        let mut builder = TypeBuilder {
            context,
            errors,
            current_type: object_type,
            object_type,
        };

        for builtin in [io_type, int_type, string_type, bool_type] {
            builder
                .context
                .set_parent(builtin, object_type)
                .expect("built-in types start without a parent");
        }
        for sealed in [int_type, string_type, bool_type] {
            builder.context[sealed].sealed = true;
        }

        let self_type = builder.context.self_type();
        builder.define_builtin(object_type, "abort", &[], object_type);
        builder.define_builtin(object_type, "type_name", &[], string_type);
        builder.define_builtin(object_type, "copy", &[], self_type);

        builder.define_builtin(io_type, "out_string", &[("x", string_type)], self_type);
        builder.define_builtin(io_type, "out_int", &[("x", int_type)], self_type);
        builder.define_builtin(io_type, "in_string", &[], string_type);
        builder.define_builtin(io_type, "in_int", &[], int_type);

        builder.define_builtin(string_type, "length", &[], int_type);
        builder.define_builtin(string_type, "concat", &[("s", string_type)], string_type);
        builder.define_builtin(
            string_type,
            "substr",
            &[("i", int_type), ("l", int_type)],
            string_type,
        );

        builder
    }

    fn define_builtin(&mut self, ty: TypeId, name: &str, params: &[(&str, TypeId)], ret: TypeId) {
        let names = params.iter().map(|(name, _)| (*name).to_owned()).collect();
        let types = params.iter().map(|(_, ty)| *ty).collect();

        self.context
            .define_method(ty, name, names, types, ret)
            .expect("built-in methods are defined exactly once");
    }

    pub fn build(&mut self, ast: &Ast<()>) {
        for declaration in ast.nodes() {
            self.build_class(declaration);
        }

        self.check_cycles(ast);

        let entry_point = self
            .context
            .get_type("Main")
            .and_then(|main| self.context.lookup_method(main, "main"));
        if entry_point.is_err() {
            self.errors.push(SemanticError::new(
                ErrorKind::MissingEntryPoint,
                "The class \"Main\" and its method \"main\" are needed.",
                (0, 0),
            ));
        }

        debug!("built {} types", self.context.types().count());
    }

    fn build_class(&mut self, node: &ClassDeclaration<()>) {
        let Ok(current) = self.context.get_type(&node.id.lexeme) else {
            return;
        };
        self.current_type = current;

        match &node.parent {
            Some(parent) => match self.context.get_type(&parent.lexeme) {
                Ok(parent_type) => {
                    if let Err(message) = self.context.set_parent(current, parent_type) {
                        self.errors.push(SemanticError::new(
                            ErrorKind::InheritanceRule,
                            message,
                            parent.position,
                        ));
                        self.fall_back_to_object(current);
                    }
                }
                Err(message) => {
                    self.errors.push(SemanticError::new(
                        ErrorKind::InheritanceRule,
                        message,
                        parent.position,
                    ));
                    self.fall_back_to_object(current);
                }
            },
            None => {
                if let Err(message) = self.context.set_parent(current, self.object_type) {
                    self.errors.push(SemanticError::new(
                        ErrorKind::InheritanceRule,
                        message,
                        node.position,
                    ));
                }
            }
        }

        for feature in &node.features {
            match feature {
                Feature::Attr(attr) => self.build_attribute(attr),
                Feature::Func(func) => self.build_method(func),
            }
        }
    }

    /// Keep the class rooted so downstream passes are not blinded by one bad
    /// `inherits` clause.
    fn fall_back_to_object(&mut self, current: TypeId) {
        if self.context[current].parent.is_none() {
            let _ = self.context.set_parent(current, self.object_type);
        }
    }

    fn build_attribute(&mut self, node: &AttrDeclaration<()>) {
        let attr_type = match self.context.get_type(&node.type_annotation.lexeme) {
            Ok(ty) => ty,
            Err(message) => {
                self.errors.push(SemanticError::new(
                    ErrorKind::TypeUnknown,
                    message,
                    node.type_annotation.position,
                ));
                self.context.error_type()
            }
        };

        if let Err(message) = self
            .context
            .define_attribute(self.current_type, &node.id.lexeme, attr_type)
        {
            self.errors.push(SemanticError::new(
                ErrorKind::AttrRedeclared,
                message,
                node.position,
            ));
        }
    }

    fn build_method(&mut self, node: &FuncDeclaration<()>) {
        let mut param_names = vec![];
        let mut param_types = vec![];

        for param in &node.params {
            let param_type = match self.context.get_type(&param.type_annotation.lexeme) {
                Ok(ty) if self.context.is_self_type(ty) => {
                    self.errors.push(SemanticError::new(
                        ErrorKind::InvalidParamType,
                        "Type \"SELF_TYPE\" cannot be used as parameter type.",
                        param.type_annotation.position,
                    ));
                    self.context.error_type()
                }
                Ok(ty) => ty,
                Err(message) => {
                    self.errors.push(SemanticError::new(
                        ErrorKind::TypeUnknown,
                        message,
                        param.type_annotation.position,
                    ));
                    self.context.error_type()
                }
            };

            param_names.push(param.id.lexeme.clone());
            param_types.push(param_type);
        }

        let return_type = match self.context.get_type(&node.return_type.lexeme) {
            Ok(ty) => ty,
            Err(message) => {
                self.errors.push(SemanticError::new(
                    ErrorKind::TypeUnknown,
                    message,
                    node.return_type.position,
                ));
                self.context.error_type()
            }
        };

        if let Err(message) = self.context.define_method(
            self.current_type,
            &node.id.lexeme,
            param_names,
            param_types,
            return_type,
        ) {
            self.errors.push(SemanticError::new(
                ErrorKind::MethodRedeclared,
                message,
                node.position,
            ));
        }
    }

    /// The parent links are wired declaration by declaration, so a cycle only
    /// becomes visible once all classes are processed. Break each cycle by
    /// re-pointing its first member (in registration order) at `Object`.
    fn check_cycles(&mut self, ast: &Ast<()>) {
        let ids: Vec<TypeId> = self.context.types().map(|(id, _)| id).collect();
        let count = ids.len();

        for id in ids {
            let mut current = self.context[id].parent;
            let mut steps = 0;
            let mut cyclic = false;

            while let Some(next) = current {
                if next == id {
                    cyclic = true;
                    break;
                }
                steps += 1;
                if steps > count {
                    break;
                }
                current = self.context[next].parent;
            }

            if cyclic {
                let name = self.context[id].name.clone();
                let position = ast
                    .nodes()
                    .iter()
                    .find(|declaration| declaration.id.lexeme == name)
                    .map(|declaration| declaration.position)
                    .unwrap_or((0, 0));

                self.errors.push(SemanticError::new(
                    ErrorKind::InheritanceRule,
                    format!("Class \"{name}\" is part of an inheritance cycle."),
                    position,
                ));
                self.context[id].parent = Some(self.object_type);
            }
        }
    }
}
