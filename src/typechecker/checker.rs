use log::debug;

use crate::ast::{
    Assign, Ast, AttrDeclaration, Binary, BinaryOp, Block, Boolean, CaseBranch, CaseOf,
    ClassDeclaration, Expression, Feature, FuncDeclaration, FunctionCall, Ident, IfThenElse,
    Integer, LetBinding, LetIn, MemberCall, New, Str, Unary, UnaryOp, WhileLoop,
};

use super::context::Context;
use super::error::{ErrorKind, SemanticError};
use super::info::TypeInfo;
use super::scope::{ScopeId, ScopeTree};
use super::types::{Method, TypeId};

/// Third pass: assign a static type to every expression, build the scope tree
/// in lockstep with the traversal, and report every type-rule violation.
///
/// Each visit creates exactly one child scope per child expression it recurses
/// into, in recursion order. The inferer later indexes scopes by child
/// position, so this shape is a hard contract.
pub struct TypeChecker<'a> {
    context: &'a Context,
    errors: &'a mut Vec<SemanticError>,
    scope: ScopeTree,
    current_type: TypeId,
    object_type: TypeId,
    int_type: TypeId,
    string_type: TypeId,
    bool_type: TypeId,
}

impl<'a> TypeChecker<'a> {
    pub fn new(context: &'a Context, errors: &'a mut Vec<SemanticError>) -> TypeChecker<'a> {
        let object_type = context
            .get_type("Object")
            .expect("Object is registered by the collector");
        let int_type = context
            .get_type("Int")
            .expect("Int is registered by the collector");
        let string_type = context
            .get_type("String")
            .expect("String is registered by the collector");
        let bool_type = context
            .get_type("Bool")
            .expect("Bool is registered by the collector");

        TypeChecker {
            context,
            errors,
            scope: ScopeTree::new(),
            current_type: object_type,
            object_type,
            int_type,
            string_type,
            bool_type,
        }
    }

    pub fn check(mut self, ast: &Ast<()>) -> (Ast<TypeInfo>, ScopeTree) {
        let root = self.scope.root();

        let mut nodes = vec![];
        for declaration in ast.nodes() {
            let scope = self.scope.create_child(root);
            nodes.push(self.check_class(declaration, scope));
        }

        debug!("checked {} classes", nodes.len());

        (Ast::from_nodes(nodes), self.scope)
    }

    fn error(&mut self, kind: ErrorKind, message: String, position: (usize, usize)) {
        self.errors.push(SemanticError::new(kind, message, position));
    }

    fn type_name(&self, ty: TypeId) -> &str {
        &self.context[ty].name
    }

    /// `SELF_TYPE` stands for the current class wherever a concrete type is
    /// needed.
    fn resolve_self_type(&self, ty: TypeId) -> TypeId {
        if self.context.is_self_type(ty) {
            self.current_type
        } else {
            ty
        }
    }

    fn types_equal(&self, left: TypeId, right: TypeId) -> bool {
        left == right
            || self.context.is_auto(left)
            || self.context.is_auto(right)
            || self.context.is_error(left)
            || self.context.is_error(right)
    }

    fn signatures_match(&self, own: &Method, inherited: &Method) -> bool {
        own.param_types.len() == inherited.param_types.len()
            && own
                .param_types
                .iter()
                .zip(&inherited.param_types)
                .all(|(&a, &b)| self.types_equal(a, b))
            && self.types_equal(own.return_type, inherited.return_type)
    }

    /// Attributes are visited before any of them becomes visible, then
    /// declared as locals of the class scope in declaration order, then the
    /// methods are visited. Initializers therefore resolve neither attributes
    /// nor `self`, while method bodies see every attribute.
    fn check_class(
        &mut self,
        node: &ClassDeclaration<()>,
        scope: ScopeId,
    ) -> ClassDeclaration<TypeInfo> {
        self.current_type = self
            .context
            .get_type(&node.id.lexeme)
            .unwrap_or_else(|_| self.context.error_type());

        let mut attributes = vec![];
        for feature in &node.features {
            if let Feature::Attr(attr) = feature {
                let child = self.scope.create_child(scope);
                attributes.push(self.check_attribute(attr, child));
            }
        }

        for attribute in &attributes {
            let ty = self
                .context
                .get_attribute(self.current_type, &attribute.id.lexeme)
                .map(|attr| attr.ty)
                .unwrap_or_else(|_| self.context.error_type());
            self.scope
                .define_variable(scope, &attribute.id.lexeme, ty, self.context);
        }

        let mut methods = vec![];
        for feature in &node.features {
            if let Feature::Func(func) = feature {
                let child = self.scope.create_child(scope);
                methods.push(self.check_method(func, child));
            }
        }

        let mut attributes = attributes.into_iter();
        let mut methods = methods.into_iter();
        let features = node
            .features
            .iter()
            .map(|feature| match feature {
                Feature::Attr(_) => Feature::Attr(attributes.next().expect("one typed attribute per attribute feature")),
                Feature::Func(_) => Feature::Func(methods.next().expect("one typed method per method feature")),
            })
            .collect();

        ClassDeclaration {
            id: node.id.clone(),
            parent: node.parent.clone(),
            features,
            position: node.position,
        }
    }

    fn check_attribute(
        &mut self,
        node: &AttrDeclaration<()>,
        scope: ScopeId,
    ) -> AttrDeclaration<TypeInfo> {
        let declared = self
            .context
            .get_attribute(self.current_type, &node.id.lexeme)
            .map(|attr| attr.ty)
            .unwrap_or_else(|_| self.context.error_type());

        let expression = node.expression.as_ref().map(|expression| {
            let child = self.scope.create_child(scope);
            let expression = self.check_expression(expression, child);

            let expression_type = expression.info().static_type;
            if !self.context.conforms_to(expression_type, declared) {
                self.error(
                    ErrorKind::IncompatibleTypes,
                    format!(
                        "Cannot convert \"{}\" into \"{}\".",
                        self.type_name(expression_type),
                        self.type_name(declared)
                    ),
                    expression.position(),
                );
            }

            expression
        });

        AttrDeclaration {
            id: node.id.clone(),
            type_annotation: node.type_annotation.clone(),
            expression,
            position: node.position,
        }
    }

    fn check_method(
        &mut self,
        node: &FuncDeclaration<()>,
        scope: ScopeId,
    ) -> FuncDeclaration<TypeInfo> {
        let own = self
            .context
            .lookup_method(self.current_type, &node.id.lexeme)
            .ok()
            .filter(|(owner, _)| *owner == self.current_type);

        // an override must keep the inherited signature
        if let Some((owner, index)) = own {
            if let Some(parent) = self.context[self.current_type].parent {
                if let Ok((inherited_owner, inherited_index)) =
                    self.context.lookup_method(parent, &node.id.lexeme)
                {
                    let method = self.context.method(owner, index);
                    let inherited = self.context.method(inherited_owner, inherited_index);
                    if !self.signatures_match(method, inherited) {
                        self.error(
                            ErrorKind::MethodRedeclared,
                            format!(
                                "Method \"{}\" already defined in \"{}\" with a different signature.",
                                node.id.lexeme,
                                self.type_name(inherited_owner)
                            ),
                            node.position,
                        );
                    }
                }
            }
        }

        let signature = own.map(|(owner, index)| {
            let method = self.context.method(owner, index);
            (method.param_types.clone(), method.return_type)
        });
        let (param_types, return_type) = match signature {
            Some((params, ret)) if params.len() == node.params.len() => (params, ret),
            _ => {
                let params = node
                    .params
                    .iter()
                    .map(|param| {
                        self.context
                            .get_type(&param.type_annotation.lexeme)
                            .unwrap_or_else(|_| self.context.error_type())
                    })
                    .collect();
                let ret = self
                    .context
                    .get_type(&node.return_type.lexeme)
                    .unwrap_or_else(|_| self.context.error_type());
                (params, ret)
            }
        };

        self.scope
            .define_variable(scope, "self", self.current_type, self.context);
        for (param, &ty) in node.params.iter().zip(&param_types) {
            self.scope
                .define_variable(scope, &param.id.lexeme, ty, self.context);
        }

        let child = self.scope.create_child(scope);
        let body = self.check_expression(&node.body, child);

        let body_type = body.info().static_type;
        let expected = self.resolve_self_type(return_type);
        if !self.context.conforms_to(body_type, expected) {
            self.error(
                ErrorKind::IncompatibleTypes,
                format!(
                    "Cannot convert \"{}\" into \"{}\".",
                    self.type_name(body_type),
                    self.type_name(expected)
                ),
                body.position(),
            );
        }

        FuncDeclaration {
            id: node.id.clone(),
            params: node.params.clone(),
            return_type: node.return_type.clone(),
            body,
            position: node.position,
        }
    }

    fn check_expression(&mut self, expression: &Expression<()>, scope: ScopeId) -> Expression<TypeInfo> {
        match expression {
            Expression::IfThenElse(node) => self.check_if(node, scope),
            Expression::WhileLoop(node) => self.check_while(node, scope),
            Expression::Block(node) => self.check_block(node, scope),
            Expression::LetIn(node) => self.check_let(node, scope),
            Expression::CaseOf(node) => self.check_case(node, scope),
            Expression::Assign(node) => self.check_assign(node, scope),
            Expression::FunctionCall(node) => self.check_function_call(node, scope),
            Expression::MemberCall(node) => self.check_member_call(node, scope),
            Expression::New(node) => self.check_new(node),
            Expression::Unary(node) => self.check_unary(node, scope),
            Expression::Binary(node) => self.check_binary(node, scope),
            Expression::Ident(node) => self.check_ident(node, scope),
            Expression::Integer(Integer { value, position, .. }) => {
                Expression::Integer(Integer {
                    value: *value,
                    position: *position,
                    info: TypeInfo {
                        static_type: self.int_type,
                    },
                })
            }
            Expression::Str(Str { value, position, .. }) => Expression::Str(Str {
                value: value.clone(),
                position: *position,
                info: TypeInfo {
                    static_type: self.string_type,
                },
            }),
            Expression::Boolean(Boolean { value, position, .. }) => {
                Expression::Boolean(Boolean {
                    value: *value,
                    position: *position,
                    info: TypeInfo {
                        static_type: self.bool_type,
                    },
                })
            }
        }
    }

    fn check_condition(&mut self, condition: &Expression<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let child = self.scope.create_child(scope);
        let condition = self.check_expression(condition, child);

        let condition_type = condition.info().static_type;
        if !self.context.conforms_to(condition_type, self.bool_type) {
            self.error(
                ErrorKind::IncompatibleTypes,
                format!(
                    "Cannot convert \"{}\" into \"Bool\".",
                    self.type_name(condition_type)
                ),
                condition.position(),
            );
        }

        condition
    }

    fn check_if(&mut self, node: &IfThenElse<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let condition = self.check_condition(&node.condition, scope);

        let if_child = self.scope.create_child(scope);
        let if_body = self.check_expression(&node.if_body, if_child);
        let else_child = self.scope.create_child(scope);
        let else_body = self.check_expression(&node.else_body, else_child);

        let if_type = self.resolve_self_type(if_body.info().static_type);
        let else_type = self.resolve_self_type(else_body.info().static_type);
        let static_type = self.context.type_union(if_type, else_type);

        Expression::IfThenElse(IfThenElse {
            condition: Box::new(condition),
            if_body: Box::new(if_body),
            else_body: Box::new(else_body),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn check_while(&mut self, node: &WhileLoop<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let condition = self.check_condition(&node.condition, scope);

        let child = self.scope.create_child(scope);
        let body = self.check_expression(&node.body, child);

        Expression::WhileLoop(WhileLoop {
            condition: Box::new(condition),
            body: Box::new(body),
            position: node.position,
            info: TypeInfo {
                static_type: self.object_type,
            },
        })
    }

    fn check_block(&mut self, node: &Block<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let mut expressions = vec![];
        for expression in &node.expressions {
            let child = self.scope.create_child(scope);
            expressions.push(self.check_expression(expression, child));
        }

        let static_type = expressions
            .last()
            .map(|expression| expression.info().static_type)
            .unwrap_or_else(|| self.context.error_type());

        Expression::Block(Block {
            expressions,
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    /// Bindings are introduced left to right; every initializer is evaluated
    /// in a scope where only the previously introduced bindings are visible.
    fn check_let(&mut self, node: &LetIn<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let mut bindings = vec![];
        for binding in &node.bindings {
            let declared = match self.context.get_type(&binding.type_annotation.lexeme) {
                Ok(ty) => ty,
                Err(message) => {
                    self.error(
                        ErrorKind::TypeUnknown,
                        message,
                        binding.type_annotation.position,
                    );
                    self.context.error_type()
                }
            };

            let child = self.scope.create_child(scope);
            let expression = binding.expression.as_ref().map(|expression| {
                let expression = self.check_expression(expression, child);

                let expression_type = expression.info().static_type;
                if !self.context.conforms_to(expression_type, declared) {
                    self.error(
                        ErrorKind::IncompatibleTypes,
                        format!(
                            "Cannot convert \"{}\" into \"{}\".",
                            self.type_name(expression_type),
                            self.type_name(declared)
                        ),
                        expression.position(),
                    );
                }

                expression
            });

            self.scope
                .define_variable(scope, &binding.id.lexeme, declared, self.context);

            bindings.push(LetBinding {
                id: binding.id.clone(),
                type_annotation: binding.type_annotation.clone(),
                expression,
                position: binding.position,
            });
        }

        let child = self.scope.create_child(scope);
        let in_body = self.check_expression(&node.in_body, child);

        let static_type = in_body.info().static_type;

        Expression::LetIn(LetIn {
            bindings,
            in_body: Box::new(in_body),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn check_case(&mut self, node: &CaseOf<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let child = self.scope.create_child(scope);
        let expression = self.check_expression(&node.expression, child);

        let mut static_type = None;
        let mut branches = vec![];
        for branch in &node.branches {
            let declared = match self.context.get_type(&branch.type_annotation.lexeme) {
                Ok(ty) => ty,
                Err(message) => {
                    self.error(
                        ErrorKind::TypeUnknown,
                        message,
                        branch.type_annotation.position,
                    );
                    self.context.error_type()
                }
            };

            let child = self.scope.create_child(scope);
            self.scope
                .define_variable(child, &branch.id.lexeme, declared, self.context);
            let body = self.check_expression(&branch.expression, child);

            let branch_type = self.resolve_self_type(body.info().static_type);
            static_type = Some(match static_type {
                None => branch_type,
                Some(current) => self.context.type_union(current, branch_type),
            });

            branches.push(CaseBranch {
                id: branch.id.clone(),
                type_annotation: branch.type_annotation.clone(),
                expression: body,
                position: branch.position,
            });
        }

        Expression::CaseOf(CaseOf {
            expression: Box::new(expression),
            branches,
            position: node.position,
            info: TypeInfo {
                static_type: static_type.unwrap_or_else(|| self.context.error_type()),
            },
        })
    }

    fn check_assign(&mut self, node: &Assign<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let variable = self
            .scope
            .find_variable(scope, &node.id.lexeme)
            .map(|(scope, index)| self.scope.local(scope, index).ty);

        let child = self.scope.create_child(scope);
        let expression = self.check_expression(&node.expression, child);
        let expression_type = expression.info().static_type;

        if node.id.lexeme == "self" {
            self.error(
                ErrorKind::SelfAssignment,
                "Variable \"self\" is read-only.".to_owned(),
                node.position,
            );
        }

        match variable {
            Some(variable_type) => {
                if !self.context.conforms_to(expression_type, variable_type) {
                    self.error(
                        ErrorKind::IncompatibleTypes,
                        format!(
                            "Cannot convert \"{}\" into \"{}\".",
                            self.type_name(expression_type),
                            self.type_name(variable_type)
                        ),
                        node.position,
                    );
                }
            }
            None if node.id.lexeme != "self" => {
                self.error(
                    ErrorKind::NameUnknown,
                    format!(
                        "Variable \"{}\" is not defined in \"{}\".",
                        node.id.lexeme,
                        self.type_name(self.current_type)
                    ),
                    node.id.position,
                );
            }
            None => {}
        }

        Expression::Assign(Assign {
            id: node.id.clone(),
            expression: Box::new(expression),
            position: node.position,
            info: TypeInfo {
                static_type: expression_type,
            },
        })
    }

    fn check_function_call(
        &mut self,
        node: &FunctionCall<()>,
        scope: ScopeId,
    ) -> Expression<TypeInfo> {
        let child = self.scope.create_child(scope);
        let obj = self.check_expression(&node.obj, child);
        let obj_type = obj.info().static_type;

        let cast = node.dispatch_type.as_ref().map(|token| {
            match self.context.get_type(&token.lexeme) {
                Ok(ty) if self.context.is_self_type(ty) || self.context.is_auto(ty) => {
                    self.context.error_type()
                }
                Ok(ty) => {
                    if !self.context.conforms_to(obj_type, ty) {
                        self.error(
                            ErrorKind::IncompatibleTypes,
                            format!(
                                "Cannot convert \"{}\" into \"{}\".",
                                self.type_name(obj_type),
                                self.type_name(ty)
                            ),
                            obj.position(),
                        );
                    }
                    ty
                }
                Err(message) => {
                    self.error(ErrorKind::TypeUnknown, message, token.position);
                    self.context.error_type()
                }
            }
        });

        let lookup = cast.unwrap_or(obj_type);
        let (static_type, params) =
            self.resolve_dispatch(lookup, &node.id.lexeme, node.args.len(), node.id.position);

        let mut args = vec![];
        for (index, arg) in node.args.iter().enumerate() {
            let child = self.scope.create_child(scope);
            let arg = self.check_expression(arg, child);
            self.check_argument(&arg, index, &params);
            args.push(arg);
        }

        Expression::FunctionCall(FunctionCall {
            obj: Box::new(obj),
            dispatch_type: node.dispatch_type.clone(),
            id: node.id.clone(),
            args,
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn check_member_call(&mut self, node: &MemberCall<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let lookup = self.current_type;
        let (static_type, params) =
            self.resolve_dispatch(lookup, &node.id.lexeme, node.args.len(), node.id.position);

        let mut args = vec![];
        for (index, arg) in node.args.iter().enumerate() {
            let child = self.scope.create_child(scope);
            let arg = self.check_expression(arg, child);
            self.check_argument(&arg, index, &params);
            args.push(arg);
        }

        Expression::MemberCall(MemberCall {
            id: node.id.clone(),
            args,
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    /// Resolve a dispatch: find the method on the lookup type, report arity
    /// mismatches once, and compute the `SELF_TYPE`-resolved result type.
    /// Returns the parameter types to check the arguments against, or `None`
    /// when the arguments cannot be matched up.
    fn resolve_dispatch(
        &mut self,
        lookup: TypeId,
        name: &str,
        arg_count: usize,
        position: (usize, usize),
    ) -> (TypeId, Option<Vec<TypeId>>) {
        if self.context.is_error(lookup)
            || self.context.is_auto(lookup)
            || self.context.is_self_type(lookup)
        {
            return (self.context.error_type(), None);
        }

        match self.context.get_method(lookup, name) {
            Ok(method) => {
                let param_types = method.param_types.clone();
                let return_type = method.return_type;

                let static_type = if self.context.is_self_type(return_type) {
                    lookup
                } else {
                    return_type
                };

                if param_types.len() != arg_count {
                    self.error(
                        ErrorKind::MethodArity,
                        format!(
                            "Method \"{}\" of type \"{}\" expects {} arguments but got {}.",
                            name,
                            self.type_name(lookup),
                            param_types.len(),
                            arg_count
                        ),
                        position,
                    );
                    (static_type, None)
                } else {
                    (static_type, Some(param_types))
                }
            }
            Err(message) => {
                self.error(ErrorKind::NameUnknown, message, position);
                (self.context.error_type(), None)
            }
        }
    }

    fn check_argument(
        &mut self,
        arg: &Expression<TypeInfo>,
        index: usize,
        params: &Option<Vec<TypeId>>,
    ) {
        let Some(params) = params else {
            return;
        };

        let arg_type = arg.info().static_type;
        if !self.context.conforms_to(arg_type, params[index]) {
            self.error(
                ErrorKind::IncompatibleTypes,
                format!(
                    "Cannot convert \"{}\" into \"{}\".",
                    self.type_name(arg_type),
                    self.type_name(params[index])
                ),
                arg.position(),
            );
        }
    }

    fn check_new(&mut self, node: &New<()>) -> Expression<TypeInfo> {
        let static_type = match self.context.get_type(&node.type_annotation.lexeme) {
            Ok(ty) => ty,
            Err(message) => {
                self.error(ErrorKind::TypeUnknown, message, node.type_annotation.position);
                self.context.error_type()
            }
        };

        Expression::New(New {
            type_annotation: node.type_annotation.clone(),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn check_unary(&mut self, node: &Unary<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let child = self.scope.create_child(scope);
        let expression = self.check_expression(&node.expression, child);
        let expression_type = expression.info().static_type;

        let static_type = match node.op {
            UnaryOp::IsVoid => self.bool_type,
            UnaryOp::Complement => {
                if !self.context.conforms_to(expression_type, self.int_type) {
                    self.error(
                        ErrorKind::IncompatibleTypes,
                        format!(
                            "Cannot convert \"{}\" into \"Int\".",
                            self.type_name(expression_type)
                        ),
                        expression.position(),
                    );
                }
                self.int_type
            }
            UnaryOp::Not => {
                if !self.context.conforms_to(expression_type, self.bool_type) {
                    self.error(
                        ErrorKind::IncompatibleTypes,
                        format!(
                            "Cannot convert \"{}\" into \"Bool\".",
                            self.type_name(expression_type)
                        ),
                        expression.position(),
                    );
                }
                self.bool_type
            }
        };

        Expression::Unary(Unary {
            op: node.op,
            expression: Box::new(expression),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn check_binary(&mut self, node: &Binary<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let left_child = self.scope.create_child(scope);
        let left = self.check_expression(&node.left, left_child);
        let right_child = self.scope.create_child(scope);
        let right = self.check_expression(&node.right, right_child);

        let left_type = left.info().static_type;
        let right_type = right.info().static_type;

        let static_type = match node.op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                self.check_int_operands(left_type, right_type, node.position);
                self.int_type
            }
            BinaryOp::Less | BinaryOp::LessEqual => {
                self.check_int_operands(left_type, right_type, node.position);
                self.bool_type
            }
            BinaryOp::Equal => {
                // comparing a primitive with a non-primitive can never hold
                let skip = self.context.is_auto(left_type)
                    || self.context.is_error(left_type)
                    || self.context.is_auto(right_type)
                    || self.context.is_error(right_type);
                if !skip && self.is_primitive(left_type) != self.is_primitive(right_type) {
                    self.error(
                        ErrorKind::InvalidOperands,
                        format!(
                            "Operation is not defined between \"{}\" and \"{}\".",
                            self.type_name(left_type),
                            self.type_name(right_type)
                        ),
                        node.position,
                    );
                }
                self.bool_type
            }
        };

        Expression::Binary(Binary {
            op: node.op,
            left: Box::new(left),
            right: Box::new(right),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }

    fn is_primitive(&self, ty: TypeId) -> bool {
        self.context.conforms_to(ty, self.int_type)
            || self.context.conforms_to(ty, self.string_type)
            || self.context.conforms_to(ty, self.bool_type)
    }

    fn check_int_operands(&mut self, left: TypeId, right: TypeId, position: (usize, usize)) {
        if !self.context.conforms_to(left, self.int_type)
            || !self.context.conforms_to(right, self.int_type)
        {
            self.error(
                ErrorKind::InvalidOperands,
                format!(
                    "Operation is not defined between \"{}\" and \"{}\".",
                    self.type_name(left),
                    self.type_name(right)
                ),
                position,
            );
        }
    }

    fn check_ident(&mut self, node: &Ident<()>, scope: ScopeId) -> Expression<TypeInfo> {
        let static_type = match self.scope.find_variable(scope, &node.value) {
            Some((scope, index)) => self.scope.local(scope, index).ty,
            None => {
                self.error(
                    ErrorKind::NameUnknown,
                    format!(
                        "Variable \"{}\" is not defined in \"{}\".",
                        node.value,
                        self.type_name(self.current_type)
                    ),
                    node.position,
                );
                self.context.error_type()
            }
        };

        Expression::Ident(Ident {
            value: node.value.clone(),
            position: node.position,
            info: TypeInfo { static_type },
        })
    }
}
