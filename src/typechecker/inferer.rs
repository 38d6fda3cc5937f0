use log::debug;

use crate::ast::{
    Assign, Ast, AttrDeclaration, Binary, BinaryOp, Block, CaseOf, ClassDeclaration, Expression,
    Feature, FuncDeclaration, FunctionCall, Ident, IfThenElse, LetIn, MemberCall, New, Unary,
    UnaryOp, WhileLoop,
};

use super::context::Context;
use super::info::TypeInfo;
use super::scope::{ScopeId, ScopeTree};
use super::types::TypeId;

/// Fourth pass: close the open `AUTO_TYPE` holes.
///
/// One call to [`TypeInferer::infer`] is one pass. The traversal mirrors the
/// checker's shape, carries an expected type down into children, accumulates
/// upper and lower bounds on every open [`VariableInfo`](super::VariableInfo)
/// it touches, and solves them at class, method and `let` boundaries. The
/// driver repeats passes until one reports no change.
pub struct TypeInferer<'a> {
    context: &'a mut Context,
    scope: &'a mut ScopeTree,
    inferences: &'a mut Vec<String>,
    current_type: TypeId,
    current_method: Option<(TypeId, usize)>,
    changed: bool,
    self_type: TypeId,
    auto_type: TypeId,
    error_type: TypeId,
    object_type: TypeId,
    int_type: TypeId,
    string_type: TypeId,
    bool_type: TypeId,
}

impl<'a> TypeInferer<'a> {
    pub fn new(
        context: &'a mut Context,
        scope: &'a mut ScopeTree,
        inferences: &'a mut Vec<String>,
    ) -> TypeInferer<'a> {
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
        let self_type = context.self_type();
        let auto_type = context.auto_type();
        let error_type = context.error_type();

        TypeInferer {
            current_type: object_type,
            current_method: None,
            changed: false,
            context,
            scope,
            inferences,
            self_type,
            auto_type,
            error_type,
            object_type,
            int_type,
            string_type,
            bool_type,
        }
    }

    /// Run one pass over the whole program. Returns whether the pass closed
    /// any variable, i.e., whether another pass could learn more.
    pub fn infer(&mut self, ast: &mut Ast<TypeInfo>) -> bool {
        self.changed = false;

        let root = self.scope.root();
        let children = self.scope.children(root).to_vec();
        for (declaration, scope) in ast.nodes_mut().iter_mut().zip(children) {
            self.infer_class(declaration, scope);
        }

        debug!("inference pass finished, changed: {}", self.changed);

        self.changed
    }

    fn type_name(&self, ty: TypeId) -> String {
        self.context[ty].name.clone()
    }

    fn infer_class(&mut self, node: &mut ClassDeclaration<TypeInfo>, scope: ScopeId) {
        self.current_type = self
            .context
            .get_type(&node.id.lexeme)
            .unwrap_or(self.error_type);

        // attributes first, then methods, matching the scope layout the
        // checker produced
        let children = self.scope.children(scope).to_vec();
        let mut cursor = 0;

        for feature in node.features.iter_mut() {
            if let Feature::Attr(attr) = feature {
                self.current_method = None;
                self.infer_attribute(attr, children[cursor], scope);
                cursor += 1;
            }
        }
        for feature in node.features.iter_mut() {
            if let Feature::Func(func) = feature {
                self.infer_method(func, children[cursor]);
                cursor += 1;
            }
        }

        // class boundary: solve the still-open attribute slots
        let attr_count = self.context[self.current_type].attributes.len();
        for index in 0..attr_count {
            let name = self.context[self.current_type].attributes[index].name.clone();
            let Some(local_index) = self
                .scope
                .locals(scope)
                .iter()
                .position(|local| local.name == name)
            else {
                continue;
            };

            if self.scope.local_mut(scope, local_index).infer_type(self.context) {
                let ty = self.scope.local(scope, local_index).ty;
                self.context[self.current_type].attributes[index].ty = ty;
                self.changed = true;
                self.inferences.push(format!(
                    "Inferred type \"{}\" for attribute \"{}\" of class \"{}\".",
                    self.type_name(ty),
                    name,
                    self.type_name(self.current_type)
                ));
            }
        }
    }

    fn infer_attribute(
        &mut self,
        node: &mut AttrDeclaration<TypeInfo>,
        scope: ScopeId,
        class_scope: ScopeId,
    ) {
        let Some(expression) = node.expression.as_mut() else {
            return;
        };

        let child = self.scope.child(scope, 0);

        // the attribute's slot lives in the class scope
        let local_index = self
            .scope
            .locals(class_scope)
            .iter()
            .position(|local| local.name == node.id.lexeme);

        let expected = local_index.and_then(|index| {
            let local = self.scope.local(class_scope, index);
            local.inferred.then_some(local.ty)
        });

        self.infer_expression(expression, child, expected);

        if let Some(index) = local_index {
            let expression_type = expression.info().static_type;
            self.scope
                .local_mut(class_scope, index)
                .set_lower_type(expression_type, self.context);
        }
    }

    fn infer_method(&mut self, node: &mut FuncDeclaration<TypeInfo>, scope: ScopeId) {
        let handle = self
            .context
            .lookup_method(self.current_type, &node.id.lexeme)
            .ok()
            .filter(|(owner, _)| *owner == self.current_type);
        self.current_method = handle;

        let expected = handle.map(|(owner, index)| {
            let return_type = self.context.method(owner, index).return_type;
            if return_type == self.self_type {
                self.current_type
            } else {
                return_type
            }
        });

        let child = self.scope.child(scope, 0);
        self.infer_expression(&mut node.body, child, expected);

        let Some((owner, index)) = handle else {
            return;
        };

        // method boundary: solve the parameters, merging the bounds the call
        // sites collected on the method's own slots
        let param_count = self.context.method(owner, index).param_types.len();
        for param in 0..param_count {
            let local_index = 1 + param;
            if local_index >= self.scope.locals(scope).len() {
                break;
            }
            if self.scope.local(scope, local_index).inferred {
                continue;
            }

            let constraints = self.context.take_param_constraints(owner, index, param);
            self.scope.local_mut(scope, local_index).absorb(constraints);

            if self.scope.local_mut(scope, local_index).infer_type(self.context) {
                let ty = self.scope.local(scope, local_index).ty;
                self.context.close_method_param(owner, index, param, ty);
                self.changed = true;
                self.inferences.push(format!(
                    "Inferred type \"{}\" for parameter \"{}\" of method \"{}\" in class \"{}\".",
                    self.type_name(ty),
                    self.context.method(owner, index).param_names[param],
                    node.id.lexeme,
                    self.type_name(self.current_type)
                ));
            }
        }

        // and the return slot, fed by the body's result types of this pass;
        // branch results flow in one by one so a single still-open branch
        // does not absorb the others
        let mut result_types = vec![];
        Self::collect_result_types(&node.body, &mut result_types);
        for ty in result_types {
            self.context.constrain_method_return(owner, index, ty);
        }
        if let Some(ty) = self.context.solve_method_return(owner, index) {
            self.changed = true;
            self.inferences.push(format!(
                "Inferred type \"{}\" for the return of method \"{}\" in class \"{}\".",
                self.type_name(ty),
                node.id.lexeme,
                self.type_name(self.current_type)
            ));
        }
    }

    /// The types an expression can produce, one entry per result position:
    /// `if` and `case` contribute every branch, blocks their last expression,
    /// `let` its body, everything else its own static type.
    fn collect_result_types(expression: &Expression<TypeInfo>, out: &mut Vec<TypeId>) {
        match expression {
            Expression::IfThenElse(node) => {
                Self::collect_result_types(&node.if_body, out);
                Self::collect_result_types(&node.else_body, out);
            }
            Expression::CaseOf(node) => {
                for branch in &node.branches {
                    Self::collect_result_types(&branch.expression, out);
                }
            }
            Expression::Block(node) => {
                if let Some(last) = node.expressions.last() {
                    Self::collect_result_types(last, out);
                }
            }
            Expression::LetIn(node) => Self::collect_result_types(&node.in_body, out),
            _ => out.push(expression.info().static_type),
        }
    }

    fn infer_expression(
        &mut self,
        expression: &mut Expression<TypeInfo>,
        scope: ScopeId,
        expected: Option<TypeId>,
    ) {
        match expression {
            Expression::IfThenElse(node) => self.infer_if(node, scope),
            Expression::WhileLoop(node) => self.infer_while(node, scope),
            Expression::Block(node) => self.infer_block(node, scope, expected),
            Expression::LetIn(node) => self.infer_let(node, scope, expected),
            Expression::CaseOf(node) => self.infer_case(node, scope),
            Expression::Assign(node) => self.infer_assign(node, scope),
            Expression::FunctionCall(node) => self.infer_function_call(node, scope),
            Expression::MemberCall(node) => self.infer_member_call(node, scope),
            Expression::New(node) => self.infer_new(node),
            Expression::Unary(node) => self.infer_unary(node, scope),
            Expression::Binary(node) => self.infer_binary(node, scope),
            Expression::Ident(node) => self.infer_ident(node, scope, expected),
            Expression::Integer(node) => node.info.static_type = self.int_type,
            Expression::Str(node) => node.info.static_type = self.string_type,
            Expression::Boolean(node) => node.info.static_type = self.bool_type,
        }
    }

    fn resolve_self_type(&self, ty: TypeId) -> TypeId {
        if ty == self.self_type {
            self.current_type
        } else {
            ty
        }
    }

    fn infer_if(&mut self, node: &mut IfThenElse<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        self.infer_expression(&mut node.condition, children[0], Some(self.bool_type));
        self.infer_expression(&mut node.if_body, children[1], None);
        self.infer_expression(&mut node.else_body, children[2], None);

        let if_type = self.resolve_self_type(node.if_body.info().static_type);
        let else_type = self.resolve_self_type(node.else_body.info().static_type);
        node.info.static_type = self.context.type_union(if_type, else_type);
    }

    fn infer_while(&mut self, node: &mut WhileLoop<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        self.infer_expression(&mut node.condition, children[0], Some(self.bool_type));
        self.infer_expression(&mut node.body, children[1], None);

        node.info.static_type = self.object_type;
    }

    fn infer_block(&mut self, node: &mut Block<TypeInfo>, scope: ScopeId, expected: Option<TypeId>) {
        let children = self.scope.children(scope).to_vec();

        let last = node.expressions.len() - 1;
        for (index, (expression, child)) in
            node.expressions.iter_mut().zip(children).enumerate()
        {
            let expected = if index == last { expected } else { None };
            self.infer_expression(expression, child, expected);
        }

        node.info.static_type = node.expressions[last].info().static_type;
    }

    fn infer_let(&mut self, node: &mut LetIn<TypeInfo>, scope: ScopeId, expected: Option<TypeId>) {
        let children = self.scope.children(scope).to_vec();

        for (index, binding) in node.bindings.iter_mut().enumerate() {
            let Some(expression) = binding.expression.as_mut() else {
                continue;
            };

            let local = self.scope.local(scope, index);
            let binding_expected = local.inferred.then_some(local.ty);
            self.infer_expression(expression, children[index], binding_expected);

            let expression_type = expression.info().static_type;
            self.scope
                .local_mut(scope, index)
                .set_lower_type(expression_type, self.context);
        }

        let last = children.len() - 1;
        self.infer_expression(&mut node.in_body, children[last], expected);

        // let boundary: solve the bindings; the refinement stays on the
        // variable itself
        for index in 0..node.bindings.len() {
            if self.scope.local_mut(scope, index).infer_type(self.context) {
                let local = self.scope.local(scope, index);
                let ty = local.ty;
                let name = local.name.clone();
                self.changed = true;
                self.inferences.push(match self.current_method {
                    Some((owner, method)) => format!(
                        "Inferred type \"{}\" for variable \"{}\" in method \"{}\" of class \"{}\".",
                        self.type_name(ty),
                        name,
                        self.context.method(owner, method).name,
                        self.type_name(self.current_type)
                    ),
                    None => format!(
                        "Inferred type \"{}\" for variable \"{}\" in class \"{}\".",
                        self.type_name(ty),
                        name,
                        self.type_name(self.current_type)
                    ),
                });
            }
        }

        node.info.static_type = node.in_body.info().static_type;
    }

    fn infer_case(&mut self, node: &mut CaseOf<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        self.infer_expression(&mut node.expression, children[0], None);

        let mut static_type = None;
        for (branch, &child) in node.branches.iter_mut().zip(&children[1..]) {
            self.infer_expression(&mut branch.expression, child, None);

            let branch_type = self.resolve_self_type(branch.expression.info().static_type);
            static_type = Some(match static_type {
                None => branch_type,
                Some(current) => self.context.type_union(current, branch_type),
            });
        }

        node.info.static_type = static_type.unwrap_or(self.error_type);
    }

    fn infer_assign(&mut self, node: &mut Assign<TypeInfo>, scope: ScopeId) {
        let variable = self.scope.find_variable(scope, &node.id.lexeme);

        let expected = variable.and_then(|(frame, index)| {
            let local = self.scope.local(frame, index);
            local.inferred.then_some(local.ty)
        });

        let child = self.scope.child(scope, 0);
        self.infer_expression(&mut node.expression, child, expected);

        let expression_type = node.expression.info().static_type;
        if let Some((frame, index)) = variable {
            self.scope
                .local_mut(frame, index)
                .set_lower_type(expression_type, self.context);
        }

        node.info.static_type = expression_type;
    }

    fn infer_function_call(&mut self, node: &mut FunctionCall<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        let cast = node.dispatch_type.as_ref().map(|token| {
            match self.context.get_type(&token.lexeme) {
                Ok(ty) if ty == self.self_type || ty == self.auto_type => self.error_type,
                Ok(ty) => ty,
                Err(_) => self.error_type,
            }
        });

        self.infer_expression(&mut node.obj, children[0], cast);
        let obj_type = node.obj.info().static_type;

        let lookup = cast.unwrap_or(obj_type);
        node.info.static_type =
            self.infer_dispatch(lookup, &node.id.lexeme, &mut node.args, &children[1..]);
    }

    fn infer_member_call(&mut self, node: &mut MemberCall<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        node.info.static_type =
            self.infer_dispatch(self.current_type, &node.id.lexeme, &mut node.args, &children);
    }

    /// Re-resolve a dispatch against the (possibly refined) lookup type,
    /// hint every argument with the parameter type where it is known, and
    /// feed the argument types back into the open parameter slots.
    fn infer_dispatch(
        &mut self,
        lookup: TypeId,
        name: &str,
        args: &mut [Expression<TypeInfo>],
        children: &[ScopeId],
    ) -> TypeId {
        let signature = self
            .context
            .lookup_method(lookup, name)
            .ok()
            .map(|(owner, index)| {
                let method = self.context.method(owner, index);
                let params = method
                    .param_infos
                    .iter()
                    .map(|info| (info.ty, info.inferred))
                    .collect::<Vec<_>>();
                (owner, index, params, method.return_type)
            });

        let Some((owner, index, params, return_type)) = signature else {
            for (arg, &child) in args.iter_mut().zip(children) {
                self.infer_expression(arg, child, None);
            }
            return self.error_type;
        };

        if params.len() == args.len() {
            for (param, (arg, &child)) in args.iter_mut().zip(children).enumerate() {
                let (ty, inferred) = params[param];
                let expected = inferred.then_some(ty);
                self.infer_expression(arg, child, expected);
                self.context
                    .constrain_method_param(owner, index, param, arg.info().static_type);
            }
        } else {
            for (arg, &child) in args.iter_mut().zip(children) {
                self.infer_expression(arg, child, None);
            }
        }

        if return_type == self.self_type {
            lookup
        } else {
            return_type
        }
    }

    fn infer_new(&mut self, node: &mut New<TypeInfo>) {
        node.info.static_type = self
            .context
            .get_type(&node.type_annotation.lexeme)
            .unwrap_or(self.error_type);
    }

    fn infer_unary(&mut self, node: &mut Unary<TypeInfo>, scope: ScopeId) {
        let child = self.scope.child(scope, 0);

        let (hint, static_type) = match node.op {
            UnaryOp::IsVoid => (None, self.bool_type),
            UnaryOp::Complement => (Some(self.int_type), self.int_type),
            UnaryOp::Not => (Some(self.bool_type), self.bool_type),
        };

        self.infer_expression(&mut node.expression, child, hint);
        node.info.static_type = static_type;
    }

    fn infer_binary(&mut self, node: &mut Binary<TypeInfo>, scope: ScopeId) {
        let children = self.scope.children(scope).to_vec();

        let (left_hint, right_hint, static_type) = match node.op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                (Some(self.int_type), Some(self.int_type), self.int_type)
            }
            BinaryOp::Less | BinaryOp::LessEqual => {
                (Some(self.int_type), Some(self.int_type), self.bool_type)
            }
            BinaryOp::Equal => {
                // each side is hinted with what the other side is known to be
                (Some(node.right.info().static_type), None, self.bool_type)
            }
        };

        self.infer_expression(&mut node.left, children[0], left_hint);

        let right_hint = match node.op {
            BinaryOp::Equal => Some(node.left.info().static_type),
            _ => right_hint,
        };
        self.infer_expression(&mut node.right, children[1], right_hint);

        node.info.static_type = static_type;
    }

    fn infer_ident(&mut self, node: &mut Ident<TypeInfo>, scope: ScopeId, expected: Option<TypeId>) {
        node.info.static_type = match self.scope.find_variable(scope, &node.value) {
            Some((frame, index)) => {
                if let Some(expected) = expected {
                    if expected != self.self_type {
                        self.scope
                            .local_mut(frame, index)
                            .set_upper_type(expected, self.context);
                    }
                }

                let local = self.scope.local(frame, index);
                if local.inferred {
                    local.ty
                } else {
                    self.auto_type
                }
            }
            None => self.error_type,
        };
    }
}
