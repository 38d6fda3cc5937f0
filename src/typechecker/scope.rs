use super::context::Context;
use super::types::TypeId;

/// Handle of a single scope frame within a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

/// Everything known about a single variable: its current type, whether that
/// type is settled, and the bounds collected for it while it is still open.
#[derive(Debug, Clone)]
pub struct VariableInfo {
    pub name: String,
    pub ty: TypeId,
    pub inferred: bool,
    pub(crate) upper_types: Vec<TypeId>,
    pub(crate) lower_types: Vec<TypeId>,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>, ty: TypeId, inferred: bool) -> VariableInfo {
        VariableInfo {
            name: name.into(),
            ty,
            inferred,
            upper_types: vec![],
            lower_types: vec![],
        }
    }

    /// Record that the variable is used where a value of `ty` is required.
    /// `AUTO_TYPE` and `<error>` hints carry no information and are dropped.
    pub fn set_upper_type(&mut self, ty: TypeId, context: &Context) {
        if !self.inferred && !context.is_auto(ty) && !context.is_error(ty) {
            self.upper_types.push(ty);
        }
    }

    /// Record that the variable is assigned from an expression of `ty`.
    pub fn set_lower_type(&mut self, ty: TypeId, context: &Context) {
        if !self.inferred && !context.is_auto(ty) && !context.is_error(ty) {
            self.lower_types.push(ty);
        }
    }

    /// Solve the accumulated constraints. The upper bounds are reduced to the
    /// most specific type consistent with all of them, the lower bounds are
    /// folded through `type_union`; the lower bound wins when both exist and
    /// conform. Returns true iff the variable became inferred right now.
    pub fn infer_type(&mut self, context: &Context) -> bool {
        if self.inferred {
            return false;
        }

        let mut upper: Option<TypeId> = None;
        for &ty in &self.upper_types {
            match upper {
                None => upper = Some(ty),
                Some(current) => {
                    if context.conforms_to(ty, current) {
                        upper = Some(ty);
                    } else if !context.conforms_to(current, ty) {
                        upper = Some(context.error_type());
                        break;
                    }
                }
            }
        }

        let mut lower: Option<TypeId> = None;
        for &ty in &self.lower_types {
            lower = Some(match lower {
                None => ty,
                Some(current) => context.type_union(current, ty),
            });
        }

        self.upper_types.clear();
        self.lower_types.clear();

        let solved = match (lower, upper) {
            (Some(lower), Some(upper)) => {
                if context.conforms_to(lower, upper) {
                    lower
                } else {
                    context.error_type()
                }
            }
            (Some(lower), None) => lower,
            (None, Some(upper)) => upper,
            (None, None) => context.auto_type(),
        };

        if context.is_auto(solved) || context.is_error(solved) {
            self.ty = context.auto_type();
            return false;
        }

        self.ty = solved;
        self.inferred = true;
        true
    }

    /// Mark the variable as settled at `ty` and drop any pending bounds.
    pub fn close(&mut self, ty: TypeId) {
        self.ty = ty;
        self.inferred = true;
        self.upper_types.clear();
        self.lower_types.clear();
    }

    pub fn take_constraints(&mut self) -> (Vec<TypeId>, Vec<TypeId>) {
        (
            std::mem::take(&mut self.upper_types),
            std::mem::take(&mut self.lower_types),
        )
    }

    pub fn absorb(&mut self, (upper, lower): (Vec<TypeId>, Vec<TypeId>)) {
        if !self.inferred {
            self.upper_types.extend(upper);
            self.lower_types.extend(lower);
        }
    }
}

/// A single frame of the scope tree.
#[derive(Debug, Clone)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    /// The parent's locals count at creation time. Lookups through the parent
    /// only see locals declared before this frame was created.
    pub index: usize,
    locals: Vec<VariableInfo>,
    children: Vec<ScopeId>,
}

/// Arena of scope frames. The tree's shape mirrors the AST fragments visited
/// by the checker, which is what allows the inferer to walk both in lockstep.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub fn new() -> ScopeTree {
        ScopeTree {
            scopes: vec![Scope {
                parent: None,
                index: 0,
                locals: vec![],
                children: vec![],
            }],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn create_child(&mut self, parent: ScopeId) -> ScopeId {
        let index = self.scopes[parent.0].locals.len();
        let child = ScopeId(self.scopes.len());

        self.scopes.push(Scope {
            parent: Some(parent),
            index,
            locals: vec![],
            children: vec![],
        });
        self.scopes[parent.0].children.push(child);

        child
    }

    pub fn define_variable(
        &mut self,
        scope: ScopeId,
        name: &str,
        ty: TypeId,
        context: &Context,
    ) -> usize {
        let locals = &mut self.scopes[scope.0].locals;
        locals.push(VariableInfo::new(name, ty, !context.is_auto(ty)));
        locals.len() - 1
    }

    /// Look a name up lexically. A frame only exposes the parent's locals
    /// declared before the frame was created (the `index` window).
    pub fn find_variable(&self, scope: ScopeId, name: &str) -> Option<(ScopeId, usize)> {
        self.find_variable_upto(scope, name, None)
    }

    fn find_variable_upto(
        &self,
        scope: ScopeId,
        name: &str,
        limit: Option<usize>,
    ) -> Option<(ScopeId, usize)> {
        let frame = &self.scopes[scope.0];
        let visible = limit.unwrap_or(frame.locals.len());

        if let Some(index) = frame.locals[..visible].iter().position(|v| v.name == name) {
            return Some((scope, index));
        }

        frame
            .parent
            .and_then(|parent| self.find_variable_upto(parent, name, Some(frame.index)))
    }

    pub fn is_defined(&self, scope: ScopeId, name: &str) -> bool {
        self.find_variable(scope, name).is_some()
    }

    pub fn is_local(&self, scope: ScopeId, name: &str) -> bool {
        self.scopes[scope.0].locals.iter().any(|v| v.name == name)
    }

    pub fn locals(&self, scope: ScopeId) -> &[VariableInfo] {
        &self.scopes[scope.0].locals
    }

    pub fn local(&self, scope: ScopeId, index: usize) -> &VariableInfo {
        &self.scopes[scope.0].locals[index]
    }

    pub fn local_mut(&mut self, scope: ScopeId, index: usize) -> &mut VariableInfo {
        &mut self.scopes[scope.0].locals[index]
    }

    pub fn children(&self, scope: ScopeId) -> &[ScopeId] {
        &self.scopes[scope.0].children
    }

    pub fn child(&self, scope: ScopeId, index: usize) -> ScopeId {
        self.scopes[scope.0].children[index]
    }

    /// Number of variables that still wait for inference.
    pub fn open_variables(&self) -> usize {
        self.scopes
            .iter()
            .flat_map(|scope| scope.locals.iter())
            .filter(|v| !v.inferred)
            .count()
    }
}
