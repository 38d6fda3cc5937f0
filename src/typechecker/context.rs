use std::{
    collections::HashMap,
    fmt::Display,
    ops::{Index, IndexMut},
};

use super::scope::VariableInfo;
use super::types::{Attribute, Method, Type, TypeId};

pub const SELF_TYPE: &str = "SELF_TYPE";
pub const AUTO_TYPE: &str = "AUTO_TYPE";
const ERROR_TYPE: &str = "<error>";
const VOID_TYPE: &str = "<void>";

/// The type table. Entry point for all type resolution; owns every [`Type`]
/// and hands out [`TypeId`] handles.
///
/// The sentinels `SELF_TYPE`, `AUTO_TYPE`, `<error>` and `<void>` are interned
/// once per context, so comparisons against them are identity comparisons on
/// their ids.
#[derive(Debug, Clone)]
pub struct Context {
    types: Vec<Type>,
    names: HashMap<String, TypeId>,
    self_type: TypeId,
    auto_type: TypeId,
    error_type: TypeId,
    void_type: TypeId,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    pub fn new() -> Context {
        let mut context = Context {
            types: vec![],
            names: HashMap::new(),
            self_type: TypeId(0),
            auto_type: TypeId(0),
            error_type: TypeId(0),
            void_type: TypeId(0),
        };

        context.self_type = context.insert(SELF_TYPE, true);
        context.auto_type = context.insert(AUTO_TYPE, true);
        context.error_type = context.insert(ERROR_TYPE, true);
        context.void_type = context.insert(VOID_TYPE, true);

        context
    }

    fn insert(&mut self, name: &str, sealed: bool) -> TypeId {
        let id = TypeId(self.types.len());

        self.types.push(Type {
            name: name.to_owned(),
            parent: None,
            attributes: vec![],
            methods: vec![],
            sealed,
        });
        self.names.insert(name.to_owned(), id);

        id
    }

    pub fn create_type(&mut self, name: &str) -> Result<TypeId, String> {
        if self.names.contains_key(name) {
            return Err(format!(
                "Type with the same name ({name}) already in context."
            ));
        }

        Ok(self.insert(name, false))
    }

    pub fn get_type(&self, name: &str) -> Result<TypeId, String> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| format!("Type \"{name}\" is not defined."))
    }

    pub fn types(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, ty)| (TypeId(index), ty))
    }

    pub fn self_type(&self) -> TypeId {
        self.self_type
    }

    pub fn auto_type(&self) -> TypeId {
        self.auto_type
    }

    pub fn error_type(&self) -> TypeId {
        self.error_type
    }

    pub fn void_type(&self) -> TypeId {
        self.void_type
    }

    pub fn is_auto(&self, ty: TypeId) -> bool {
        ty == self.auto_type
    }

    pub fn is_error(&self, ty: TypeId) -> bool {
        ty == self.error_type
    }

    pub fn is_self_type(&self, ty: TypeId) -> bool {
        ty == self.self_type
    }

    /// Conformance and operand checks involving these types short-circuit to
    /// success, so one faulty expression does not flood later passes.
    fn bypass(&self, ty: TypeId) -> bool {
        ty == self.self_type || ty == self.auto_type || ty == self.error_type
    }

    pub fn set_parent(&mut self, child: TypeId, parent: TypeId) -> Result<(), String> {
        if self[child].parent.is_some() {
            return Err(format!("Parent type is already set for {}.", self[child].name));
        }
        if self[parent].sealed {
            return Err(format!(
                "Parent type \"{}\" is sealed. Can't inherit from it.",
                self[parent].name
            ));
        }

        self.types[child.0].parent = Some(parent);
        Ok(())
    }

    /// The subtype relation. `SELF_TYPE` conforms to nothing, `AUTO_TYPE` and
    /// `<error>` conform to everything, `<void>` only to itself; everything on
    /// the right-hand side that bypasses accepts anything.
    pub fn conforms_to(&self, ty: TypeId, other: TypeId) -> bool {
        if ty == self.auto_type || ty == self.error_type {
            return true;
        }
        if ty == self.self_type {
            return false;
        }
        if ty == self.void_type {
            return other == self.void_type;
        }
        if self.bypass(other) {
            return true;
        }

        let mut current = Some(ty);
        while let Some(id) = current {
            if id == other {
                return true;
            }
            current = self[id].parent;
        }

        false
    }

    /// Least upper bound in the inheritance lattice. `AUTO_TYPE` and `<error>`
    /// absorb; the sentinels without a place in the lattice collapse to
    /// `<error>`.
    pub fn type_union(&self, left: TypeId, right: TypeId) -> TypeId {
        if left == self.auto_type || left == self.error_type {
            return left;
        }
        if right == self.auto_type || right == self.error_type {
            return right;
        }
        if left == right {
            return left;
        }
        if left == self.self_type
            || right == self.self_type
            || left == self.void_type
            || right == self.void_type
        {
            return self.error_type;
        }

        let left_chain = self.ancestors(left);
        let right_chain = self.ancestors(right);

        let mut union = None;
        for (a, b) in left_chain.iter().rev().zip(right_chain.iter().rev()) {
            if a == b {
                union = Some(*a);
            } else {
                break;
            }
        }

        union.unwrap_or(self.error_type)
    }

    /// The chain from `ty` up to its root, `ty` first.
    fn ancestors(&self, ty: TypeId) -> Vec<TypeId> {
        let mut chain = vec![ty];
        while let Some(parent) = self[*chain.last().expect("chain starts non-empty")].parent {
            chain.push(parent);
        }
        chain
    }

    /// Search an attribute locally, then through the parent chain.
    pub fn get_attribute(&self, ty: TypeId, name: &str) -> Result<&Attribute, String> {
        let mut current = Some(ty);
        while let Some(id) = current {
            if let Some(attribute) = self[id].attributes.iter().find(|a| a.name == name) {
                return Ok(attribute);
            }
            current = self[id].parent;
        }

        Err(format!(
            "Attribute \"{name}\" is not defined in {}.",
            self[ty].name
        ))
    }

    pub fn define_attribute(
        &mut self,
        ty: TypeId,
        name: &str,
        attr_type: TypeId,
    ) -> Result<(), String> {
        if self.get_attribute(ty, name).is_ok() {
            return Err(format!(
                "Attribute \"{name}\" is already defined in {}.",
                self[ty].name
            ));
        }

        self.types[ty.0].attributes.push(Attribute {
            name: name.to_owned(),
            ty: attr_type,
        });
        Ok(())
    }

    /// Locate a method locally, then through the parent chain; methods
    /// inherited from the parent are always visible on the child.
    pub fn lookup_method(&self, ty: TypeId, name: &str) -> Result<(TypeId, usize), String> {
        let mut current = Some(ty);
        while let Some(id) = current {
            if let Some(index) = self[id].methods.iter().position(|m| m.name == name) {
                return Ok((id, index));
            }
            current = self[id].parent;
        }

        Err(format!(
            "Method \"{name}\" is not defined in {}.",
            self[ty].name
        ))
    }

    pub fn get_method(&self, ty: TypeId, name: &str) -> Result<&Method, String> {
        let (owner, index) = self.lookup_method(ty, name)?;
        Ok(&self[owner].methods[index])
    }

    pub fn method(&self, owner: TypeId, index: usize) -> &Method {
        &self[owner].methods[index]
    }

    pub fn define_method(
        &mut self,
        ty: TypeId,
        name: &str,
        param_names: Vec<String>,
        param_types: Vec<TypeId>,
        return_type: TypeId,
    ) -> Result<(), String> {
        if self[ty].methods.iter().any(|m| m.name == name) {
            return Err(format!(
                "Method \"{name}\" already defined in {}.",
                self[ty].name
            ));
        }

        let auto = self.auto_type;
        let param_infos = param_names
            .iter()
            .zip(&param_types)
            .map(|(param, &ty)| VariableInfo::new(param.clone(), ty, ty != auto))
            .collect();
        let return_info = VariableInfo::new(name, return_type, return_type != auto);

        self.types[ty.0].methods.push(Method {
            name: name.to_owned(),
            param_names,
            param_types,
            param_infos,
            return_type,
            return_info,
        });
        Ok(())
    }

    /// Feed a call-site argument type into the parameter's inference slot.
    pub fn constrain_method_param(
        &mut self,
        owner: TypeId,
        method: usize,
        param: usize,
        lower: TypeId,
    ) {
        let auto = self.auto_type;
        let error = self.error_type;

        let info = &mut self.types[owner.0].methods[method].param_infos[param];
        if !info.inferred && lower != auto && lower != error {
            info.lower_types.push(lower);
        }
    }

    /// Feed the body type of a pass into the return's inference slot.
    pub fn constrain_method_return(&mut self, owner: TypeId, method: usize, lower: TypeId) {
        let auto = self.auto_type;
        let error = self.error_type;

        let info = &mut self.types[owner.0].methods[method].return_info;
        if !info.inferred && lower != auto && lower != error {
            info.lower_types.push(lower);
        }
    }

    pub fn take_param_constraints(
        &mut self,
        owner: TypeId,
        method: usize,
        param: usize,
    ) -> (Vec<TypeId>, Vec<TypeId>) {
        self.types[owner.0].methods[method].param_infos[param].take_constraints()
    }

    /// Write an inferred parameter type through to the method signature.
    pub fn close_method_param(&mut self, owner: TypeId, method: usize, param: usize, ty: TypeId) {
        let method = &mut self.types[owner.0].methods[method];
        method.param_types[param] = ty;
        method.param_infos[param].close(ty);
    }

    /// Solve the return slot of a method. Returns the inferred type iff the
    /// slot was closed right now; the signature is updated in place.
    pub fn solve_method_return(&mut self, owner: TypeId, method: usize) -> Option<TypeId> {
        let mut info = self.types[owner.0].methods[method].return_info.clone();
        let closed = info.infer_type(self);
        let ty = info.ty;

        let slot = &mut self.types[owner.0].methods[method];
        if closed {
            slot.return_type = ty;
        }
        slot.return_info = info;

        closed.then_some(ty)
    }

    /// Number of method parameter/return slots that still wait for inference.
    pub fn open_slots(&self) -> usize {
        self.types
            .iter()
            .flat_map(|ty| ty.methods.iter())
            .map(|method| {
                method.param_infos.iter().filter(|v| !v.inferred).count()
                    + usize::from(!method.return_info.inferred)
            })
            .sum()
    }
}

impl Index<TypeId> for Context {
    type Output = Type;

    fn index(&self, id: TypeId) -> &Type {
        &self.types[id.0]
    }
}

impl IndexMut<TypeId> for Context {
    fn index_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.types[id.0]
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ty in &self.types {
            if ty.name.starts_with('<') {
                continue;
            }

            write!(f, "type {}", ty.name)?;
            if let Some(parent) = ty.parent {
                write!(f, " : {}", self[parent].name)?;
            }
            writeln!(f, " {{")?;

            for attribute in &ty.attributes {
                writeln!(f, "\t[attrib] {}: {};", attribute.name, self[attribute.ty].name)?;
            }
            for method in &ty.methods {
                let params = method
                    .param_names
                    .iter()
                    .zip(&method.param_types)
                    .map(|(name, &ty)| format!("{}: {}", name, self[ty].name))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(
                    f,
                    "\t[method] {}({}): {};",
                    method.name, params, self[method.return_type].name
                )?;
            }

            writeln!(f, "}}")?;
        }

        Ok(())
    }
}
