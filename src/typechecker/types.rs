use super::scope::VariableInfo;

/// Handle of a type within a [`Context`](super::Context). All parent links and
/// type references go through these stable indices instead of owning pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub ty: TypeId,
}

#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub param_names: Vec<String>,
    pub param_types: Vec<TypeId>,
    /// Inference slots fed by call sites, one per parameter.
    pub param_infos: Vec<VariableInfo>,
    pub return_type: TypeId,
    /// Inference slot fed by the method body.
    pub return_info: VariableInfo,
}

#[derive(Debug, Clone)]
pub struct Type {
    pub name: String,
    pub parent: Option<TypeId>,
    /// Attributes in declaration order. The scope built for the owning class
    /// mirrors this order.
    pub attributes: Vec<Attribute>,
    /// Methods in declaration order.
    pub methods: Vec<Method>,
    /// Sealed types cannot be inherited from.
    pub sealed: bool,
}
