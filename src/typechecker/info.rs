use super::types::TypeId;

/// Type information attached to every expression node by the checker and
/// refined by the inferer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub static_type: TypeId,
}
