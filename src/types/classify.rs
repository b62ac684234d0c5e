//! Type classification predicates
//!
//! Constant-time, side-effect free questions about a single type node. The
//! comparator, the rank engine and the assignability check are all phrased in
//! terms of these.
//!
//! Enums count as integers.

use crate::types::arena::TypeArena;
use crate::types::ty::{PrimKind, Type, TypeId};

impl TypeArena {
    pub fn is_void(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Void)
    }

    pub fn is_floating_type(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Prim(p) if p.kind.is_floating())
    }

    pub fn is_integer_type(&self, t: TypeId) -> bool {
        match self.get(t) {
            Type::Enum => true,
            Type::Prim(p) => p.kind.is_integer(),
            _ => false,
        }
    }

    pub fn is_arithmetic(&self, t: TypeId) -> bool {
        self.is_floating_type(t) || self.is_integer_type(t)
    }

    pub fn is_pointer(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Pointer { .. })
    }

    /// Pointer to `char` of either signedness
    pub fn is_char_pointer(&self, t: TypeId) -> bool {
        match self.get(t) {
            Type::Pointer { pointee } => {
                matches!(self.get(*pointee), Type::Prim(p) if p.kind == PrimKind::Char)
            }
            _ => false,
        }
    }

    pub fn is_function(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Function(_))
    }

    pub fn is_function_pointer(&self, t: TypeId) -> bool {
        match self.get(t) {
            Type::Pointer { pointee } => self.is_function(*pointee),
            _ => false,
        }
    }

    /// True for structs and unions alike
    pub fn is_struct(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Struct(_))
    }

    pub fn is_array(&self, t: TypeId) -> bool {
        matches!(self.get(t), Type::Array { .. })
    }
}
