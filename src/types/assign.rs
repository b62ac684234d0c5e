//! Implicit assignment legality
//!
//! Any mix of arithmetic and pointer operands is accepted here; stricter
//! pointer compatibility belongs to the expression checker. Struct pairs are
//! delegated to [`TypeArena::compatible_struct`].

use crate::types::arena::TypeArena;
use crate::types::errors::Result;
use crate::types::ty::{SourceLocation, TypeId};

impl TypeArena {
    /// Whether a value of type `from` may be implicitly assigned to `to`
    pub fn is_assignable(&self, to: TypeId, from: TypeId, location: SourceLocation) -> Result<bool> {
        if self.is_scalar(to) && self.is_scalar(from) {
            return Ok(true);
        }
        self.compatible_struct(to, from, location)
    }

    #[inline]
    fn is_scalar(&self, t: TypeId) -> bool {
        self.is_arithmetic(t) || self.is_pointer(t)
    }
}
