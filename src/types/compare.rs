//! Structural type equality
//!
//! [`TypeArena::same_type`] is total and terminates on any graph the arena can
//! build. The only cycles are structs reaching themselves through a pointer
//! member, and once member comparison has started a pointer to a struct is
//! compared by node identity instead of being unfolded again.
//!
//! This makes the result depend on nesting: `same_type(X *, Y *)` compares
//! `X` and `Y` structurally and may be true, while two structs whose only
//! difference is holding `X *` versus `Y *` compare unequal.
//!
//! Known structural limitations:
//! - array equality compares dimensions only, not element types
//! - member and parameter names are ignored
//! - all enums are equal to each other

use log::debug;

use crate::types::arena::TypeArena;
use crate::types::errors::{Result, TypeError};
use crate::types::ty::{SourceLocation, Type, TypeId};

impl TypeArena {
    pub fn same_type(&self, l: TypeId, r: TypeId) -> bool {
        self.same_type_at(l, r, false)
    }

    fn same_type_at(&self, l: TypeId, r: TypeId, in_members: bool) -> bool {
        if l == r {
            return true;
        }
        match (self.get(l), self.get(r)) {
            (Type::Enum, Type::Enum) => true,
            (Type::Void, Type::Void) => true,
            (Type::Prim(lp), Type::Prim(rp)) => lp.signed == rp.signed && lp.kind == rp.kind,
            (Type::Pointer { pointee: lt }, Type::Pointer { pointee: rt }) => {
                if in_members {
                    if let (Type::Struct(ls), Type::Struct(rs)) = (self.get(*lt), self.get(*rt)) {
                        return lt == rt || (ls.incomplete && rs.incomplete);
                    }
                }
                self.same_type_at(*lt, *rt, in_members)
            }
            (Type::Function(lf), Type::Function(rf)) => {
                self.same_type_at(lf.ret, rf.ret, in_members)
                    && lf.is_vararg == rf.is_vararg
                    && lf.params.len() == rf.params.len()
                    && lf
                        .params
                        .iter()
                        .zip(&rf.params)
                        .all(|(lp, rp)| self.same_type_at(lp.ty, rp.ty, in_members))
            }
            (Type::Struct(ls), Type::Struct(rs)) => {
                if ls.incomplete || rs.incomplete {
                    return ls.incomplete == rs.incomplete;
                }
                ls.members.len() == rs.members.len()
                    && ls
                        .members
                        .iter()
                        .zip(&rs.members)
                        .all(|(lm, rm)| self.same_type_at(lm.ty, rm.ty, true))
            }
            (Type::Array { dim: ld, .. }, Type::Array { dim: rd, .. }) => ld == rd,
            _ => false,
        }
    }

    /// Cross-unit struct/union compatibility
    ///
    /// Only the identity case is decided. Any other struct pair reports
    /// [`TypeError::Unimplemented`] at `location`; pairs that are not both
    /// structs are never compatible.
    pub fn compatible_struct(
        &self,
        l: TypeId,
        r: TypeId,
        location: SourceLocation,
    ) -> Result<bool> {
        if !self.is_struct(l) || !self.is_struct(r) {
            return Ok(false);
        }
        if l == r {
            return Ok(true);
        }
        debug!(
            "compatible_struct({}, {}) at {} is not implemented",
            self.display(l),
            self.display(r),
            location
        );
        Err(TypeError::unimplemented(
            format!(
                "struct compatibility between {} and {}",
                self.display(l),
                self.display(r)
            ),
            location,
        ))
    }
}
