//! Conversion rank and integer range containment
//!
//! Rank is the total order used by the usual arithmetic conversions:
//!
//! ```text
//! char < short < int = enum < long < long long < float < double < long double
//! ```

use crate::types::arena::TypeArena;
use crate::types::errors::{Result, TypeError};
use crate::types::ty::{PrimKind, Type, TypeId};

impl TypeArena {
    /// Conversion rank of a primitive or enum type
    pub fn conv_rank(&self, t: TypeId) -> Result<u8> {
        let kind = match self.get(t) {
            Type::Enum => return Ok(2),
            Type::Prim(p) => p.kind,
            _ => {
                return Err(TypeError::internal(format!(
                    "conversion rank of non-arithmetic type {}",
                    self.display(t)
                )))
            }
        };
        Ok(match kind {
            PrimKind::Char => 0,
            PrimKind::Short => 1,
            PrimKind::Int => 2,
            PrimKind::Long => 3,
            PrimKind::LongLong => 4,
            PrimKind::Float => 5,
            PrimKind::Double => 6,
            PrimKind::LongDouble => 7,
        })
    }

    /// Whether every value of integer type `r` is representable in integer type `l`
    pub fn can_represent(&self, l: TypeId, r: TypeId) -> Result<bool> {
        let (lmin, lmax) = self.int_range(l)?;
        let (rmin, rmax) = self.int_range(r)?;
        Ok(lmin <= rmin && lmax >= rmax)
    }

    /// `(min, max)` of an integer-family type on the arena's target
    pub fn int_range(&self, t: TypeId) -> Result<(i128, i128)> {
        let target = self.target();
        match self.get(t) {
            Type::Enum => Ok((
                target.min_value(PrimKind::Int, true),
                target.max_value(PrimKind::Int, true),
            )),
            Type::Prim(p) if p.kind.is_integer() => Ok((
                target.min_value(p.kind, p.signed),
                target.max_value(p.kind, p.signed),
            )),
            _ => Err(TypeError::internal(format!(
                "integer range of non-integer type {}",
                self.display(t)
            ))),
        }
    }
}
