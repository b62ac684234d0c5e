//! Target data model
//!
//! Byte sizes and alignments of the primitive kinds and of pointers, plus the
//! integer range queries derived from them. Every size used by struct layout
//! and every range used by [`can_represent`](super::arena::TypeArena::can_represent)
//! comes from here.
//!
//! | kind          | lp64 | ilp32   |
//! |---------------|------|---------|
//! | `char`        | 1    | 1       |
//! | `short`       | 2    | 2       |
//! | `int`         | 4    | 4       |
//! | `long`        | 8    | 4       |
//! | `long long`   | 8    | 8       |
//! | `float`       | 4    | 4       |
//! | `double`      | 8    | 8       |
//! | `long double` | 16   | 12 (align 4) |
//! | pointer       | 8    | 4       |

use crate::types::ty::PrimKind;

/// Size and alignment of one scalar kind, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarLayout {
    pub size: u64,
    pub align: u64,
}

impl ScalarLayout {
    pub const fn new(size: u64, align: u64) -> Self {
        ScalarLayout { size, align }
    }

    const fn natural(size: u64) -> Self {
        ScalarLayout { size, align: size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub char: ScalarLayout,
    pub short: ScalarLayout,
    pub int: ScalarLayout,
    pub long: ScalarLayout,
    pub long_long: ScalarLayout,
    pub float: ScalarLayout,
    pub double: ScalarLayout,
    pub long_double: ScalarLayout,
    pub pointer: ScalarLayout,
}

impl Target {
    /// x86-64 System V
    pub const fn lp64() -> Self {
        Target {
            char: ScalarLayout::natural(1),
            short: ScalarLayout::natural(2),
            int: ScalarLayout::natural(4),
            long: ScalarLayout::natural(8),
            long_long: ScalarLayout::natural(8),
            float: ScalarLayout::natural(4),
            double: ScalarLayout::natural(8),
            long_double: ScalarLayout::natural(16),
            pointer: ScalarLayout::natural(8),
        }
    }

    /// i386 System V
    pub const fn ilp32() -> Self {
        Target {
            char: ScalarLayout::natural(1),
            short: ScalarLayout::natural(2),
            int: ScalarLayout::natural(4),
            long: ScalarLayout::natural(4),
            long_long: ScalarLayout::new(8, 4),
            float: ScalarLayout::natural(4),
            double: ScalarLayout::new(8, 4),
            long_double: ScalarLayout::new(12, 4),
            pointer: ScalarLayout::natural(4),
        }
    }

    pub fn prim(&self, kind: PrimKind) -> ScalarLayout {
        match kind {
            PrimKind::Char => self.char,
            PrimKind::Short => self.short,
            PrimKind::Int => self.int,
            PrimKind::Long => self.long,
            PrimKind::LongLong => self.long_long,
            PrimKind::Float => self.float,
            PrimKind::Double => self.double,
            PrimKind::LongDouble => self.long_double,
        }
    }

    /// Smallest value of an integer kind (two's complement)
    pub fn min_value(&self, kind: PrimKind, signed: bool) -> i128 {
        if !signed {
            return 0;
        }
        -(1i128 << (self.bits(kind) - 1))
    }

    /// Largest value of an integer kind
    pub fn max_value(&self, kind: PrimKind, signed: bool) -> i128 {
        let bits = self.bits(kind);
        if signed {
            (1i128 << (bits - 1)) - 1
        } else {
            (1i128 << bits) - 1
        }
    }

    fn bits(&self, kind: PrimKind) -> u32 {
        // Widest integer is 8 bytes, so the shifts above stay inside i128.
        (self.prim(kind).size.min(8) * 8) as u32
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::lp64()
    }
}
