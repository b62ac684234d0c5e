//! Struct construction, layout and field lookup
//!
//! A struct node is built by the parser one member at a time with
//! [`TypeArena::add_to_struct`] and laid out once with
//! [`TypeArena::finalize_struct`]. Finalizing runs four passes over the raw
//! members in declaration order:
//!
//! 1. alignment: the largest alignment over all members
//! 2. offsets: round a running cursor up to each member's alignment
//! 3. exports: copy named and non-struct members, splice in the exports of
//!    unnamed struct members shifted by their offset
//! 4. size: round the cursor up to the struct alignment
//!
//! An unnamed struct member must already be finalized, so its exports are
//! already flat and splicing is a single level.
//!
//! # Logical indices
//!
//! Consecutive export entries that share an offset form one logical field
//! position. [`StructType::field_from_idx`] addresses those runs.

use log::debug;

use crate::types::arena::TypeArena;
use crate::types::errors::{Result, TypeError};
use crate::types::ty::{SourceLocation, StructMember, StructState, StructType, Type, TypeId};

/// Round `v` up to a multiple of `a`, or `None` if that overflows
#[inline]
pub fn align_to(v: u64, a: u64) -> Option<u64> {
    if a == 0 || v % a == 0 {
        Some(v)
    } else {
        v.checked_add(a - v % a)
    }
}

impl TypeArena {
    /// Append a raw member with an unresolved offset
    pub fn add_to_struct(
        &mut self,
        t: TypeId,
        name: Option<&str>,
        member_ty: TypeId,
        location: SourceLocation,
    ) -> Result<()> {
        let s = self.struct_type_mut(t)?;
        if s.is_finalized() {
            return Err(TypeError::internal(format!(
                "member added to finalized struct {} at line {}",
                t, location.line
            )));
        }
        s.members.push(StructMember {
            name: name.map(str::to_string),
            ty: member_ty,
            offset: None,
        });
        Ok(())
    }

    /// Compute alignment, member offsets, exports and size of a struct
    pub fn finalize_struct(&mut self, t: TypeId) -> Result<()> {
        let s = self.struct_type(t)?;
        if s.is_union {
            return Err(TypeError::internal(format!(
                "cannot lay out {}: unions are not supported",
                self.display(t)
            )));
        }
        if s.is_finalized() {
            return Err(TypeError::internal(format!(
                "{} finalized twice",
                self.display(t)
            )));
        }

        let mut align = s.align.max(1);
        for m in &s.members {
            if m.ty == t {
                return Err(TypeError::internal(format!(
                    "{} contains itself",
                    self.display(t)
                )));
            }
            align = align.max(self.align_of(m.ty)?);
        }

        let overflow = || TypeError::internal(format!("size of {} overflows", self.display(t)));
        let mut offsets = Vec::with_capacity(s.members.len());
        let mut cursor: u64 = 0;
        for m in &s.members {
            cursor = align_to(cursor, self.align_of(m.ty)?).ok_or_else(overflow)?;
            offsets.push(cursor);
            cursor = cursor
                .checked_add(self.size_of(m.ty)?)
                .ok_or_else(overflow)?;
        }

        let mut exports = Vec::with_capacity(s.members.len());
        for (m, &offset) in s.members.iter().zip(&offsets) {
            match self.get(m.ty) {
                Type::Struct(inner) if m.name.is_none() => {
                    exports.extend(inner.exports.iter().map(|sub| StructMember {
                        name: sub.name.clone(),
                        ty: sub.ty,
                        offset: Some(sub.offset() + offset),
                    }));
                }
                _ => exports.push(StructMember {
                    name: m.name.clone(),
                    ty: m.ty,
                    offset: Some(offset),
                }),
            }
        }

        let size = align_to(cursor, align).ok_or_else(overflow)?;
        debug!(
            "finalized {}: size {}, align {}, {} members, {} exports",
            self.display(t),
            size,
            align,
            offsets.len(),
            exports.len()
        );

        let s = self.struct_type_mut(t)?;
        for (m, offset) in s.members.iter_mut().zip(offsets) {
            m.offset = Some(offset);
        }
        s.exports = exports;
        s.align = align;
        s.size = size;
        s.incomplete = false;
        s.state = StructState::Finalized;
        Ok(())
    }

    pub fn struct_field_from_name(&self, t: TypeId, name: &str) -> Result<Option<&StructMember>> {
        Ok(self.finalized_struct(t)?.field_from_name(name))
    }

    pub fn struct_field_from_idx(&self, t: TypeId, idx: usize) -> Result<Option<&StructMember>> {
        Ok(self.finalized_struct(t)?.field_from_idx(idx))
    }

    pub fn struct_field_idx_from_name(&self, t: TypeId, name: &str) -> Result<Option<usize>> {
        self.finalized_struct(t)?.field_idx_from_name(name)
    }
}

impl StructType {
    /// First exported field called `name`
    pub fn field_from_name(&self, name: &str) -> Option<&StructMember> {
        self.exports.iter().find(|m| m.has_name(name))
    }

    /// First export entry of the `idx`-th run of entries sharing an offset
    pub fn field_from_idx(&self, idx: usize) -> Option<&StructMember> {
        let mut cur = 0;
        let mut i = 0;
        while i < self.exports.len() {
            let m = &self.exports[i];
            if cur == idx {
                return Some(m);
            }
            while i < self.exports.len() && self.exports[i].offset == m.offset {
                i += 1;
            }
            cur += 1;
        }
        None
    }

    /// Logical index of the exported field called `name`
    pub fn field_idx_from_name(&self, name: &str) -> Result<Option<usize>> {
        let Some(m) = self.field_from_name(name) else {
            return Ok(None);
        };
        let mut idx = 0;
        while let Some(candidate) = self.field_from_idx(idx) {
            if candidate.offset == m.offset {
                return Ok(Some(idx));
            }
            idx += 1;
        }
        Err(TypeError::internal(format!(
            "field '{}' has no logical index",
            name
        )))
    }
}
