//! Type arena: owner of every type node in one compilation unit
//!
//! Nodes are appended to a `Vec` and never removed; a [`TypeId`] stays valid
//! for the lifetime of the arena. Dropping the arena reclaims the whole unit.
//!
//! `void`, primitives and pointers are interned, so building `int *` twice
//! yields the same handle. Enums, functions, arrays and structs always get a
//! fresh node: their identity is the node itself.

use log::trace;
use rustc_hash::FxHashMap;

use crate::types::errors::{Result, TypeError};
use crate::types::target::Target;
use crate::types::ty::{FuncType, Param, Prim, PrimKind, StructType, Type, TypeId};

#[derive(Debug, Default)]
pub struct TypeArena {
    nodes: Vec<Type>,
    target: Target,
    void: Option<TypeId>,
    prims: FxHashMap<Prim, TypeId>,
    pointers: FxHashMap<TypeId, TypeId>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::with_target(Target::default())
    }

    pub fn with_target(target: Target) -> Self {
        TypeArena {
            nodes: Vec::new(),
            target,
            void: None,
            prims: FxHashMap::default(),
            pointers: FxHashMap::default(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// An arena holds at most `u32::MAX` nodes; allocating past that panics
    /// rather than handing out a handle that aliases an older node.
    fn alloc(&mut self, ty: Type) -> TypeId {
        let id = next_id(self.nodes.len()).expect("type arena exhausted: more than u32::MAX nodes");
        self.nodes.push(ty);
        id
    }

    /// Look up a node. Handles are only ever minted by this arena.
    pub fn get(&self, id: TypeId) -> &Type {
        &self.nodes[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: TypeId) -> &mut Type {
        &mut self.nodes[id.index()]
    }

    pub fn void(&mut self) -> TypeId {
        if let Some(id) = self.void {
            return id;
        }
        let id = self.alloc(Type::Void);
        self.void = Some(id);
        id
    }

    pub fn prim(&mut self, kind: PrimKind, signed: bool) -> TypeId {
        let prim = Prim { kind, signed };
        if let Some(&id) = self.prims.get(&prim) {
            trace!("interned {} hit: {}", kind.name(), id);
            return id;
        }
        let id = self.alloc(Type::Prim(prim));
        self.prims.insert(prim, id);
        id
    }

    pub fn enum_type(&mut self) -> TypeId {
        self.alloc(Type::Enum)
    }

    pub fn pointer_to(&mut self, pointee: TypeId) -> TypeId {
        if let Some(&id) = self.pointers.get(&pointee) {
            trace!("interned pointer to {} hit: {}", pointee, id);
            return id;
        }
        let id = self.alloc(Type::Pointer { pointee });
        self.pointers.insert(pointee, id);
        id
    }

    pub fn function(&mut self, ret: TypeId, params: Vec<Param>, is_vararg: bool) -> TypeId {
        self.alloc(Type::Function(FuncType {
            ret,
            params,
            is_vararg,
        }))
    }

    pub fn array_of(&mut self, element: TypeId, dim: u64) -> TypeId {
        self.alloc(Type::Array { element, dim })
    }

    /// Create an empty, incomplete struct (or union) in the building state
    pub fn new_struct(&mut self, is_union: bool) -> TypeId {
        self.alloc(Type::Struct(StructType::new(is_union)))
    }

    /// Borrow the struct payload of `id`
    pub fn struct_type(&self, id: TypeId) -> Result<&StructType> {
        match self.get(id) {
            Type::Struct(s) => Ok(s),
            other => Err(TypeError::internal(format!(
                "expected struct, got {} ({})",
                other.kind_name(),
                self.display(id)
            ))),
        }
    }

    pub(crate) fn struct_type_mut(&mut self, id: TypeId) -> Result<&mut StructType> {
        self.struct_type(id)?;
        match self.get_mut(id) {
            Type::Struct(s) => Ok(s),
            other => Err(TypeError::internal(format!(
                "expected struct, got {}",
                other.kind_name()
            ))),
        }
    }

    /// Size in bytes of an object of type `id`
    pub fn size_of(&self, id: TypeId) -> Result<u64> {
        match self.get(id) {
            Type::Prim(p) => Ok(self.target.prim(p.kind).size),
            Type::Enum => Ok(self.target.int.size),
            Type::Pointer { .. } => Ok(self.target.pointer.size),
            Type::Array { element, dim } => self
                .size_of(*element)?
                .checked_mul(*dim)
                .ok_or_else(|| {
                    TypeError::internal(format!("size of {} overflows", self.display(id)))
                }),
            Type::Struct(_) => Ok(self.finalized_struct(id)?.size),
            Type::Void | Type::Function(_) => Err(self.no_layout(id)),
        }
    }

    /// Alignment in bytes of an object of type `id`
    pub fn align_of(&self, id: TypeId) -> Result<u64> {
        match self.get(id) {
            Type::Prim(p) => Ok(self.target.prim(p.kind).align),
            Type::Enum => Ok(self.target.int.align),
            Type::Pointer { .. } => Ok(self.target.pointer.align),
            Type::Array { element, .. } => self.align_of(*element),
            Type::Struct(_) => Ok(self.finalized_struct(id)?.align),
            Type::Void | Type::Function(_) => Err(self.no_layout(id)),
        }
    }

    /// Borrow a struct that has been through `finalize_struct`
    pub fn finalized_struct(&self, id: TypeId) -> Result<&StructType> {
        let s = self.struct_type(id)?;
        if !s.is_finalized() {
            return Err(TypeError::internal(format!(
                "{} is still being built",
                self.display(id)
            )));
        }
        Ok(s)
    }

    fn no_layout(&self, id: TypeId) -> TypeError {
        TypeError::internal(format!("{} has no object layout", self.display(id)))
    }

    /// Render a C-like spelling of a type, for diagnostics
    pub fn display(&self, id: TypeId) -> String {
        match self.get(id) {
            Type::Void => "void".to_string(),
            Type::Prim(p) => {
                if p.signed || p.kind.is_floating() {
                    p.kind.name().to_string()
                } else {
                    format!("unsigned {}", p.kind.name())
                }
            }
            Type::Enum => format!("enum <{}>", id),
            Type::Pointer { pointee } => match self.get(*pointee) {
                // Don't walk back into a struct that may point at itself.
                Type::Struct(s) if s.is_union => format!("union <{}> *", pointee),
                Type::Struct(_) => format!("struct <{}> *", pointee),
                _ => format!("{} *", self.display(*pointee)),
            },
            Type::Function(f) => {
                let mut params: Vec<String> =
                    f.params.iter().map(|p| self.display(p.ty)).collect();
                if f.is_vararg {
                    params.push("...".to_string());
                }
                format!("fn({}) -> {}", params.join(", "), self.display(f.ret))
            }
            Type::Struct(s) if s.is_union => format!("union <{}>", id),
            Type::Struct(_) => format!("struct <{}>", id),
            Type::Array { element, dim } => format!("{}[{}]", self.display(*element), dim),
        }
    }
}

fn next_id(len: usize) -> Option<TypeId> {
    u32::try_from(len).ok().map(TypeId)
}
