// Type node definitions for the C front end

use std::fmt;

/// Source location information for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Handle to a type node owned by a [`TypeArena`](super::arena::TypeArena)
///
/// Two handles are the same type node iff they compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive arithmetic kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimKind {
    Char,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
    LongDouble,
}

impl PrimKind {
    pub fn is_floating(self) -> bool {
        matches!(self, PrimKind::Float | PrimKind::Double | PrimKind::LongDouble)
    }

    pub fn is_integer(self) -> bool {
        !self.is_floating()
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimKind::Char => "char",
            PrimKind::Short => "short",
            PrimKind::Int => "int",
            PrimKind::Long => "long",
            PrimKind::LongLong => "long long",
            PrimKind::Float => "float",
            PrimKind::Double => "double",
            PrimKind::LongDouble => "long double",
        }
    }
}

/// Primitive type: kind plus signedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prim {
    pub kind: PrimKind,
    pub signed: bool,
}

/// Function parameter (the name is kept for diagnostics only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: TypeId,
}

impl Param {
    pub fn new(name: Option<&str>, ty: TypeId) -> Self {
        Param {
            name: name.map(str::to_string),
            ty,
        }
    }

    pub fn unnamed(ty: TypeId) -> Self {
        Param { name: None, ty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub ret: TypeId,
    pub params: Vec<Param>,
    pub is_vararg: bool,
}

/// A struct member, either raw (declaration view) or exported (flattened view)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    pub name: Option<String>,
    pub ty: TypeId,
    /// Byte offset from the start of the struct; `None` until the struct is finalized
    pub offset: Option<u64>,
}

impl StructMember {
    /// Byte offset of a member of a finalized struct
    ///
    /// Only meaningful once the owning struct is finalized: an unresolved
    /// offset reads as 0 here. Match on the `offset` field directly when
    /// the struct may still be building.
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Lifecycle state of a struct node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructState {
    /// Members are being appended; offsets unresolved, exports empty
    Building,
    /// Layout fixed; the node is read-only from here on
    Finalized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub is_union: bool,
    pub incomplete: bool,
    pub state: StructState,
    /// Raw members in declaration order
    pub members: Vec<StructMember>,
    /// Name-flattened members (anonymous struct members spliced in)
    pub exports: Vec<StructMember>,
    pub size: u64,
    /// 0 while unset
    pub align: u64,
}

impl StructType {
    pub(crate) fn new(is_union: bool) -> Self {
        StructType {
            is_union,
            incomplete: true,
            state: StructState::Building,
            members: Vec::new(),
            exports: Vec::new(),
            size: 0,
            align: 0,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.state == StructState::Finalized
    }
}

/// Semantic C type, one variant per kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Void,
    Prim(Prim),
    Enum,
    Pointer { pointee: TypeId },
    Function(FuncType),
    Struct(StructType),
    Array { element: TypeId, dim: u64 },
}

impl Type {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Void => "void",
            Type::Prim(_) => "primitive",
            Type::Enum => "enum",
            Type::Pointer { .. } => "pointer",
            Type::Function(_) => "function",
            Type::Struct(s) if s.is_union => "union",
            Type::Struct(_) => "struct",
            Type::Array { .. } => "array",
        }
    }
}
