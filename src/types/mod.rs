//! Semantic C types
//!
//! This module owns every type node of a compilation unit and answers the
//! questions the rest of the front end asks about them:
//! - [`ty`]: type node definitions ([`Type`], [`StructType`], [`TypeId`])
//! - [`arena`]: the [`TypeArena`] owning all nodes, constructors, sizes
//! - [`target`]: primitive sizes, alignments and integer ranges
//! - [`classify`]: predicates (`is_integer_type`, `is_function_pointer`, ...)
//! - [`rank`]: conversion rank and integer range containment
//! - [`compare`]: structural equality and struct compatibility
//! - [`layout`]: struct building, layout and field lookup
//! - [`assign`]: implicit assignment legality
//! - [`errors`]: [`TypeError`]
//!
//! # Lifecycle
//!
//! Types are created during parsing. A struct starts incomplete and empty,
//! receives members through [`TypeArena::add_to_struct`], and is laid out once
//! by [`TypeArena::finalize_struct`]. After that its size, alignment, offsets
//! and exports never change, and any number of AST nodes and symbols may hold
//! its [`TypeId`].

pub mod arena;
pub mod assign;
pub mod classify;
pub mod compare;
pub mod errors;
pub mod layout;
pub mod rank;
pub mod target;
pub mod ty;

pub use arena::TypeArena;
pub use errors::{Result, TypeError};
pub use layout::align_to;
pub use target::{ScalarLayout, Target};
pub use ty::{
    FuncType, Param, Prim, PrimKind, SourceLocation, StructMember, StructState, StructType, Type,
    TypeId,
};
