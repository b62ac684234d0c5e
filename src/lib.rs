//! # Introduction
//!
//! ctypes-core is the semantic type system of a C compiler front end. The
//! parser builds type nodes into a [`types::TypeArena`]; the expression checker
//! and the code generator then ask the arena about them.
//!
//! ## What it answers
//!
//! 1. Equivalence: [`types::TypeArena::same_type`] and
//!    [`types::TypeArena::compatible_struct`].
//! 2. Classification: `is_integer_type`, `is_char_pointer`, ... in
//!    [`types::classify`].
//! 3. Conversions: [`types::TypeArena::conv_rank`],
//!    [`types::TypeArena::can_represent`] and
//!    [`types::TypeArena::is_assignable`].
//! 4. Layout: struct offsets, alignment, size and anonymous member promotion
//!    in [`types::layout`], with primitive sizes taken from a
//!    [`types::Target`].
//!
//! ## Example
//!
//! ```
//! use ctypes_core::types::{PrimKind, SourceLocation, TypeArena};
//!
//! let mut arena = TypeArena::new();
//! let int = arena.prim(PrimKind::Int, true);
//! let ch = arena.prim(PrimKind::Char, true);
//! let point = arena.new_struct(false);
//! let loc = SourceLocation::new(1, 1);
//! arena.add_to_struct(point, Some("x"), int, loc).unwrap();
//! arena.add_to_struct(point, Some("tag"), ch, loc).unwrap();
//! arena.finalize_struct(point).unwrap();
//!
//! assert_eq!(arena.size_of(point).unwrap(), 8);
//! let tag = arena.struct_field_from_name(point, "tag").unwrap().unwrap();
//! assert_eq!(tag.offset(), 4);
//! ```
//!
//! ## Not supported
//!
//! Unions cannot be laid out, struct compatibility across translation units
//! is only decided for identical nodes, and enums carry no value set.

pub mod types;
