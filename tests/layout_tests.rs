// Integration tests for struct building and layout

use ctypes_core::types::{PrimKind, ScalarLayout, SourceLocation, Target, TypeArena, TypeId};

fn loc() -> SourceLocation {
    SourceLocation::new(1, 1)
}

fn build_struct(arena: &mut TypeArena, members: &[(Option<&str>, TypeId)]) -> TypeId {
    let s = arena.new_struct(false);
    for (name, ty) in members {
        arena
            .add_to_struct(s, *name, *ty, loc())
            .expect("add_to_struct failed");
    }
    arena.finalize_struct(s).expect("finalize_struct failed");
    s
}

#[test]
fn test_padding_and_alignment() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let ch = arena.prim(PrimKind::Char, true);
    let double = arena.prim(PrimKind::Double, true);

    let s = build_struct(
        &mut arena,
        &[(Some("i"), int), (Some("c"), ch), (Some("d"), double)],
    );

    let st = arena.struct_type(s).unwrap();
    let offsets: Vec<u64> = st.members.iter().map(|m| m.offset.unwrap()).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
    assert_eq!(arena.align_of(s).unwrap(), 8);
    assert_eq!(arena.size_of(s).unwrap(), 16);
    assert!(!st.incomplete);
    assert!(st.is_finalized());
}

#[test]
fn test_trailing_padding() {
    let mut arena = TypeArena::new();
    let long = arena.prim(PrimKind::Long, true);
    let ch = arena.prim(PrimKind::Char, true);

    let s = build_struct(&mut arena, &[(Some("l"), long), (Some("c"), ch)]);
    assert_eq!(arena.size_of(s).unwrap(), 16);

    let arr = arena.array_of(ch, 3);
    let t = build_struct(&mut arena, &[(Some("c"), ch), (Some("buf"), arr)]);
    assert_eq!(arena.size_of(t).unwrap(), 4);
    assert_eq!(arena.align_of(t).unwrap(), 1);
}

#[test]
fn test_empty_struct() {
    let mut arena = TypeArena::new();
    let s = build_struct(&mut arena, &[]);
    assert_eq!(arena.size_of(s).unwrap(), 0);
    assert_eq!(arena.align_of(s).unwrap(), 1);
    assert!(arena.struct_field_from_idx(s, 0).unwrap().is_none());
}

#[test]
fn test_anonymous_struct_promotion() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let ch = arena.prim(PrimKind::Char, true);

    let inner = build_struct(&mut arena, &[(Some("a"), int), (Some("b"), ch)]);
    let outer = build_struct(&mut arena, &[(None, inner), (Some("c"), int)]);

    let st = arena.struct_type(outer).unwrap();
    assert_eq!(st.members.len(), 2);
    assert_eq!(st.exports.len(), 3);

    let a = arena.struct_field_from_name(outer, "a").unwrap().unwrap();
    let b = arena.struct_field_from_name(outer, "b").unwrap().unwrap();
    let c = arena.struct_field_from_name(outer, "c").unwrap().unwrap();
    assert_eq!(a.offset(), 0);
    assert_eq!(b.offset(), 4);
    assert_eq!(c.offset(), 8);
    assert_eq!(a.ty, int);
    assert_eq!(arena.size_of(outer).unwrap(), 12);

    assert_eq!(arena.struct_field_idx_from_name(outer, "c").unwrap(), Some(2));
}

#[test]
fn test_nested_anonymous_offsets_are_shifted() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let ch = arena.prim(PrimKind::Char, true);
    let double = arena.prim(PrimKind::Double, true);

    let innermost = build_struct(&mut arena, &[(Some("x"), int), (Some("y"), int)]);
    let middle = build_struct(&mut arena, &[(Some("d"), double), (None, innermost)]);
    let outer = build_struct(&mut arena, &[(Some("tag"), ch), (None, middle)]);

    let names: Vec<&str> = arena
        .struct_type(outer)
        .unwrap()
        .exports
        .iter()
        .map(|m| m.name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["tag", "d", "x", "y"]);

    let x = arena.struct_field_from_name(outer, "x").unwrap().unwrap();
    let y = arena.struct_field_from_name(outer, "y").unwrap().unwrap();
    assert_eq!(x.offset(), 16);
    assert_eq!(y.offset(), 20);
    assert_eq!(arena.size_of(outer).unwrap(), 24);
}

#[test]
fn test_named_struct_member_is_not_flattened() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let inner = build_struct(&mut arena, &[(Some("a"), int)]);
    let outer = build_struct(&mut arena, &[(Some("in"), inner)]);

    assert!(arena.struct_field_from_name(outer, "in").unwrap().is_some());
    assert!(arena.struct_field_from_name(outer, "a").unwrap().is_none());
}

#[test]
fn test_shared_offsets_share_logical_index() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let ch = arena.prim(PrimKind::Char, true);
    let empty = build_struct(&mut arena, &[]);

    // A zero-sized member shares its offset with whatever follows it.
    let s = build_struct(
        &mut arena,
        &[(Some("marker"), empty), (Some("first"), ch), (Some("n"), int)],
    );

    let marker = arena.struct_field_from_name(s, "marker").unwrap().unwrap();
    let first = arena.struct_field_from_name(s, "first").unwrap().unwrap();
    assert_eq!(marker.offset(), 0);
    assert_eq!(first.offset(), 0);

    let zero = arena.struct_field_from_idx(s, 0).unwrap().unwrap();
    assert!(zero.has_name("marker"));
    assert!(arena.struct_field_from_idx(s, 1).unwrap().unwrap().has_name("n"));
    assert!(arena.struct_field_from_idx(s, 2).unwrap().is_none());

    assert_eq!(arena.struct_field_idx_from_name(s, "marker").unwrap(), Some(0));
    assert_eq!(arena.struct_field_idx_from_name(s, "first").unwrap(), Some(0));
    assert_eq!(arena.struct_field_idx_from_name(s, "n").unwrap(), Some(1));
}

#[test]
fn test_unknown_field_is_not_an_error() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let s = build_struct(&mut arena, &[(Some("a"), int)]);

    assert!(arena.struct_field_from_name(s, "nope").unwrap().is_none());
    assert_eq!(arena.struct_field_idx_from_name(s, "nope").unwrap(), None);
    assert!(arena.struct_field_from_idx(s, 7).unwrap().is_none());
}

#[test]
fn test_pointer_member_to_self() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let node = arena.new_struct(false);
    let next = arena.pointer_to(node);
    arena.add_to_struct(node, Some("value"), int, loc()).unwrap();
    arena.add_to_struct(node, Some("next"), next, loc()).unwrap();
    arena.finalize_struct(node).unwrap();

    let next_field = arena.struct_field_from_name(node, "next").unwrap().unwrap();
    assert_eq!(next_field.offset(), 8);
    assert_eq!(next_field.ty, next);
    assert_eq!(arena.size_of(node).unwrap(), 16);
}

#[test]
fn test_layout_follows_target() {
    let mut arena = TypeArena::with_target(Target::ilp32());
    let ch = arena.prim(PrimKind::Char, true);
    let double = arena.prim(PrimKind::Double, true);
    let s = build_struct(&mut arena, &[(Some("c"), ch), (Some("d"), double)]);

    let d = arena.struct_field_from_name(s, "d").unwrap().unwrap();
    assert_eq!(d.offset(), 4);
    assert_eq!(arena.size_of(s).unwrap(), 12);
}

#[test]
fn test_finalize_rejects_union() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let u = arena.new_struct(true);
    arena.add_to_struct(u, Some("a"), int, loc()).unwrap();

    let err = arena.finalize_struct(u).unwrap_err();
    assert!(err.is_internal());
}

#[test]
fn test_finalize_twice_is_internal_error() {
    let mut arena = TypeArena::new();
    let s = build_struct(&mut arena, &[]);
    assert!(arena.finalize_struct(s).unwrap_err().is_internal());
}

#[test]
fn test_add_after_finalize_is_internal_error() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let s = build_struct(&mut arena, &[(Some("a"), int)]);

    let err = arena.add_to_struct(s, Some("b"), int, loc()).unwrap_err();
    assert!(err.is_internal());
    assert_eq!(arena.struct_type(s).unwrap().members.len(), 1);
}

#[test]
fn test_embedding_unfinished_struct_is_internal_error() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let inner = arena.new_struct(false);
    arena.add_to_struct(inner, Some("a"), int, loc()).unwrap();

    let outer = arena.new_struct(false);
    arena.add_to_struct(outer, None, inner, loc()).unwrap();
    assert!(arena.finalize_struct(outer).unwrap_err().is_internal());
    assert!(!arena.struct_type(outer).unwrap().is_finalized());
}

#[test]
fn test_building_struct_lookup_is_internal_error() {
    let mut arena = TypeArena::new();
    let int = arena.prim(PrimKind::Int, true);
    let s = arena.new_struct(false);
    arena.add_to_struct(s, Some("a"), int, loc()).unwrap();

    assert_eq!(arena.struct_type(s).unwrap().members[0].offset, None);
    assert!(arena.struct_field_from_name(s, "a").unwrap_err().is_internal());
    assert!(arena.struct_field_from_name(int, "a").unwrap_err().is_internal());
}

#[test]
fn test_alignment_is_largest_member_alignment() {
    let target = Target {
        long_double: ScalarLayout::new(12, 12),
        ..Target::lp64()
    };
    let mut arena = TypeArena::with_target(target);
    let ld = arena.prim(PrimKind::LongDouble, true);
    let double = arena.prim(PrimKind::Double, true);

    let s = build_struct(&mut arena, &[(Some("a"), ld), (Some("b"), double)]);

    let b = arena.struct_field_from_name(s, "b").unwrap().unwrap();
    assert_eq!(b.offset(), 16);
    assert_eq!(arena.align_of(s).unwrap(), 12);
    assert_eq!(arena.size_of(s).unwrap(), 24);
}

#[test]
fn test_member_size_overflow_is_internal_error() {
    let mut arena = TypeArena::new();
    let ch = arena.prim(PrimKind::Char, true);
    let huge = arena.array_of(ch, u64::MAX);

    let s = arena.new_struct(false);
    arena.add_to_struct(s, Some("a"), huge, loc()).unwrap();
    arena.add_to_struct(s, Some("b"), huge, loc()).unwrap();
    let err = arena.finalize_struct(s).unwrap_err();
    assert!(err.is_internal(), "Expected internal error, got {:?}", err);
    assert!(!arena.struct_type(s).unwrap().is_finalized());
}

#[test]
fn test_padding_overflow_is_internal_error() {
    let mut arena = TypeArena::new();
    let ch = arena.prim(PrimKind::Char, true);
    let int = arena.prim(PrimKind::Int, true);
    let almost_all = arena.array_of(ch, u64::MAX - 1);

    let s = arena.new_struct(false);
    arena.add_to_struct(s, Some("buf"), almost_all, loc()).unwrap();
    arena.add_to_struct(s, Some("n"), int, loc()).unwrap();
    assert!(arena.finalize_struct(s).unwrap_err().is_internal());
}

#[test]
fn test_array_size_overflow_is_internal_error() {
    let mut arena = TypeArena::new();
    let ld = arena.prim(PrimKind::LongDouble, true);
    let huge = arena.array_of(ld, u64::MAX / 2);
    assert!(arena.size_of(huge).unwrap_err().is_internal());

    let s = arena.new_struct(false);
    arena.add_to_struct(s, Some("big"), huge, loc()).unwrap();
    assert!(arena.finalize_struct(s).unwrap_err().is_internal());
}
