//! Property-based tests for unification and instantiation.
//!
//! Random type trees are generated from a small shape language and built
//! into a fresh context per case. Checked properties:
//! 1. Atom pairs: equal tags agree, different tags give one error.
//! 2. Variable pairs bind the same way regardless of argument order.
//! 3. Parameter count mismatches give exactly one length error.
//! 4. Copies never share variables with their source.
//! 5. A union-free type always unifies with its own instantiation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mvp_types::{Context, ErrorKind, FilePos, Idx, RefId, Tag, TypeKind, UnifyError};
use proptest::prelude::*;

// -- Shapes --

#[derive(Clone, Debug)]
enum Shape {
    Nil,
    Int,
    Str,
    /// One of a few shared variables, by index.
    Var(usize),
    Func(Vec<Shape>, Box<Shape>),
}

const VARS: usize = 3;

fn atom_tag_strategy() -> impl Strategy<Value = Tag> {
    prop_oneof![Just(Tag::Nil), Just(Tag::Int), Just(Tag::Str)]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        Just(Shape::Nil),
        Just(Shape::Int),
        Just(Shape::Str),
        (0..VARS).prop_map(Shape::Var),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (prop::collection::vec(inner.clone(), 0..4), inner)
            .prop_map(|(params, result)| Shape::Func(params, Box::new(result)))
    })
}

fn atom(ctx: &mut Context, tag: Tag, line: u32) -> Idx {
    let pos = FilePos::new(line, tag.name());
    match tag {
        Tag::Nil => ctx.nil(pos),
        Tag::Int => ctx.int(pos),
        Tag::Str => ctx.str(pos),
        other => panic!("{other} is not atomic"),
    }
}

fn build(ctx: &mut Context, shape: &Shape, vars: &[Idx]) -> Idx {
    let pos = FilePos::new(1, "t");
    match shape {
        Shape::Nil => ctx.nil(pos),
        Shape::Int => ctx.int(pos),
        Shape::Str => ctx.str(pos),
        Shape::Var(i) => vars[*i],
        Shape::Func(params, result) => {
            let params: Vec<Idx> = params.iter().map(|p| build(ctx, p, vars)).collect();
            let result = build(ctx, result, vars);
            ctx.func(pos, &params, result)
        }
    }
}

fn new_vars(ctx: &mut Context) -> Vec<Idx> {
    (0..VARS)
        .map(|i| ctx.new_ref(FilePos::new(0, format!("v{i}")), None))
        .collect()
}

fn collect_ref_ids(ctx: &Context, idx: Idx, out: &mut Vec<RefId>) {
    match ctx.pool().kind(idx) {
        TypeKind::Ref(id) => out.push(*id),
        TypeKind::Func { params, result } => {
            for &p in params.iter() {
                collect_ref_ids(ctx, p, out);
            }
            collect_ref_ids(ctx, *result, out);
        }
        TypeKind::Nil | TypeKind::Int | TypeKind::Str | TypeKind::Union { .. } => {}
    }
}

fn kinds(errors: &[UnifyError]) -> Vec<ErrorKind> {
    errors.iter().map(|e| e.kind).collect()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Atoms agree exactly when their tags do.
    #[test]
    fn prop_atom_pairs(left in atom_tag_strategy(), right in atom_tag_strategy()) {
        let mut ctx = Context::new();
        let a = atom(&mut ctx, left, 1);
        let b = atom(&mut ctx, right, 2);

        let unifier = ctx.unify(a, b);
        if left == right {
            prop_assert!(!unifier.has_errors());
        } else {
            prop_assert_eq!(unifier.errors(), &[UnifyError::new(ErrorKind::Different, a, b)]);
        }
    }

    /// The older of two variables ends up as the representative.
    #[test]
    fn prop_var_pair_order_independent(count in 2usize..8, i in 0usize..8, j in 0usize..8, swap in any::<bool>()) {
        let (i, j) = (i % count, j % count);
        prop_assume!(i != j);

        let mut ctx = Context::new();
        let vars: Vec<Idx> = (0..count)
            .map(|k| ctx.new_ref(FilePos::new(1, format!("v{k}")), None))
            .collect();
        let (a, b) = if swap { (vars[j], vars[i]) } else { (vars[i], vars[j]) };

        prop_assert!(!ctx.unify(a, b).has_errors());

        let (older, newer) = (vars[i.min(j)], vars[i.max(j)]);
        prop_assert!(!ctx.pool().is_bound(older));
        prop_assert_eq!(ctx.pool().link_target(newer), Some(older));
    }

    /// A length mismatch is reported once; the common prefix is still checked.
    #[test]
    fn prop_arity_mismatch(
        left in prop::collection::vec(atom_tag_strategy(), 0..6),
        right in prop::collection::vec(atom_tag_strategy(), 0..6),
    ) {
        let mut ctx = Context::new();
        let left_params: Vec<Idx> = left.iter().map(|&t| atom(&mut ctx, t, 1)).collect();
        let right_params: Vec<Idx> = right.iter().map(|&t| atom(&mut ctx, t, 2)).collect();
        let nil = ctx.nil(FilePos::builtin());
        let f = ctx.func(FilePos::new(1, "f"), &left_params, nil);
        let g = ctx.func(FilePos::new(2, "g"), &right_params, nil);

        let unifier = ctx.unify(f, g);
        let kinds = kinds(unifier.errors());

        let length_errors = kinds.iter().filter(|&&k| k == ErrorKind::FuncParamsLength).count();
        let different = kinds.iter().filter(|&&k| k == ErrorKind::Different).count();
        let mismatched = left.iter().zip(&right).filter(|(l, r)| l != r).count();

        prop_assert_eq!(length_errors, usize::from(left.len() != right.len()));
        prop_assert_eq!(different, mismatched);
        prop_assert_eq!(kinds.len(), length_errors + different);
    }

    /// Every variable occurrence in a copy is new.
    #[test]
    fn prop_copy_disjoint_vars(shape in shape_strategy()) {
        let mut ctx = Context::new();
        let vars = new_vars(&mut ctx);
        let ty = build(&mut ctx, &shape, &vars);
        let before = ctx.ref_count();

        let copy = ctx.copy(ty, None);

        let mut original_ids = Vec::new();
        collect_ref_ids(&ctx, ty, &mut original_ids);
        let mut copy_ids = Vec::new();
        collect_ref_ids(&ctx, copy, &mut copy_ids);

        prop_assert_eq!(copy_ids.len(), original_ids.len());
        prop_assert_eq!(ctx.ref_count() - before, u32::try_from(copy_ids.len()).unwrap());
        for id in &copy_ids {
            prop_assert!(id.raw() > before);
        }
        let mut unique = copy_ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), copy_ids.len());
    }

    /// Instantiations only differ by variables, so they always unify.
    #[test]
    fn prop_unify_with_own_copy(shape in shape_strategy()) {
        let mut ctx = Context::new();
        let vars = new_vars(&mut ctx);
        let ty = build(&mut ctx, &shape, &vars);
        let copy = ctx.copy(ty, None);

        let unifier = ctx.unify(ty, copy);
        prop_assert!(!unifier.has_errors(), "errors: {:?}", unifier.errors());
        for &var in &vars {
            prop_assert!(!ctx.pool().is_bound(var), "older variables stay free");
        }
    }
}
