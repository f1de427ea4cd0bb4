// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/generator_test.rs
// Tests for the generators and composition

use primrec_calculus::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_zero() {
    assert_eq!(Func::zero().call(&[]), Ok(nat(0)));
}

#[test]
fn test_zero_rejects_arguments() {
    let err = Func::zero().call(&[1]).unwrap_err();
    assert_eq!(err, EvalError::arity("zero", Expected::Exactly(0), 1));
}

#[test]
fn test_succ() {
    assert_eq!(Func::succ().call(&[0]), Ok(nat(1)));
    assert_eq!(Func::succ().call(&[99]), Ok(nat(100)));
}

#[test]
fn test_succ_beyond_machine_words() {
    let big = nat(u64::MAX);
    assert_eq!(Func::succ().apply(&[big.clone()]), Ok(big + 1u32));
}

#[test]
fn test_proj() {
    assert_eq!(Func::proj(0).call(&[10, 20]), Ok(nat(10)));
    assert_eq!(Func::proj(1).call(&[10, 20]), Ok(nat(20)));
    // extra arguments are ignored
    assert_eq!(Func::proj(0).call(&[10, 20, 30]), Ok(nat(10)));
}

#[test]
fn test_proj_out_of_range() {
    let err = Func::proj(2).call(&[1, 2]).unwrap_err();
    assert_eq!(err, EvalError::arity("proj(2)", Expected::AtLeast(3), 2));
    assert_eq!(
        err.to_string(),
        "arity error: proj(2) expects at least 3 arguments, got 2"
    );
}

#[test]
fn test_compose_passes_same_arguments_to_every_inner() {
    // h(x, y) = add(y, x)
    let swapped = Func::compose(add(), [Func::proj(1), Func::proj(0)]);
    assert_eq!(swapped.call(&[3, 4]), Ok(nat(7)));

    let double = Func::compose(add(), [Func::proj(0), Func::proj(0)]);
    assert_eq!(double.call(&[7]), Ok(nat(14)));
}

#[test]
fn test_compose_without_inners_ignores_arguments() {
    let constant = Func::constant(one());
    assert_eq!(constant.call(&[]), Ok(nat(1)));
    assert_eq!(constant.call(&[9, 9, 9]), Ok(nat(1)));
}

#[test]
fn test_compose_outer_arity_mismatch() {
    let too_many_for_zero = Func::compose(Func::zero(), [Func::proj(0)]);
    assert_eq!(
        too_many_for_zero.call(&[5]),
        Err(EvalError::arity("zero", Expected::Exactly(0), 1))
    );

    let too_many_for_succ = Func::compose(Func::succ(), [Func::proj(0), Func::proj(0)]);
    assert!(too_many_for_succ.call(&[5]).unwrap_err().is_arity());
}

#[test]
fn test_compose_inner_needs_more_arguments() {
    let f = Func::compose(Func::succ(), [Func::proj(3)]);
    assert_eq!(
        f.call(&[1]),
        Err(EvalError::arity("proj(3)", Expected::AtLeast(4), 1))
    );
}

#[test]
fn test_apply_signed_rejects_negative() {
    let err = add()
        .apply_signed(&[IntLit::from(-1), IntLit::from(2)])
        .unwrap_err();
    assert!(err.is_domain());
    assert_eq!(
        add().apply_signed(&[IntLit::from(3), IntLit::from(2)]),
        Ok(nat(5))
    );
}

#[test]
fn test_display() {
    assert_eq!(Func::zero().to_string(), "zero");
    assert_eq!(Func::proj(2).to_string(), "proj(2)");
    assert_eq!(Func::constant(Func::zero()).to_string(), "compose(zero)");
    assert_eq!(add().to_string(), "prim_rec(proj(0), compose(succ, proj(1)))");
    assert_eq!(Func::search(sg()).to_string(), "search(prim_rec(zero, compose(compose(succ, zero))))");
}

#[test]
fn test_min_arity() {
    assert_eq!(Func::zero().min_arity(), 0);
    assert_eq!(Func::succ().min_arity(), 1);
    assert_eq!(Func::proj(3).min_arity(), 4);
    assert_eq!(Func::constant(Func::succ()).min_arity(), 0);
    assert_eq!(add().min_arity(), 2);
    assert_eq!(factorial().min_arity(), 1);
    assert_eq!(exp().min_arity(), 2);
    assert_eq!(div().min_arity(), 2);
}

#[test]
fn test_size() {
    assert_eq!(Func::succ().size(), 1);
    // prim_rec, proj(0), compose, succ, proj(1)
    assert_eq!(add().size(), 5);
    assert!(mult().size() > add().size());
}

#[test]
fn test_catalog_shares_subtrees() {
    fn parts(f: &Func) -> (&Arc<Func>, &Arc<Func>) {
        match f {
            Func::PrimRec { base, step } => (base, step),
            other => panic!("expected prim_rec, got {}", other),
        }
    }

    let add = add();
    let mult = mult();
    let embedded = match &**parts(&mult).1 {
        Func::Compose { outer, .. } => outer.clone(),
        other => panic!("expected compose, got {}", other),
    };

    assert_eq!(*embedded, add);
    assert!(Arc::ptr_eq(parts(&add).0, parts(&embedded).0));
}

#[test]
fn test_functions_shared_across_threads() {
    let f = factorial();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(f.call(&[5]), Ok(nat(120))));
        }
    });
}
