//! Tests for routing menu codes through the standard handler chain.

use matcalc::{DispatchContext, HandlerChain, Matrix, MatrixError, OpCode, Outcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn grid(rows: &[[i64; 2]]) -> Matrix {
    Matrix::create_from_grid(rows).unwrap()
}

/// Dispatch `code` with a seeded RNG and a fixed recreate size.
fn run(code: i64, a: &Matrix, b: &Matrix, size: usize) -> Outcome<i64> {
    let chain = HandlerChain::<i64>::standard();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut next_size = || Ok::<usize, MatrixError>(size);
    let mut ctx = DispatchContext { rng: &mut rng, next_size: &mut next_size };
    chain.dispatch(code, a, b, &mut ctx).unwrap()
}

fn rendered(outcome: Outcome<i64>) -> String {
    match outcome {
        Outcome::Rendered(text) => text,
        other => panic!("expected rendered text, got {:?}", other),
    }
}

#[test]
fn codes_map_to_operations() {
    let a = grid(&[[1, 2], [3, 4]]);
    let b = grid(&[[5, 6], [7, 8]]);

    assert_eq!(
        rendered(run(OpCode::Display.code(), &a, &b, 2)),
        "First matrix:\n1\t2\n3\t4\n\nSecond matrix:\n5\t6\n7\t8\n"
    );
    assert_eq!(rendered(run(2, &a, &b, 2)), "Sum of matrices:\n6\t8\n10\t12\n");
    assert_eq!(rendered(run(3, &a, &b, 2)), "Product of matrices:\n19\t22\n43\t50\n");
    assert_eq!(rendered(run(4, &a, &b, 2)), "Transposed first matrix:\n1\t3\n2\t4\n");
    assert_eq!(rendered(run(5, &a, &b, 2)), "Trace of the first matrix: 5\n");
}

#[test]
fn size_mismatch_is_recovered() {
    let a = grid(&[[1, 2], [3, 4]]);
    let b = Matrix::<i64>::zeros(3);
    for code in [OpCode::Add.code(), OpCode::Multiply.code()] {
        match run(code, &a, &b, 2) {
            Outcome::Recovered(MatrixError::SizeMismatch { left, right }) => assert_eq!((left, right), (2, 3)),
            other => panic!("expected recovered mismatch, got {:?}", other),
        }
    }
    // Operations on the first matrix alone are unaffected by the second's size.
    assert!(matches!(run(OpCode::Transpose.code(), &a, &b, 2), Outcome::Rendered(_)));
    assert!(matches!(run(OpCode::Trace.code(), &a, &b, 2), Outcome::Rendered(_)));
}

#[test]
fn overflow_is_recovered() {
    let a = grid(&[[i64::MAX, 1], [1, 1]]);
    for op in [OpCode::Add, OpCode::Multiply, OpCode::Trace] {
        match run(op.code(), &a, &a, 2) {
            Outcome::Recovered(MatrixError::Overflow { .. }) => {}
            other => panic!("expected recovered overflow for {:?}, got {:?}", op, other),
        }
    }
    let mut live_a = a.clone();
    let mut live_b = a.clone();
    let message = run(OpCode::Add.code(), &a, &a, 2).apply(&mut live_a, &mut live_b);
    assert_eq!(message.as_deref(), Some("Error: arithmetic overflow in cell (0, 0)\n"));
    assert_eq!(live_a, a);
}

#[test]
fn unrecognized_code_is_a_no_op() {
    let mut a = grid(&[[1, 2], [3, 4]]);
    let mut b = grid(&[[5, 6], [7, 8]]);
    let (a0, b0) = (a.clone(), b.clone());
    for code in [0, 7, 42, -1] {
        let outcome = run(code, &a, &b, 2);
        assert!(matches!(outcome, Outcome::Unrecognized));
        assert_eq!(outcome.apply(&mut a, &mut b), None);
    }
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn recreate_replaces_live_matrices() {
    let mut a = grid(&[[1, 2], [3, 4]]);
    let mut b = grid(&[[5, 6], [7, 8]]);
    let outcome = run(OpCode::Recreate.code(), &a, &b, 3);

    let mut rng = StdRng::seed_from_u64(2024);
    let expected_a = Matrix::<i64>::create_random(3, &mut rng);
    let expected_b = Matrix::<i64>::create_random(3, &mut rng);

    let message = outcome.apply(&mut a, &mut b);
    assert_eq!(message.as_deref(), Some("New 3x3 matrices created\n"));
    assert_eq!(a, expected_a);
    assert_eq!(b, expected_b);
}

#[test]
fn recreate_propagates_size_source_errors() {
    let chain = HandlerChain::<i64>::standard();
    let a = Matrix::<i64>::zeros(1);
    let mut rng = StdRng::seed_from_u64(1);
    let mut next_size = || Err::<usize, MatrixError>(MatrixError::InvalidInput("no size".to_string()));
    let mut ctx = DispatchContext { rng: &mut rng, next_size: &mut next_size };
    assert!(matches!(
        chain.dispatch(OpCode::Recreate.code(), &a, &a, &mut ctx),
        Err(MatrixError::InvalidInput(_))
    ));
}

#[test]
fn opcode_round_trip() {
    for op in OpCode::ALL {
        assert_eq!(OpCode::from_code(op.code()), Some(op));
    }
    assert_eq!(OpCode::from_code(7), None);
}
