//! End-to-end tests for the menu session over in-memory input and output.

use matcalc::dispatch::OperationRequest;
use matcalc::{CalcOptions, DispatchContext, HandlerChain, Matrix, Outcome, Session, multiply, trace};
use std::io::Cursor;

fn run_script(script: &str, options: &CalcOptions) -> (String, Option<(Matrix, Matrix)>) {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), options);
    session.run().unwrap();
    let live = session.matrices().map(|(a, b)| (a.clone(), b.clone()));
    (String::from_utf8(session.into_output()).unwrap(), live)
}

fn seeded(size: Option<usize>) -> CalcOptions {
    CalcOptions { size, seed: Some(99), verbose: false }
}

#[test]
fn exit_code_ends_session() {
    let (out, live) = run_script("7\n", &seeded(Some(2)));
    assert!(out.starts_with("Matrix calculator\n"));
    assert!(out.contains("6. Create new matrices\n7. Exit\n"));
    assert_eq!(out.matches("Choose an action: ").count(), 1);
    let (a, b) = live.unwrap();
    assert_eq!((a.size(), b.size()), (2, 2));
}

#[test]
fn prompts_for_initial_size() {
    let (out, live) = run_script("x\n0\n3\n7\n", &seeded(None));
    assert!(out.contains("Please enter a whole number."));
    assert!(out.contains("Size must be a positive integer."));
    assert_eq!(live.unwrap().0.size(), 3);
}

#[test]
fn product_is_printed() {
    let (out, live) = run_script("3\n7\n", &seeded(Some(2)));
    let (a, b) = live.unwrap();
    let expected = format!("Product of matrices:\n{}", multiply(&a, &b).unwrap());
    assert!(out.contains(&expected));
}

#[test]
fn recreate_changes_what_display_shows() {
    let (out, live) = run_script("6\n4\n1\n7\n", &seeded(Some(2)));
    let (a, b) = live.unwrap();
    assert_eq!((a.size(), b.size()), (4, 4));

    let after = out.split("New 4x4 matrices created\n").nth(1).unwrap();
    let expected = format!("First matrix:\n{a}\nSecond matrix:\n{b}");
    assert!(after.contains(&expected));
}

#[test]
fn unknown_choice_prints_nothing() {
    let (with_unknown, _) = run_script("9\n7\n", &seeded(Some(2)));
    let (plain, _) = run_script("7\n", &seeded(Some(2)));
    // Only an extra menu and prompt appear.
    let menu_and_prompt = plain.trim_start_matches("Matrix calculator\n");
    assert_eq!(with_unknown, format!("{plain}{menu_and_prompt}"));
}

#[test]
fn end_of_input_is_clean() {
    let (out, live) = run_script("1\n", &seeded(Some(1)));
    assert!(out.contains("First matrix:"));
    assert!(live.is_some());

    let (_, live) = run_script("6\n", &seeded(Some(2)));
    assert_eq!(live.unwrap().0.size(), 2);
}

#[test]
fn same_seed_same_session() {
    let (first, _) = run_script("1\n2\n5\n7\n", &seeded(Some(3)));
    let (second, _) = run_script("1\n2\n5\n7\n", &seeded(Some(3)));
    assert_eq!(first, second);
}

fn doubled_trace(
    req: &OperationRequest<'_, i64>,
    _ctx: &mut DispatchContext<'_>,
) -> matcalc::Result<Outcome<i64>> {
    Ok(Outcome::Rendered(format!("Doubled trace: {}\n", 2 * trace(req.a)?)))
}

#[test]
fn custom_chain_is_listed_and_dispatched() {
    let chain = HandlerChain::<i64>::standard()
        .with_handler(8, "Doubled trace", doubled_trace)
        .unwrap();
    let mut session = Session::new(Cursor::new("8\n7\n"), Vec::new(), &seeded(Some(3))).with_chain(chain);
    session.run().unwrap();
    let a = session.matrices().unwrap().0.clone();
    let out = String::from_utf8(session.into_output()).unwrap();

    assert!(out.contains("6. Create new matrices\n8. Doubled trace\n7. Exit\n"));
    assert!(out.contains(&format!("Doubled trace: {}\n", 2 * trace(&a).unwrap())));
}
