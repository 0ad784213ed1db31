//! Integration tests for entities_terms crate
//!
//! Exercises the term model the way gateway code uses it: building messages,
//! mutating tuple slots in place and comparing whole terms structurally.

use entities_terms::*;

fn sample_request() -> Term {
    Term::tuple(vec![
        Term::atom("time_request"),
        Term::Pid(Pid { node: Atom::new("gateway@localhost"), id: 42, serial: 0, creation: 7 }),
        Term::Reference(Reference {
            node: Atom::new("gateway@localhost"),
            creation: 7,
            ids: vec![1, 2, 3],
        }),
        Term::from("placeholder"),
    ])
}

#[test]
fn test_echo_mutation_keeps_arity() {
    let mut message = sample_request();
    let tuple = message.as_tuple_mut().unwrap();
    tuple.set(0, Term::atom("response")).unwrap();
    tuple.set(3, Term::from("2024-01-01 00:00:00")).unwrap();
    assert_eq!(tuple.arity(), 4);
    assert!(tuple.set(4, Term::nil()).is_err());

    let expected = Term::tuple(vec![
        Term::atom("response"),
        sample_request().as_tuple().unwrap().get(1).unwrap().clone(),
        sample_request().as_tuple().unwrap().get(2).unwrap().clone(),
        Term::string("2024-01-01 00:00:00"),
    ]);
    assert_eq!(message, expected);
}

#[test]
fn test_tuple_index_error_reports_position() {
    let mut pair = Tuple::new(vec![Term::atom("x"), Term::from(1)]);
    pair.set(1, Term::from(2)).unwrap();
    assert_eq!(pair.get(1).unwrap(), &Term::from(2));
    let err = pair.set(5, Term::from(3)).unwrap_err();
    assert_eq!(err, IndexError { index: 5, arity: 2 });
}

#[test]
fn test_integers_compare_by_value() {
    let small = Term::from(300);
    let from_big = Term::Integer(BigNumber::from_sign_magnitude(false, &[0x2C, 0x01]));
    assert_eq!(small, from_big);
}

#[test]
fn test_nested_maps_compare_structurally() {
    let inner_a = Map::from_pairs(vec![
        (Term::atom("a"), Term::from(1)),
        (Term::atom("b"), Term::List(vec![Term::from(2), Term::from(3)])),
    ]);
    let inner_b = Map::from_pairs(vec![
        (Term::atom("b"), Term::List(vec![Term::from(2), Term::from(3)])),
        (Term::atom("a"), Term::from(1)),
    ]);
    let outer_a = Term::tuple(vec![Term::Map(inner_a)]);
    let outer_b = Term::tuple(vec![Term::Map(inner_b)]);
    assert_eq!(outer_a, outer_b);
}

#[test]
fn test_display_of_message() {
    let message = Term::tuple(vec![
        Term::atom("response"),
        Term::from(1),
        Term::nil(),
        Term::from("2024-01-01 00:00:00"),
    ]);
    assert_eq!(message.to_string(), "{response,1,[],\"2024-01-01 00:00:00\"}");
}
