//! Integration tests for infrastructure_external_format crate
//!
//! Checks the codec laws over generated terms: decode(encode(t)) == t,
//! canonical bytes survive decode/encode unchanged, the size calculation is
//! exact, and no prefix of a valid encoding decodes.

use entities_terms::*;
use infrastructure_external_format::*;
use proptest::prelude::*;

fn atom_strategy() -> impl Strategy<Value = Atom> {
    prop_oneof![
        "[a-z][a-z0-9_@]{0,12}".prop_map(Atom::new),
        "\\PC{0,20}".prop_map(Atom::new),
    ]
}

fn integer_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        (0u32..=255).prop_map(Term::from),
        any::<i32>().prop_map(Term::from),
        any::<i64>().prop_map(Term::from),
        (any::<bool>(), prop::collection::vec(any::<u8>(), 0..40))
            .prop_map(|(negative, magnitude)| {
                Term::Integer(BigNumber::from_sign_magnitude(negative, &magnitude))
            }),
    ]
}

fn float_strategy() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn pid_strategy() -> impl Strategy<Value = Pid> {
    (atom_strategy(), any::<u32>(), any::<u32>(), any::<u32>())
        .prop_map(|(node, id, serial, creation)| Pid { node, id, serial, creation })
}

fn leaf_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        atom_strategy().prop_map(Term::Atom),
        integer_strategy(),
        float_strategy().prop_map(Term::Float),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Term::Binary),
        (prop::collection::vec(any::<u8>(), 1..16), 1u8..=7)
            .prop_map(|(data, bits)| Term::BitBinary { data, bits }),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Term::String),
        Just(Term::nil()),
        pid_strategy().prop_map(Term::Pid),
        (atom_strategy(), any::<u64>(), any::<u32>())
            .prop_map(|(node, id, creation)| Term::Port(Port { node, id, creation })),
        (atom_strategy(), any::<u32>(), prop::collection::vec(any::<u32>(), 1..=5))
            .prop_map(|(node, creation, ids)| Term::Reference(Reference { node, creation, ids })),
        (atom_strategy(), atom_strategy(), any::<u8>())
            .prop_map(|(module, function, arity)| Term::Export(Export { module, function, arity })),
    ]
}

fn term_strategy() -> impl Strategy<Value = Term> {
    leaf_strategy().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Term::tuple),
            prop::collection::vec(inner.clone(), 1..8).prop_map(Term::List),
            (
                prop::collection::vec(inner.clone(), 1..4),
                prop_oneof![atom_strategy().prop_map(Term::Atom), integer_strategy()],
            )
                .prop_map(|(elements, tail)| Term::ImproperList { elements, tail: Box::new(tail) }),
            prop::collection::vec((inner.clone(), inner.clone()), 0..6)
                .prop_map(|pairs| Term::Map(Map::from_pairs(pairs))),
            (
                any::<u8>(),
                any::<[u8; 16]>(),
                any::<u32>(),
                atom_strategy(),
                any::<u32>(),
                any::<u32>(),
                pid_strategy(),
                prop::collection::vec(inner.clone(), 0..4),
            )
                .prop_map(|(arity, uniq, index, module, old_index, old_uniq, pid, free_vars)| {
                    Term::Fun(Box::new(Fun {
                        arity,
                        uniq,
                        index,
                        module,
                        old_index,
                        old_uniq,
                        pid,
                        free_vars,
                    }))
                }),
            (
                pid_strategy(),
                atom_strategy(),
                any::<u32>(),
                any::<u32>(),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(pid, module, index, uniq, free_vars)| {
                    Term::OldFun(Box::new(OldFun { pid, module, index, uniq, free_vars }))
                }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn roundtrip_term(term in term_strategy()) {
        let bytes = encode(&term).unwrap_or_else(|e| panic!("encode failed: {e}"));
        let decoded = decode_exact(&bytes).unwrap_or_else(|e| panic!("decode failed: {e}"));
        prop_assert_eq!(&decoded, &term);

        let again = encode(&decoded).unwrap_or_else(|e| panic!("re-encode failed: {e}"));
        prop_assert_eq!(again, bytes);
    }

    #[test]
    fn size_calculation_is_exact(term in term_strategy()) {
        let options = EncodeOptions::default();
        let size = encoded_size(&term, &options).unwrap_or_else(|e| panic!("size failed: {e}"));
        let bytes = encode_with(&term, &options).unwrap_or_else(|e| panic!("encode failed: {e}"));
        prop_assert_eq!(size, bytes.len());
    }

    #[test]
    fn prefixes_are_truncated(term in term_strategy(), cut in any::<prop::sample::Index>()) {
        let bytes = encode(&term).unwrap_or_else(|e| panic!("encode failed: {e}"));
        let prefix = &bytes[..cut.index(bytes.len())];
        let result = decode(prefix);
        prop_assert!(
            matches!(result, Err(CodecError::Truncated { .. }) | Err(CodecError::Empty)),
            "prefix of {} bytes gave {:?}", prefix.len(), result
        );
    }

    #[test]
    fn arbitrary_bytes_never_panic(body in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut bytes = vec![VERSION_MAGIC];
        bytes.extend_from_slice(&body);
        let _ = decode(&bytes);
    }

    #[test]
    fn compressed_roundtrip(term in term_strategy()) {
        let options = EncodeOptions::new().compression(CompressionLevel::BestCompression);
        let bytes = encode_with(&term, &options).unwrap_or_else(|e| panic!("encode failed: {e}"));
        let decoded = decode_exact(&bytes).unwrap_or_else(|e| panic!("decode failed: {e}"));
        prop_assert_eq!(decoded, term);
    }
}

#[test]
fn test_four_tuple_message_bytes() {
    // {response, 1, [], "2024-01-01 00:00:00"}
    let message = Term::tuple(vec![
        Term::atom("response"),
        Term::from(1),
        Term::nil(),
        Term::from("2024-01-01 00:00:00"),
    ]);
    let mut expected = vec![131, 104, 4, 119, 8];
    expected.extend_from_slice(b"response");
    expected.extend_from_slice(&[97, 1, 106, 107, 0, 19]);
    expected.extend_from_slice(b"2024-01-01 00:00:00");

    assert_eq!(encode(&message).unwrap(), expected);
    assert_eq!(decode_exact(&expected).unwrap(), message);
}

#[test]
fn test_legacy_atom_message_bytes() {
    let message = Term::tuple(vec![Term::atom("register_with_group"), Term::atom("time_server")]);
    let bytes = encode_with(&message, &EncodeOptions::new().legacy_atoms(true)).unwrap();
    assert_eq!(&bytes[..5], &[131, 104, 2, 115, 19]);
    // Old tags decode to the same term
    assert_eq!(decode_exact(&bytes).unwrap(), message);
}

#[test]
fn test_long_string_decodes_as_integer_list() {
    let text = vec![b'z'; 70_000];
    let bytes = encode(&Term::String(text.clone())).unwrap();
    let decoded = decode_exact(&bytes).unwrap();
    let expected: Vec<Term> = text.iter().map(|&b| Term::from(u32::from(b))).collect();
    assert_eq!(decoded, Term::List(expected));
}

#[test]
fn test_decode_from_larger_buffer() {
    let first = encode(&Term::atom("first")).unwrap();
    let second = encode(&Term::from(2)).unwrap();
    let mut buffer = first.clone();
    buffer.extend_from_slice(&second);

    let (term, used) = decode(&buffer).unwrap();
    assert_eq!(term, Term::atom("first"));
    assert_eq!(used, first.len());
    let (term, _) = decode(&buffer[used..]).unwrap();
    assert_eq!(term, Term::from(2));
}
