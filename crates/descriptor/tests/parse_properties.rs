//! Property tests for the descriptor and entry parsers.

use codes::AccessNames;
use descriptor::{AccessDescriptor, AceEntry, NoResolver};
use proptest::prelude::*;

/// Strategy for a flags/permissions field: packed uppercase letter pairs.
fn code_field() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Z]{2}", 0..8).prop_map(|codes| codes.concat())
}

/// Strategy for a trustee token: a well-known code or a SID-shaped string.
fn trustee_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AU".to_owned()),
        Just("BA".to_owned()),
        Just("WD".to_owned()),
        "S-1-5-21(-[0-9]{1,4}){3}",
    ]
}

/// Strategy for a whole descriptor built from well-formed pieces.
fn descriptor_string() -> impl Strategy<Value = String> {
    let entry = (code_field(), code_field(), trustee_token())
        .prop_map(|(flags, perms, trustee)| format!("(A;{flags};{perms};;;{trustee})"));
    (
        proptest::option::of(trustee_token()),
        proptest::option::of(trustee_token()),
        prop_oneof![Just('D'), Just('S')],
        proptest::collection::vec(entry, 0..4),
    )
        .prop_map(|(owner, group, acl_tag, entries)| {
            let mut out = String::new();
            if let Some(owner) = owner {
                out.push_str("O:");
                out.push_str(&owner);
            }
            if let Some(group) = group {
                out.push_str("G:");
                out.push_str(&group);
            }
            out.push(acl_tag);
            out.push(':');
            for entry in entries {
                out.push_str(&entry);
            }
            out
        })
}

proptest! {
    #[test]
    fn permissions_are_always_sorted(field in code_field()) {
        let entry = format!("A;;{field};;;BU");
        let ace = AceEntry::parse(&entry, AccessNames::Generic, &NoResolver).unwrap();
        let mut sorted = ace.permissions().to_vec();
        sorted.sort();
        prop_assert_eq!(ace.permissions(), sorted.as_slice());
    }

    #[test]
    fn service_and_generic_permission_counts_agree(field in code_field()) {
        let entry = format!("A;;{field};;;BU");
        let generic = AceEntry::parse(&entry, AccessNames::Generic, &NoResolver).unwrap();
        let service = AceEntry::parse(&entry, AccessNames::Service, &NoResolver).unwrap();
        prop_assert_eq!(generic.permissions().len(), service.permissions().len());
    }

    #[test]
    fn wrong_field_counts_always_fail(
        fields in proptest::collection::vec("[A-Z]{0,4}", 0..12)
    ) {
        prop_assume!(fields.len() != 6);
        let entry = fields.join(";");
        let result = AceEntry::parse(&entry, AccessNames::Generic, &NoResolver);
        prop_assert!(result.is_err());
    }

    #[test]
    fn well_formed_descriptors_parse(input in descriptor_string()) {
        let acl = AccessDescriptor::parse(&input).unwrap();
        prop_assert!(acl.kind().is_some());
        for entry in acl.entries() {
            prop_assert!(!entry.trustee().is_empty());
        }
    }

    #[test]
    fn parsing_is_idempotent(input in descriptor_string()) {
        let first = AccessDescriptor::parse(&input).unwrap();
        let second = AccessDescriptor::parse(&input).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_input_never_panics(input in ".{0,64}") {
        let _ = AccessDescriptor::parse(&input);
    }
}
