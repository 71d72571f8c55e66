//! The opt-in trustee-ordering utility.

use std::cmp::Ordering;

use descriptor::{AccessDescriptor, compare_by_trustee, sort_by_trustee};

#[test]
fn parser_output_is_never_resorted() {
    let acl = AccessDescriptor::parse("D:(A;;RC;;;WD)(A;;RC;;;AU)").unwrap();
    let trustees: Vec<&str> = acl.entries().iter().map(|e| e.trustee()).collect();
    assert_eq!(trustees, ["Everyone", "Authenticated Users"]);
}

#[test]
fn sorting_is_explicit_and_ascending() {
    let acl = AccessDescriptor::parse("D:(A;;RC;;;WD)(A;;RC;;;AU)(A;;RC;;;BA)").unwrap();
    let mut entries = acl.into_entries();
    sort_by_trustee(&mut entries);
    let trustees: Vec<&str> = entries.iter().map(|e| e.trustee()).collect();
    assert_eq!(trustees, ["Administrators", "Authenticated Users", "Everyone"]);
}

#[test]
fn comparison_uses_resolved_names() {
    let acl = AccessDescriptor::parse("D:(A;;RC;;;AN)(A;;RC;;;AO)").unwrap();
    // AN -> Anonymous, AO -> Account Operators: resolved order flips the
    // code order.
    let entries = acl.entries();
    assert_eq!(compare_by_trustee(&entries[0], &entries[1]), Ordering::Greater);
}

#[test]
fn ties_keep_relative_input_order() {
    // Two unresolvable SIDs share the fallback literal; the RC and GA
    // entries must stay in input order after sorting.
    let acl =
        AccessDescriptor::parse("D:(A;;RC;;;S-1-9-1)(A;;GA;;;S-1-9-2)(A;;RC;;;AU)").unwrap();
    let mut entries = acl.into_entries();
    sort_by_trustee(&mut entries);

    assert_eq!(entries[0].trustee(), "Authenticated Users");
    assert_eq!(entries[1].permissions(), ["READ_CONTROL"]);
    assert_eq!(entries[2].permissions(), ["GENERIC_ALL"]);
    assert_eq!(entries[1].trustee(), entries[2].trustee());
}

#[test]
fn sorting_an_empty_slice_is_a_no_op() {
    let acl = AccessDescriptor::parse("D:").unwrap();
    let mut entries = acl.into_entries();
    sort_by_trustee(&mut entries);
    assert!(entries.is_empty());
}
