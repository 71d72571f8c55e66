use std::cmp::Ordering;

use crate::ace::AceEntry;

/// Compares two entries by resolved trustee display name.
///
/// Ordinal comparison on the resolved string, not the raw code. Pure; pair
/// it with any sort the caller prefers.
#[must_use]
pub fn compare_by_trustee(a: &AceEntry, b: &AceEntry) -> Ordering {
    a.trustee().cmp(b.trustee())
}

/// Sorts entries ascending by resolved trustee display name.
///
/// The sort is stable: entries with equal trustee names keep their relative
/// input order. The parser never applies this itself -- a trustee-ordered
/// view is explicitly opt-in.
///
/// # Examples
///
/// ```
/// use descriptor::{AccessDescriptor, sort_by_trustee};
///
/// let acl = AccessDescriptor::parse("D:(A;;RC;;;WD)(A;;RC;;;AU)").unwrap();
/// let mut entries = acl.into_entries();
/// sort_by_trustee(&mut entries);
/// assert_eq!(entries[0].trustee(), "Authenticated Users");
/// assert_eq!(entries[1].trustee(), "Everyone");
/// ```
pub fn sort_by_trustee(entries: &mut [AceEntry]) {
    entries.sort_by(compare_by_trustee);
}
