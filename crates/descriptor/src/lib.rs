#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `descriptor` parses SDDL security descriptor strings -- the compact
//! notation packing an owner, a group, and a discretionary or system ACL
//! into text such as `O:BAG:SYD:(A;;CCLCSWLOCRRC;;;AU)` -- into structured,
//! queryable values, translating the terse two-letter codes into
//! human-readable names via the [`codes`] tables.
//!
//! # Design
//!
//! - [`AccessDescriptor::parse`] (and its `_for_target`/`_with_resolver`
//!   variants) scans the input left to right into owner, group, and ACL
//!   sections, then evaluates them in that fixed order. The ACL body is
//!   split into parenthesized entry substrings, each handed to
//!   [`AceEntry::parse`].
//! - [`AceEntry::parse`] splits an entry into its six `;`-separated fields,
//!   resolves the type, flag, and permission codes, and resolves the trustee
//!   through the ordered chain in [`ResolutionStep::CHAIN`]: well-known
//!   table, then the external [`AccountNameResolver`], then a guaranteed
//!   fallback literal.
//! - [`Target`] selects the access-name context for one call. The service
//!   context is a derived, immutable lookup -- never a mutation of shared
//!   tables -- so concurrent parses with different targets are independent.
//!
//! # Invariants
//!
//! - Entries keep their source order; trustee ordering is an explicit,
//!   stable, opt-in operation ([`sort_by_trustee`]).
//! - Permission names within an entry are sorted lexicographically by
//!   resolved name.
//! - Trustee fields always resolve to a displayable string; owner/group
//!   fall back to [`UNKNOWN_ACCOUNT`] and entry trustees to
//!   [`UNKNOWN_TRUSTEE`].
//! - Unrecognized type, flag, and permission codes pass through raw; only
//!   structure is validated.
//!
//! # Errors
//!
//! Parsing fails with [`DescriptorError`]: a string outside the descriptor
//! grammar, an ACL section opened by a letter other than `D`/`S`, or an
//! entry without exactly six fields ([`AceStringError`]). A failed parse
//! returns no partial descriptor.
//!
//! # Examples
//!
//! ```
//! use descriptor::{AccessDescriptor, Target};
//!
//! let acl = AccessDescriptor::parse("D:(A;;CCLCSWLOCRRC;;;AU)").unwrap();
//! let entry = &acl.entries()[0];
//! assert_eq!(entry.entry_type(), "ACCESS_ALLOWED");
//! assert_eq!(entry.trustee(), "Authenticated Users");
//!
//! // The same rights mean something else for a service.
//! let svc = AccessDescriptor::parse_for_target("D:(A;;RPWPDT;;;BU)", Target::Service).unwrap();
//! assert_eq!(svc.entries()[0].permissions(), ["Pause", "Start", "Stop"]);
//! ```
//!
//! # See also
//!
//! - [`codes`] for the underlying code tables and the service-context
//!   override semantics.

mod ace;
mod debug_parse;
mod descriptor;
mod error;
mod order;
mod resolve;
mod target;

pub use ace::AceEntry;
pub use descriptor::AccessDescriptor;
pub use error::{AceStringError, DescriptorError};
pub use order::{compare_by_trustee, sort_by_trustee};
pub use resolve::{
    AccountNameResolver, NoResolver, ResolutionStep, UNKNOWN_ACCOUNT, UNKNOWN_TRUSTEE,
};
pub use target::Target;
