#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `codes` provides the static lookup tables that give SDDL's terse one- and
//! two-letter codes their canonical display names. SDDL (Security Descriptor
//! Definition Language) packs an entire access-control list into strings such
//! as `D:(A;;CCLCSWLOCRRC;;;AU)`; every token in that string belongs to one of
//! four independent namespaces, and this crate owns all four:
//!
//! - [`AceType`] -- entry-type codes (`A`, `D`, `OA`, ...) naming what an
//!   access-control entry does: allow, deny, audit, alarm, and their object
//!   variants.
//! - [`AccessNames`] -- the shared namespace of entry flags (inheritance,
//!   audit conditions) and access-right bits (generic, standard,
//!   directory-service, file, and registry rights), including the
//!   service-specific override meanings.
//! - [`trustee`] -- well-known principal abbreviations (`AU` for
//!   "Authenticated Users", `BA` for "Administrators", ...).
//! - [`DescriptorKind`] -- the section letters `O`/`G`/`D`/`S` that introduce
//!   the owner, group, DACL, and SACL portions of a descriptor.
//!
//! # Design
//!
//! Codes are matched exactly, case-sensitively, with no fuzzy fallback. Every
//! lookup returns `Option<&'static str>` (or `Option<Self>` for the closed
//! enums) so that callers -- not the tables -- decide what an unrecognized code
//! means. The descriptor grammar legitimately carries vendor-specific and
//! future codes, so "unknown" is a normal answer, never an error.
//!
//! The service-context override is modeled as a derived lookup context
//! ([`AccessNames::Service`]) rather than a mutation of shared state:
//! resolving a code under the service context consults the thirteen override
//! entries first and falls back to the shared table. Concurrent lookups under
//! different contexts are therefore fully independent.
//!
//! # Invariants
//!
//! - All tables are `'static` data; nothing in this crate allocates or
//!   mutates.
//! - A code resolves to the same name for the lifetime of the process.
//! - [`AccessNames::Generic`] and [`AccessNames::Service`] agree on every
//!   code outside the thirteen service overrides (plus `CR`, which only the
//!   service table knows).

mod access;
mod ace_type;
mod descriptor_kind;
pub mod trustee;

pub use access::AccessNames;
pub use ace_type::{AceType, ParseAceTypeError};
pub use descriptor_kind::DescriptorKind;
