//! Structured tracing for descriptor parsing.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag
//! and produces no-op inline functions when disabled.

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const PARSE_TARGET: &str = "sddl::parse";

/// Traces a section discovered during the scan.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_section_found(kind: &str, body: &str) {
    tracing::debug!(
        target: PARSE_TARGET,
        kind = %kind,
        body = %body,
        "section_found"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_section_found(_kind: &str, _body: &str) {}

/// Traces one parsed entry.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_entry_parsed(entry: &str, entry_type: &str, trustee: &str) {
    tracing::trace!(
        target: PARSE_TARGET,
        entry = %entry,
        entry_type = %entry_type,
        trustee = %trustee,
        "entry_parsed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_entry_parsed(_entry: &str, _entry_type: &str, _trustee: &str) {}

/// Traces the outcome of one trustee resolution.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_trustee_resolved(code: &str, resolved: &str) {
    tracing::trace!(
        target: PARSE_TARGET,
        code = %code,
        resolved = %resolved,
        "trustee_resolved"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_trustee_resolved(_code: &str, _resolved: &str) {}
