#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Shared test utilities for the sddl workspace.
//!
//! Canned [`AccountNameResolver`] implementations so integration tests can
//! exercise the trustee resolution chain without an operating system or
//! directory service behind it.

use std::sync::Mutex;

use descriptor::AccountNameResolver;

/// Resolver backed by a fixed identifier-to-name map.
#[derive(Debug, Default)]
pub struct StaticResolver {
    entries: Vec<(String, String)>,
}

impl StaticResolver {
    /// Builds a resolver from `(identifier, display name)` pairs.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(sid, name)| (sid.into(), name.into()))
                .collect(),
        }
    }
}

impl AccountNameResolver for StaticResolver {
    fn resolve_account_name(&self, sid: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(key, _)| key == sid)
            .map(|(_, name)| name.clone())
    }
}

/// Resolver that records every identifier it is asked about.
///
/// Wraps an inner resolver and keeps the queried identifiers, so tests can
/// assert which tokens reached the external collaborator -- in particular
/// that well-known codes never do.
#[derive(Debug, Default)]
pub struct RecordingResolver<R> {
    inner: R,
    queries: Mutex<Vec<String>>,
}

impl<R> RecordingResolver<R> {
    /// Wraps `inner`, recording every query passed through to it.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Returns the identifiers queried so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if a previous caller panicked while recording a query.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("query log poisoned").clone()
    }
}

impl<R: AccountNameResolver> AccountNameResolver for RecordingResolver<R> {
    fn resolve_account_name(&self, sid: &str) -> Option<String> {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push(sid.to_owned());
        self.inner.resolve_account_name(sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use descriptor::NoResolver;

    #[test]
    fn static_resolver_resolves_known_pairs() {
        let resolver = StaticResolver::from_pairs([("S-1-5-18", "NT AUTHORITY\\SYSTEM")]);
        assert_eq!(
            resolver.resolve_account_name("S-1-5-18").as_deref(),
            Some("NT AUTHORITY\\SYSTEM")
        );
        assert_eq!(resolver.resolve_account_name("S-1-5-19"), None);
    }

    #[test]
    fn recording_resolver_logs_queries_in_order() {
        let resolver = RecordingResolver::new(NoResolver);
        assert_eq!(resolver.resolve_account_name("S-1-1-0"), None);
        assert_eq!(resolver.resolve_account_name("S-1-2-0"), None);
        assert_eq!(resolver.queries(), ["S-1-1-0", "S-1-2-0"]);
    }
}
