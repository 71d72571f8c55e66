use crate::debug_parse::trace_trustee_resolved;

/// Fallback literal for owner and group tokens that resolve to nothing.
pub const UNKNOWN_ACCOUNT: &str = "Unknown";

/// Fallback literal for entry trustees that resolve to nothing.
///
/// Distinct from [`UNKNOWN_ACCOUNT`] -- the two call sites have always
/// reported differently and existing consumers match on the exact text.
pub const UNKNOWN_TRUSTEE: &str = "Unknown or invalid SID.";

/// External collaborator translating security-identifier strings to account
/// names.
///
/// The identifier is passed through opaquely; implementations typically ask
/// the operating system or a directory service. Any failure -- not found,
/// transport error, timeout -- is reported uniformly as `None`. The call may
/// block; bounding it with a timeout is the implementor's concern, not the
/// parser's.
pub trait AccountNameResolver {
    /// Resolves an identifier to a display name such as `DOMAIN\user`.
    fn resolve_account_name(&self, sid: &str) -> Option<String>;
}

/// Null resolver for callers without a directory service; never resolves.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResolver;

impl AccountNameResolver for NoResolver {
    fn resolve_account_name(&self, _sid: &str) -> Option<String> {
        None
    }
}

/// One step of the trustee resolution chain.
///
/// The chain is ordered data rather than nested conditionals so the fallback
/// order stays auditable and each step testable on its own. Steps are tried
/// in [`CHAIN`](Self::CHAIN) order; the first to produce a name wins, and a
/// per-call-site fallback literal covers the case where none does.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionStep {
    /// Exact match against the well-known trustee table.
    WellKnown,
    /// Delegation to the external [`AccountNameResolver`].
    External,
}

impl ResolutionStep {
    /// The resolution order: well-known table first, then the collaborator.
    ///
    /// A code found in the table never reaches the external resolver.
    pub const CHAIN: [ResolutionStep; 2] = [ResolutionStep::WellKnown, ResolutionStep::External];

    /// Applies this step to a trustee token.
    #[must_use]
    pub fn apply(self, code: &str, resolver: &dyn AccountNameResolver) -> Option<String> {
        match self {
            Self::WellKnown => codes::trustee::account_name(code).map(str::to_owned),
            Self::External => resolver.resolve_account_name(code),
        }
    }
}

/// Runs the full chain and guarantees a displayable name.
pub(crate) fn resolve_trustee(
    code: &str,
    resolver: &dyn AccountNameResolver,
    fallback: &'static str,
) -> String {
    let resolved = ResolutionStep::CHAIN
        .iter()
        .find_map(|step| step.apply(code, resolver))
        .unwrap_or_else(|| fallback.to_owned());
    trace_trustee_resolved(code, &resolved);
    resolved
}
