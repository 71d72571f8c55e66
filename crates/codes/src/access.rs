use std::fmt;

/// Lookup context for the shared flag and access-right namespace.
///
/// Entry flags (inheritance, audit conditions) and access-right bits share a
/// single two-letter namespace. Most codes mean the same thing everywhere,
/// but when the described object is a service, thirteen codes take
/// service-control meanings: `RP` is "Start" rather than `DS_READ_PROP`,
/// `WP` is "Stop", and so on.
///
/// The context is an immutable value selected once per parse; the service
/// variant layers its override entries over the shared table instead of
/// mutating it, so lookups under different contexts never interfere.
///
/// # Examples
///
/// ```
/// use codes::AccessNames;
///
/// assert_eq!(AccessNames::Generic.resolve("RP"), Some("DS_READ_PROP"));
/// assert_eq!(AccessNames::Service.resolve("RP"), Some("Start"));
/// // Codes outside the override set resolve identically.
/// assert_eq!(AccessNames::Service.resolve("CI"), Some("CONTAINER_INHERIT"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AccessNames {
    /// Generic access-right names, used for every target except services.
    #[default]
    Generic,
    /// Service-control names layered over the generic table.
    Service,
}

impl AccessNames {
    /// Resolves a flag or access-right code to its canonical name.
    ///
    /// Matching is exact and case-sensitive. `None` signals an unrecognized
    /// code; callers decide whether to echo the raw code or reject it.
    #[must_use]
    pub fn resolve(self, code: &str) -> Option<&'static str> {
        match self {
            Self::Generic => shared_name(code),
            Self::Service => service_override(code).or_else(|| shared_name(code)),
        }
    }

    /// Returns the context label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for AccessNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared flag/right table.
///
/// `FA` doubles historically as both the failed-access audit flag and the
/// file-all-access right; the file right is the observable mapping and is
/// what this table answers.
fn shared_name(code: &str) -> Option<&'static str> {
    match code {
        // Entry flags
        "CI" => Some("CONTAINER_INHERIT"),
        "OI" => Some("OBJECT_INHERIT"),
        "NP" => Some("NO_PROPAGATE_INHERIT"),
        "IO" => Some("INHERIT_ONLY"),
        "ID" => Some("INHERITED"),
        "SA" => Some("SUCCESSFUL_ACCESS"),
        // Generic access rights
        "GA" => Some("GENERIC_ALL"),
        "GR" => Some("GENERIC_READ"),
        "GW" => Some("GENERIC_WRITE"),
        "GX" => Some("GENERIC_EXECUTE"),
        // Standard access rights
        "RC" => Some("READ_CONTROL"),
        "SD" => Some("DELETE"),
        "WD" => Some("WRITE_DAC"),
        "WO" => Some("WRITE_OWNER"),
        // Directory service object access rights
        "RP" => Some("DS_READ_PROP"),
        "WP" => Some("DS_WRITE_PROP"),
        "CC" => Some("DS_CREATE_CHILD"),
        "DC" => Some("DS_DELETE_CHILD"),
        "LC" => Some("DS_LIST"),
        "SW" => Some("DS_SELF"),
        "LO" => Some("DS_LIST_OBJECT"),
        "DT" => Some("DS_DELETE_TREE"),
        // File access rights
        "FA" => Some("FILE_ALL_ACCESS"),
        "FR" => Some("FILE_GENERIC_READ"),
        "FW" => Some("FILE_GENERIC_WRITE"),
        "FX" => Some("FILE_GENERIC_EXECUTE"),
        // Registry access rights
        "KA" => Some("KEY_ALL_ACCESS"),
        "KR" => Some("KEY_READ"),
        "KW" => Some("KEY_WRITE"),
        "KE" => Some("KEY_EXECUTE"),
        _ => None,
    }
}

/// Service-control override entries.
///
/// `CR` has no generic meaning; it resolves only under the service context.
fn service_override(code: &str) -> Option<&'static str> {
    match code {
        "CC" => Some("Query Configuration"),
        "DC" => Some("Change Configuration"),
        "LC" => Some("Query State"),
        "SW" => Some("Enumerate Dependencies"),
        "RP" => Some("Start"),
        "WP" => Some("Stop"),
        "DT" => Some("Pause"),
        "LO" => Some("Interrogate"),
        "CR" => Some("User Defined"),
        "SD" => Some("Delete"),
        "RC" => Some("Read the Security Descriptor"),
        "WD" => Some("Change Permissions"),
        "WO" => Some("Change Owner"),
        _ => None,
    }
}
