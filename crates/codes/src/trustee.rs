//! Well-known trustee abbreviations.
//!
//! Two-letter codes for the principals every installation knows about:
//! built-in groups, domain groups, service identities, and the mandatory
//! integrity levels. Codes outside this table are security-identifier
//! strings and go to the external account-name resolver instead.

/// Ordered list of all well-known trustee codes.
///
/// Useful for exhaustive iteration in tests and tooling; the order matches
/// [`account_name`]'s table.
pub const CODES: [&str; 44] = [
    "AO", "RU", "AN", "AU", "BA", "BG", "BO", "BU", "CA", "CD", "CG", "CO", "DA", "DC", "DD",
    "DG", "DU", "EA", "ED", "RO", "WD", "PA", "IU", "LA", "LG", "LS", "SY", "NU", "LW", "ME",
    "HI", "SI", "NO", "NS", "PO", "PS", "PU", "RS", "RD", "RE", "RC", "SA", "SO", "SU",
];

/// Resolves a well-known trustee code to its display name.
///
/// Exact, case-sensitive match; `None` means the token is not a well-known
/// abbreviation (it may still be a resolvable security identifier).
#[must_use]
pub fn account_name(code: &str) -> Option<&'static str> {
    match code {
        "AO" => Some("Account Operators"),
        "RU" => Some("Pre-Win2k Compatibility Access"),
        "AN" => Some("Anonymous"),
        "AU" => Some("Authenticated Users"),
        "BA" => Some("Administrators"),
        "BG" => Some("Guests"),
        "BO" => Some("Backup Operators"),
        "BU" => Some("Users"),
        "CA" => Some("Certificate Publishers"),
        "CD" => Some("Certificate Services DCOM Access"),
        "CG" => Some("Creator Group"),
        "CO" => Some("Creator Owner"),
        "DA" => Some("Domain Admins"),
        "DC" => Some("Domain Computers"),
        "DD" => Some("Domain Controllers"),
        "DG" => Some("Domain Guests"),
        "DU" => Some("Domain Users"),
        "EA" => Some("Enterprise Admins"),
        "ED" => Some("Enterprise Domain Controllers"),
        "RO" => Some("Enterprise Read-Only Domain Controllers"),
        "WD" => Some("Everyone"),
        "PA" => Some("Group Policy Admins"),
        "IU" => Some("Interactive Users"),
        "LA" => Some("Local Administrator"),
        "LG" => Some("Local Guest"),
        "LS" => Some("Local Service"),
        "SY" => Some("Local System"),
        "NU" => Some("Network"),
        "LW" => Some("Low Integrity"),
        "ME" => Some("Medium Integrity"),
        "HI" => Some("High Integrity"),
        "SI" => Some("System Integrity"),
        "NO" => Some("Network Configuration Operators"),
        "NS" => Some("Network Service"),
        "PO" => Some("Printer Operators"),
        "PS" => Some("Self"),
        "PU" => Some("Power Users"),
        "RS" => Some("RAS Servers"),
        "RD" => Some("Remote Desktop Users"),
        "RE" => Some("Replicator"),
        "RC" => Some("Restricted Code"),
        "SA" => Some("Schema Administrators"),
        "SO" => Some("Server Operators"),
        "SU" => Some("Service"),
        _ => None,
    }
}
