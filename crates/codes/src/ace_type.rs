use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Entry-type codes for access-control entries.
///
/// The one- and two-letter codes occupy the first field of an SDDL entry and
/// classify it as an allow, deny, audit, or alarm record, or one of the
/// object variants that carry extra type GUIDs. The canonical names mirror
/// the `ACCESS_*`/`SYSTEM_*` identifiers used by the platform headers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AceType {
    /// `A` -- grants the listed rights to the trustee.
    AccessAllowed,
    /// `D` -- denies the listed rights to the trustee.
    AccessDenied,
    /// `OA` -- allow entry scoped to an object type.
    AccessAllowedObject,
    /// `OD` -- deny entry scoped to an object type.
    AccessDeniedObject,
    /// `AU` -- generates audit records for the listed accesses.
    SystemAudit,
    /// `AL` -- generates alarm records for the listed accesses.
    SystemAlarm,
    /// `OU` -- audit entry scoped to an object type.
    SystemAuditObject,
    /// `OL` -- alarm entry scoped to an object type.
    SystemAlarmObject,
}

/// Error returned when parsing an [`AceType`] from its short code fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown ACE type code: \"{invalid_code}\"")]
pub struct ParseAceTypeError {
    invalid_code: String,
}

impl ParseAceTypeError {
    /// Creates a parse error that records the unrecognized code.
    #[must_use]
    pub fn new(invalid_code: &str) -> Self {
        Self {
            invalid_code: invalid_code.to_owned(),
        }
    }

    /// Returns the code that failed to parse.
    #[must_use]
    pub fn invalid_code(&self) -> &str {
        &self.invalid_code
    }
}

impl AceType {
    /// Ordered list of all entry-type codes.
    ///
    /// Single-letter codes precede their object variants so callers can
    /// iterate deterministically when building exhaustive tables or tests.
    pub const ALL: [AceType; 8] = [
        AceType::AccessAllowed,
        AceType::AccessDenied,
        AceType::AccessAllowedObject,
        AceType::AccessDeniedObject,
        AceType::SystemAudit,
        AceType::SystemAlarm,
        AceType::SystemAuditObject,
        AceType::SystemAlarmObject,
    ];

    /// Returns the ordered list of all known entry types.
    #[must_use]
    pub const fn all() -> &'static [AceType; 8] {
        &Self::ALL
    }

    /// Attempts to construct an [`AceType`] from its SDDL short code.
    ///
    /// Matching is exact and case-sensitive; `None` signals an unrecognized
    /// code, which callers typically pass through verbatim.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::AccessAllowed),
            "D" => Some(Self::AccessDenied),
            "OA" => Some(Self::AccessAllowedObject),
            "OD" => Some(Self::AccessDeniedObject),
            "AU" => Some(Self::SystemAudit),
            "AL" => Some(Self::SystemAlarm),
            "OU" => Some(Self::SystemAuditObject),
            "OL" => Some(Self::SystemAlarmObject),
            _ => None,
        }
    }

    /// Returns the SDDL short code for this entry type.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AccessAllowed => "A",
            Self::AccessDenied => "D",
            Self::AccessAllowedObject => "OA",
            Self::AccessDeniedObject => "OD",
            Self::SystemAudit => "AU",
            Self::SystemAlarm => "AL",
            Self::SystemAuditObject => "OU",
            Self::SystemAlarmObject => "OL",
        }
    }

    /// Returns the canonical display name for this entry type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccessAllowed => "ACCESS_ALLOWED",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::AccessAllowedObject => "ACCESS_ALLOWED_OBJECT",
            Self::AccessDeniedObject => "ACCESS_DENIED_OBJECT",
            Self::SystemAudit => "SYSTEM_AUDIT",
            Self::SystemAlarm => "SYSTEM_ALARM",
            Self::SystemAuditObject => "SYSTEM_AUDIT_OBJECT",
            Self::SystemAlarmObject => "SYSTEM_ALARM_OBJECT",
        }
    }

    /// Reports whether this entry type carries object-type GUID fields.
    #[must_use]
    pub const fn is_object_variant(self) -> bool {
        matches!(
            self,
            Self::AccessAllowedObject
                | Self::AccessDeniedObject
                | Self::SystemAuditObject
                | Self::SystemAlarmObject
        )
    }
}

impl fmt::Display for AceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AceType {
    type Err = ParseAceTypeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| ParseAceTypeError::new(code))
    }
}
