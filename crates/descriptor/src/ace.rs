use codes::{AccessNames, AceType};

use crate::debug_parse::trace_entry_parsed;
use crate::error::AceStringError;
use crate::resolve::{AccountNameResolver, UNKNOWN_TRUSTEE, resolve_trustee};

/// One parsed access-control entry.
///
/// An entry is six `;`-separated fields: type, flags, permissions, object
/// type, inherited object type, and trustee. Construction resolves every
/// code it recognizes and keeps the rest verbatim; the six source fields are
/// immutable afterwards and readable through the getters.
///
/// # Examples
///
/// ```
/// use codes::AccessNames;
/// use descriptor::{AceEntry, NoResolver};
///
/// let ace = AceEntry::parse("A;;CCLCSWLOCRRC;;;AU", AccessNames::Generic, &NoResolver).unwrap();
/// assert_eq!(ace.entry_type(), "ACCESS_ALLOWED");
/// assert_eq!(ace.trustee(), "Authenticated Users");
/// // Permissions come back sorted by resolved name; CR is unknown to the
/// // generic table and passes through raw.
/// assert_eq!(
///     ace.permissions(),
///     ["CR", "DS_CREATE_CHILD", "DS_LIST", "DS_LIST_OBJECT", "DS_SELF", "READ_CONTROL"]
/// );
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AceEntry {
    raw: String,
    entry_type: String,
    flags: Vec<String>,
    permissions: Vec<String>,
    object_type: String,
    inherited_object_type: String,
    trustee: String,
}

impl AceEntry {
    /// Parses one entry substring.
    ///
    /// The text may carry one surrounding pair of parentheses, as it appears
    /// inside a descriptor's ACL body; it is stripped before splitting.
    /// Codes the tables do not recognize are kept raw -- only the field count
    /// is validated.
    ///
    /// # Errors
    ///
    /// Returns [`AceStringError`] when the text does not split into exactly
    /// six fields.
    pub fn parse(
        entry: &str,
        names: AccessNames,
        resolver: &dyn AccountNameResolver,
    ) -> Result<Self, AceStringError> {
        let body = entry
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(entry);

        let fields: Vec<&str> = body.split(';').collect();
        if fields.len() != 6 {
            return Err(AceStringError::new(body, fields.len()));
        }

        let entry_type = AceType::from_code(fields[0])
            .map_or_else(|| fields[0].to_owned(), |t| t.name().to_owned());

        let flags: Vec<String> = two_letter_codes(fields[1])
            .map(|code| resolve_access(names, code))
            .collect();

        let mut permissions: Vec<String> = two_letter_codes(fields[2])
            .map(|code| resolve_access(names, code))
            .collect();
        // Observable contract: permission sets display consistently
        // regardless of source ordering.
        permissions.sort();

        let trustee = resolve_trustee(fields[5], resolver, UNKNOWN_TRUSTEE);
        trace_entry_parsed(body, &entry_type, &trustee);

        Ok(Self {
            raw: body.to_owned(),
            entry_type,
            flags,
            permissions,
            object_type: fields[3].to_owned(),
            inherited_object_type: fields[4].to_owned(),
            trustee,
        })
    }

    /// Returns the original six-field entry text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the resolved entry-type name, or the raw code if unknown.
    #[must_use]
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    /// Returns the resolved flag names in encounter order.
    ///
    /// Duplicates are preserved; unknown codes appear raw.
    #[must_use]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Returns the resolved permission names, sorted lexicographically.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Returns the object-type field verbatim.
    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Returns the inherited-object-type field verbatim.
    #[must_use]
    pub fn inherited_object_type(&self) -> &str {
        &self.inherited_object_type
    }

    /// Returns the resolved trustee display name.
    ///
    /// Never empty: unresolvable trustees fall back to
    /// [`UNKNOWN_TRUSTEE`](crate::UNKNOWN_TRUSTEE).
    #[must_use]
    pub fn trustee(&self) -> &str {
        &self.trustee
    }
}

/// Splits a flags or permissions field into two-character code runs.
///
/// A trailing odd character is ignored; codes in these fields are always two
/// letters.
fn two_letter_codes(field: &str) -> impl Iterator<Item = &str> {
    let mut rest = field;
    std::iter::from_fn(move || {
        let mut chars = rest.char_indices();
        chars.next()?;
        let (second_at, second) = chars.next()?;
        let end = second_at + second.len_utf8();
        let code = &rest[..end];
        rest = &rest[end..];
        Some(code)
    })
}

fn resolve_access(names: AccessNames, code: &str) -> String {
    names
        .resolve(code)
        .map_or_else(|| code.to_owned(), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::NoResolver;

    fn parse(entry: &str) -> AceEntry {
        AceEntry::parse(entry, AccessNames::Generic, &NoResolver).unwrap()
    }

    #[test]
    fn tokenizes_packed_codes_in_pairs() {
        let codes: Vec<&str> = two_letter_codes("CCLCSWLOCRRC").collect();
        assert_eq!(codes, ["CC", "LC", "SW", "LO", "CR", "RC"]);
    }

    #[test]
    fn tokenizer_ignores_a_trailing_odd_character() {
        let codes: Vec<&str> = two_letter_codes("CCX").collect();
        assert_eq!(codes, ["CC"]);
    }

    #[test]
    fn tokenizer_handles_empty_fields() {
        assert_eq!(two_letter_codes("").count(), 0);
    }

    #[test]
    fn parses_a_minimal_allow_entry() {
        let ace = parse("A;;RC;;;BU");
        assert_eq!(ace.entry_type(), "ACCESS_ALLOWED");
        assert!(ace.flags().is_empty());
        assert_eq!(ace.permissions(), ["READ_CONTROL"]);
        assert_eq!(ace.object_type(), "");
        assert_eq!(ace.inherited_object_type(), "");
        assert_eq!(ace.trustee(), "Users");
        assert_eq!(ace.raw(), "A;;RC;;;BU");
    }

    #[test]
    fn strips_one_surrounding_paren_pair() {
        let ace = parse("(A;;RC;;;BU)");
        assert_eq!(ace.raw(), "A;;RC;;;BU");
        assert_eq!(ace.trustee(), "Users");
    }

    #[test]
    fn unknown_entry_type_passes_through_raw() {
        let ace = parse("XA;;RC;;;BU");
        assert_eq!(ace.entry_type(), "XA");
    }

    #[test]
    fn flags_keep_encounter_order_and_duplicates() {
        let ace = parse("A;CIOICI;RC;;;BU");
        assert_eq!(
            ace.flags(),
            ["CONTAINER_INHERIT", "OBJECT_INHERIT", "CONTAINER_INHERIT"]
        );
    }

    #[test]
    fn unknown_flags_pass_through_raw() {
        let ace = parse("A;CIZZ;RC;;;BU");
        assert_eq!(ace.flags(), ["CONTAINER_INHERIT", "ZZ"]);
    }

    #[test]
    fn permissions_are_sorted_by_resolved_name() {
        // WO -> WRITE_OWNER, GA -> GENERIC_ALL, CC -> DS_CREATE_CHILD:
        // resolution reorders relative to source order.
        let ace = parse("A;;WOGACC;;;BU");
        assert_eq!(ace.permissions(), ["DS_CREATE_CHILD", "GENERIC_ALL", "WRITE_OWNER"]);
    }

    #[test]
    fn empty_flags_and_permissions_yield_empty_sequences() {
        let ace = parse("A;;;;;BU");
        assert!(ace.flags().is_empty());
        assert!(ace.permissions().is_empty());
    }

    #[test]
    fn object_type_fields_pass_through_unvalidated() {
        let ace = parse("OA;;RP;bf967aba-0de6-11d0-a285-00aa003049e2;;AU");
        assert_eq!(ace.object_type(), "bf967aba-0de6-11d0-a285-00aa003049e2");
        assert_eq!(ace.inherited_object_type(), "");
    }

    #[test]
    fn five_fields_fail() {
        let err = AceEntry::parse("A;;RC;;BU", AccessNames::Generic, &NoResolver).unwrap_err();
        assert_eq!(err.field_count(), 5);
    }

    #[test]
    fn seven_fields_fail() {
        let err =
            AceEntry::parse("A;;RC;;;BU;EXTRA", AccessNames::Generic, &NoResolver).unwrap_err();
        assert_eq!(err.field_count(), 7);
        assert_eq!(err.entry(), "A;;RC;;;BU;EXTRA");
    }

    #[test]
    fn service_context_renames_rights() {
        let ace = AceEntry::parse("A;;RP;;;BU", AccessNames::Service, &NoResolver).unwrap();
        assert_eq!(ace.permissions(), ["Start"]);
    }

    #[test]
    fn unresolvable_trustee_uses_the_entry_fallback() {
        let ace = parse("A;;RC;;;S-1-5-21-1-2-3-500");
        assert_eq!(ace.trustee(), "Unknown or invalid SID.");
    }
}
