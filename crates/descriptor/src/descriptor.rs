use codes::DescriptorKind;

use crate::ace::AceEntry;
use crate::debug_parse::trace_section_found;
use crate::error::DescriptorError;
use crate::resolve::{AccountNameResolver, NoResolver, UNKNOWN_ACCOUNT, resolve_trustee};
use crate::target::Target;

/// The parsed form of one descriptor string.
///
/// A descriptor holds up to three sections -- owner (`O:`), group (`G:`), and
/// one ACL (`D:` or `S:`) -- in any order. Parsing resolves the owner and
/// group trustees, classifies the ACL kind, and parses every parenthesized
/// entry in source order. The result is an immutable value owned by the
/// caller; the parser never re-sorts entries (see
/// [`sort_by_trustee`](crate::sort_by_trustee) for an opt-in sorted view).
///
/// # Examples
///
/// ```
/// use codes::DescriptorKind;
/// use descriptor::AccessDescriptor;
///
/// let acl = AccessDescriptor::parse("O:AOG:DAD:(A;;RPWPCCDCLCSWRCWDWOGA;;;S-1-0-0)").unwrap();
/// assert_eq!(acl.kind(), Some(DescriptorKind::DiscretionaryAcl));
/// assert_eq!(acl.owner_account(), Some("Account Operators"));
/// assert_eq!(acl.group_account(), Some("Domain Admins"));
/// assert_eq!(acl.entries().len(), 1);
/// assert_eq!(acl.entries()[0].trustee(), "Unknown or invalid SID.");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccessDescriptor {
    raw: String,
    kind: Option<DescriptorKind>,
    owner_sid: Option<String>,
    owner_account: Option<String>,
    group_sid: Option<String>,
    group_account: Option<String>,
    entries: Vec<AceEntry>,
}

impl AccessDescriptor {
    /// Parses a descriptor with generic access-right names and no external
    /// account-name resolver.
    ///
    /// Trustee tokens outside the well-known table fall back to their
    /// "unknown" literals; see [`parse_with_resolver`](Self::parse_with_resolver)
    /// to plug in a directory service.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when the input does not match the
    /// descriptor grammar or an entry is malformed.
    pub fn parse(input: &str) -> Result<Self, DescriptorError> {
        Self::parse_with_resolver(input, Target::Generic, &NoResolver)
    }

    /// Parses a descriptor for a specific target object kind.
    ///
    /// For [`Target::Service`] the thirteen context-sensitive access-right
    /// codes resolve to their service-control names.
    ///
    /// # Examples
    ///
    /// ```
    /// use descriptor::{AccessDescriptor, Target};
    ///
    /// let acl = AccessDescriptor::parse_for_target("D:(A;;RP;;;BU)", Target::Service).unwrap();
    /// assert_eq!(acl.entries()[0].permissions(), ["Start"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when the input does not match the
    /// descriptor grammar or an entry is malformed.
    pub fn parse_for_target(input: &str, target: Target) -> Result<Self, DescriptorError> {
        Self::parse_with_resolver(input, target, &NoResolver)
    }

    /// Parses a descriptor with an external account-name resolver.
    ///
    /// The resolver is consulted only for trustee tokens that are not
    /// well-known abbreviations; its failures are treated uniformly as "no
    /// name available" and surface as the fallback literals
    /// [`UNKNOWN_ACCOUNT`](crate::UNKNOWN_ACCOUNT) (owner/group) and
    /// [`UNKNOWN_TRUSTEE`](crate::UNKNOWN_TRUSTEE) (entries).
    ///
    /// Sections are evaluated owner, then group, then ACL, regardless of
    /// their order in the input.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] when the input does not match the
    /// descriptor grammar or an entry is malformed.
    pub fn parse_with_resolver(
        input: &str,
        target: Target,
        resolver: &dyn AccountNameResolver,
    ) -> Result<Self, DescriptorError> {
        let sections = scan_sections(input)?;
        let names = target.access_names();

        let mut descriptor = Self {
            raw: input.to_owned(),
            kind: None,
            owner_sid: None,
            owner_account: None,
            group_sid: None,
            group_account: None,
            entries: Vec::new(),
        };

        if let Some(token) = sections.owner {
            trace_section_found(DescriptorKind::Owner.name(), token);
            descriptor.owner_sid = Some(token.to_owned());
            descriptor.owner_account = Some(resolve_trustee(token, resolver, UNKNOWN_ACCOUNT));
        }

        if let Some(token) = sections.group {
            trace_section_found(DescriptorKind::Group.name(), token);
            descriptor.group_sid = Some(token.to_owned());
            descriptor.group_account = Some(resolve_trustee(token, resolver, UNKNOWN_ACCOUNT));
        }

        if let Some((tag, body)) = sections.acl {
            let kind = DescriptorKind::acl_section(tag)
                .ok_or(DescriptorError::InvalidDescriptorType { code: tag })?;
            trace_section_found(kind.name(), body);
            descriptor.kind = Some(kind);
            for entry in entry_bodies(body) {
                descriptor.entries.push(AceEntry::parse(entry, names, resolver)?);
            }
        }

        Ok(descriptor)
    }

    /// Returns the original input string.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the ACL kind, or `None` when the input carried only owner
    /// and group sections.
    #[must_use]
    pub const fn kind(&self) -> Option<DescriptorKind> {
        self.kind
    }

    /// Returns the raw owner token, if an owner section was present.
    #[must_use]
    pub fn owner_sid(&self) -> Option<&str> {
        self.owner_sid.as_deref()
    }

    /// Returns the resolved owner account name, if an owner section was
    /// present.
    #[must_use]
    pub fn owner_account(&self) -> Option<&str> {
        self.owner_account.as_deref()
    }

    /// Returns the raw group token, if a group section was present.
    #[must_use]
    pub fn group_sid(&self) -> Option<&str> {
        self.group_sid.as_deref()
    }

    /// Returns the resolved group account name, if a group section was
    /// present.
    #[must_use]
    pub fn group_account(&self) -> Option<&str> {
        self.group_account.as_deref()
    }

    /// Returns the entries in source order.
    ///
    /// Non-empty only when an ACL section was present.
    #[must_use]
    pub fn entries(&self) -> &[AceEntry] {
        &self.entries
    }

    /// Consumes the descriptor and returns its entries.
    ///
    /// Useful with [`sort_by_trustee`](crate::sort_by_trustee) when a
    /// trustee-ordered view is wanted.
    #[must_use]
    pub fn into_entries(self) -> Vec<AceEntry> {
        self.entries
    }
}

/// The raw section slices of one descriptor string.
#[derive(Default)]
struct Sections<'a> {
    owner: Option<&'a str>,
    group: Option<&'a str>,
    acl: Option<(char, &'a str)>,
}

/// Splits the input into owner/group/ACL sections in one left-to-right pass.
///
/// A section opens with a tag letter in {O,G,D,S} followed by `:`. Owner and
/// group tokens run to the next tag and must be non-empty without
/// `:`/`(`/`)`; an ACL section consumes the remainder of the input. Anything
/// else -- including a duplicated section -- is a malformed descriptor.
fn scan_sections(input: &str) -> Result<Sections<'_>, DescriptorError> {
    if input.is_empty() {
        return Err(DescriptorError::invalid_string(input));
    }

    let mut sections = Sections::default();
    let mut rest = input;

    while !rest.is_empty() {
        let mut chars = rest.chars();
        let Some(tag) = chars.next() else { break };
        if chars.next() != Some(':') {
            return Err(DescriptorError::invalid_string(rest));
        }
        let body = &rest[tag.len_utf8() + 1..];

        match tag {
            'O' | 'G' => {
                let end = next_tag_offset(body);
                let token = &body[..end];
                if token.is_empty() || token.contains([':', '(', ')']) {
                    return Err(DescriptorError::invalid_string(rest));
                }
                let slot = if tag == 'O' {
                    &mut sections.owner
                } else {
                    &mut sections.group
                };
                if slot.is_some() {
                    return Err(DescriptorError::invalid_string(rest));
                }
                *slot = Some(token);
                rest = &body[end..];
            }
            'D' | 'S' => {
                if sections.acl.is_some() {
                    return Err(DescriptorError::invalid_string(rest));
                }
                sections.acl = Some((tag, body));
                rest = "";
            }
            _ => return Err(DescriptorError::invalid_string(rest)),
        }
    }

    Ok(sections)
}

/// Byte offset of the next section tag in `body`: the character preceding
/// the next `:`, since colons appear only at section boundaries. Returns
/// `body.len()` when no colon follows (a leading colon yields no boundary
/// and the malformed token is caught by the caller).
fn next_tag_offset(body: &str) -> usize {
    match body.find(':') {
        None | Some(0) => body.len(),
        Some(colon) => body[..colon]
            .char_indices()
            .last()
            .map_or(body.len(), |(i, _)| i),
    }
}

/// Extracts the parenthesized, non-nested entry bodies of an ACL section,
/// left to right.
///
/// Text outside parentheses is ignored, as are empty `()` pairs; a `(` seen
/// while a group is open restarts the group, so the innermost run wins.
fn entry_bodies(body: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut open = None;
    for (i, ch) in body.char_indices() {
        match ch {
            '(' => open = Some(i + 1),
            ')' => {
                if let Some(start) = open.take() {
                    if start < i {
                        out.push(&body[start..i]);
                    }
                }
            }
            _ => {}
        }
    }
    out
}
