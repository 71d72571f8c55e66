use std::fmt;

/// Section letters that introduce the four portions of a descriptor string.
///
/// `O:` and `G:` carry a single trustee token each and are handled
/// structurally by the parser; `D:` and `S:` open the discretionary and
/// system ACLs, whose bodies hold the parenthesized entries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DescriptorKind {
    /// `O` -- the owning principal of the securable object.
    Owner,
    /// `G` -- the primary group of the securable object.
    Group,
    /// `D` -- the discretionary ACL (grants and denials).
    DiscretionaryAcl,
    /// `S` -- the system ACL (audit and alarm entries).
    SystemAcl,
}

impl DescriptorKind {
    /// Ordered list of all section kinds.
    pub const ALL: [DescriptorKind; 4] = [
        DescriptorKind::Owner,
        DescriptorKind::Group,
        DescriptorKind::DiscretionaryAcl,
        DescriptorKind::SystemAcl,
    ];

    /// Attempts to classify a section tag letter.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(Self::Owner),
            'G' => Some(Self::Group),
            'D' => Some(Self::DiscretionaryAcl),
            'S' => Some(Self::SystemAcl),
            _ => None,
        }
    }

    /// Classifies a section tag letter as an ACL opener.
    ///
    /// Only `D` and `S` introduce an ACL; `None` for every other letter,
    /// including the structural `O`/`G` tags.
    #[must_use]
    pub const fn acl_section(code: char) -> Option<Self> {
        match code {
            'D' => Some(Self::DiscretionaryAcl),
            'S' => Some(Self::SystemAcl),
            _ => None,
        }
    }

    /// Returns the section tag letter.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Owner => 'O',
            Self::Group => 'G',
            Self::DiscretionaryAcl => 'D',
            Self::SystemAcl => 'S',
        }
    }

    /// Returns the display name for this section kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Owner => "Owner",
            Self::Group => "Group",
            Self::DiscretionaryAcl => "DACL",
            Self::SystemAcl => "SACL",
        }
    }

    /// Reports whether this kind opens an ACL section.
    #[must_use]
    pub const fn is_acl(self) -> bool {
        matches!(self, Self::DiscretionaryAcl | Self::SystemAcl)
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_roundtrips_all_kinds() {
        for kind in DescriptorKind::ALL {
            assert_eq!(DescriptorKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn from_code_rejects_unknown_letters() {
        assert!(DescriptorKind::from_code('X').is_none());
        assert!(DescriptorKind::from_code('o').is_none());
        assert!(DescriptorKind::from_code(':').is_none());
    }

    #[test]
    fn acl_section_accepts_only_d_and_s() {
        assert_eq!(
            DescriptorKind::acl_section('D'),
            Some(DescriptorKind::DiscretionaryAcl)
        );
        assert_eq!(
            DescriptorKind::acl_section('S'),
            Some(DescriptorKind::SystemAcl)
        );
        assert!(DescriptorKind::acl_section('O').is_none());
        assert!(DescriptorKind::acl_section('G').is_none());
        assert!(DescriptorKind::acl_section('X').is_none());
    }

    #[test]
    fn is_acl_matches_acl_section() {
        for kind in DescriptorKind::ALL {
            assert_eq!(kind.is_acl(), DescriptorKind::acl_section(kind.code()).is_some());
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", DescriptorKind::Owner), "Owner");
        assert_eq!(format!("{}", DescriptorKind::Group), "Group");
        assert_eq!(format!("{}", DescriptorKind::DiscretionaryAcl), "DACL");
        assert_eq!(format!("{}", DescriptorKind::SystemAcl), "SACL");
    }
}
