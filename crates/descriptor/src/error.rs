use thiserror::Error;

/// Error produced when an entry substring does not hold exactly six fields.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("ACE string must contain six ';'-separated fields, found {field_count}: \"{entry}\"")]
pub struct AceStringError {
    entry: String,
    field_count: usize,
}

impl AceStringError {
    pub(crate) fn new(entry: &str, field_count: usize) -> Self {
        Self {
            entry: entry.to_owned(),
            field_count,
        }
    }

    /// Returns the offending entry text.
    #[must_use]
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Returns the number of fields the entry actually split into.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.field_count
    }
}

/// Errors raised while parsing a descriptor string.
///
/// All variants abort the parse; no partial descriptor is ever returned.
/// Unrecognized individual codes are not errors -- they pass through as raw
/// text, since the format legitimately carries codes the tables do not know.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DescriptorError {
    /// The input has no recognizable owner, group, or ACL section, a tag
    /// letter outside `O`/`G`/`D`/`S`, a malformed section token, or a
    /// duplicated section.
    #[error("invalid descriptor string at \"{fragment}\"")]
    InvalidDescriptorString {
        /// The fragment of input where scanning stopped.
        fragment: String,
    },
    /// An ACL section opened with a letter other than `D` or `S`.
    #[error("ACL section must open with 'D' or 'S', found '{code}'")]
    InvalidDescriptorType {
        /// The offending tag letter.
        code: char,
    },
    /// An entry inside an ACL section was malformed.
    #[error(transparent)]
    InvalidAceString(#[from] AceStringError),
}

impl DescriptorError {
    pub(crate) fn invalid_string(fragment: &str) -> Self {
        Self::InvalidDescriptorString {
            fragment: fragment.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ace_string_error_reports_entry_and_count() {
        let err = AceStringError::new("A;;RC;;;BU;EXTRA", 7);
        assert_eq!(err.entry(), "A;;RC;;;BU;EXTRA");
        assert_eq!(err.field_count(), 7);
        let display = err.to_string();
        assert!(display.contains("six"));
        assert!(display.contains('7'));
        assert!(display.contains("EXTRA"));
    }

    #[test]
    fn invalid_string_quotes_the_fragment() {
        let err = DescriptorError::invalid_string("X:(A;;RC;;;BU)");
        assert!(err.to_string().contains("X:(A;;RC;;;BU)"));
    }

    #[test]
    fn invalid_type_names_the_letter() {
        let err = DescriptorError::InvalidDescriptorType { code: 'Q' };
        assert!(err.to_string().contains('Q'));
    }

    #[test]
    fn ace_error_converts_into_descriptor_error() {
        let inner = AceStringError::new("A;;RC", 3);
        let err: DescriptorError = inner.clone().into();
        assert_eq!(err, DescriptorError::InvalidAceString(inner));
    }
}
