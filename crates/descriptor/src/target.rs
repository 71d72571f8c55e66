use std::fmt;

use codes::AccessNames;

/// The kind of securable object a descriptor applies to.
///
/// Some access-right codes change meaning with the described object: for a
/// service, `RP` means "Start" rather than `DS_READ_PROP`. The target is the
/// one configuration input of a parse and selects which access-name context
/// the entry parser resolves against.
///
/// # Examples
///
/// ```
/// use descriptor::Target;
///
/// assert_eq!(Target::from_label("service"), Target::Service);
/// // Only the exact label "service" is recognized.
/// assert_eq!(Target::from_label("Service"), Target::Generic);
/// assert_eq!(Target::from_label("printer"), Target::Generic);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Target {
    /// Any securable object without context-sensitive right names.
    #[default]
    Generic,
    /// A service; thirteen access-right codes take service-control names.
    Service,
}

impl Target {
    /// Maps a free-form target label to a [`Target`].
    ///
    /// The exact label `"service"` selects service semantics; every other
    /// label silently means generic.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "service" {
            Self::Service
        } else {
            Self::Generic
        }
    }

    /// Returns the access-name lookup context for this target.
    #[must_use]
    pub const fn access_names(self) -> AccessNames {
        match self {
            Self::Generic => AccessNames::Generic,
            Self::Service => AccessNames::Service,
        }
    }

    /// Returns the target label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Service => "service",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_generic() {
        assert_eq!(Target::default(), Target::Generic);
    }

    #[test]
    fn only_the_exact_service_label_selects_service() {
        assert_eq!(Target::from_label("service"), Target::Service);
        assert_eq!(Target::from_label("SERVICE"), Target::Generic);
        assert_eq!(Target::from_label(" service"), Target::Generic);
        assert_eq!(Target::from_label(""), Target::Generic);
        assert_eq!(Target::from_label("file"), Target::Generic);
    }

    #[test]
    fn access_names_follow_the_target() {
        assert_eq!(Target::Generic.access_names(), AccessNames::Generic);
        assert_eq!(Target::Service.access_names(), AccessNames::Service);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(format!("{}", Target::Generic), "generic");
        assert_eq!(format!("{}", Target::Service), "service");
    }
}
