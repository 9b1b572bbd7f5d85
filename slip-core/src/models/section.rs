use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not match a known section label.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section '{0}'")]
pub struct ParseSectionError(pub String);

/// A named grouping of commodity rows on the slip.
///
/// Declaration order is the fixed display order: committed items are
/// re-sorted by it after every commit, and grouped views walk it top to
/// bottom. `Ord` follows declaration order, so the sort and the grouping
/// share one source of truth.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Section {
    #[default]
    APlus,
    A,
    B,
    TwoUpTor,
}

impl Section {
    /// Every section, in fixed display order.
    pub const ALL: [Section; 4] = [Section::APlus, Section::A, Section::B, Section::TwoUpTor];

    /// The label shown on the slip and stored with saved records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::APlus => "(A+)",
            Self::A => "(A)",
            Self::B => "(B)",
            Self::TwoUpTor => "2up/Tor",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sec| sec.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for sec in Section::ALL {
            assert_eq!(sec.label().parse::<Section>().unwrap(), sec);
        }
    }

    #[test]
    fn from_str_ignores_case_and_whitespace() {
        assert_eq!(" (a+) ".parse::<Section>().unwrap(), Section::APlus);
        assert_eq!("2UP/TOR".parse::<Section>().unwrap(), Section::TwoUpTor);
    }

    #[test]
    fn unknown_label_is_an_error() {
        let err = "(C)".parse::<Section>().unwrap_err();
        assert_eq!(err, ParseSectionError("(C)".to_string()));
    }

    #[test]
    fn ordering_matches_display_order() {
        let mut shuffled = vec![Section::TwoUpTor, Section::APlus, Section::B, Section::A];
        shuffled.sort();
        assert_eq!(shuffled, Section::ALL.to_vec());
    }

    #[test]
    fn default_is_the_first_section() {
        assert_eq!(Section::default(), Section::APlus);
    }
}
