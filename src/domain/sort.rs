//! Sort criteria offered to the user.

use std::fmt;
use std::str::FromStr;

/// Field used to order the loaded page, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// Record identifier.
    #[default]
    Id,
    /// View count.
    Views,
    /// Download count.
    Downloads,
    /// Number of collections the image belongs to.
    Collections,
}

impl SortCriterion {
    /// All criteria in cycling order.
    pub const ALL: [Self; 4] = [Self::Id, Self::Views, Self::Downloads, Self::Collections];

    /// JSON field name this criterion sorts by.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Views => "views",
            Self::Downloads => "downloads",
            Self::Collections => "collections",
        }
    }

    /// Human-readable label for the pagination bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Views => "Views",
            Self::Downloads => "Downloads",
            Self::Collections => "Collections",
        }
    }

    /// The next criterion, wrapping around.
    #[must_use]
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for SortCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.field_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort criterion: {s}"))
    }
}
