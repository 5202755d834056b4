//! Closed enumerations for the research library.
//!
//! Wire spellings match the values the filter selectors present
//! (`Architecture`, `JPG`, `last-week`). `FromStr` is case-insensitive so the
//! CLI boundary can accept `nature` or `png`; comparisons inside the engine are
//! always between enum values.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Parse `raw` against the string forms of a closed set, ignoring ASCII case.
fn parse_closed<T: Copy>(
    raw: &str,
    field: &str,
    all: &[T],
    as_str: impl Fn(T) -> &'static str,
) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|value| as_str(*value).eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            let accepted = all.iter().map(|v| as_str(*v)).collect::<Vec<_>>();
            CoreError::Validation(format!(
                "invalid {field} '{raw}' (expected one of: {})",
                accepted.join(", ")
            ))
        })
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Subject category of a research item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Architecture,
    Product,
    Nature,
    Abstract,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Architecture,
        Self::Product,
        Self::Nature,
        Self::Abstract,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::Product => "Product",
            Self::Nature => "Nature",
            Self::Abstract => "Abstract",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, "category", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Image file format of a research item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Format {
    Jpg,
    Png,
    Svg,
    Tiff,
}

impl Format {
    pub const ALL: [Self; 4] = [Self::Jpg, Self::Png, Self::Svg, Self::Tiff];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "JPG",
            Self::Png => "PNG",
            Self::Svg => "SVG",
            Self::Tiff => "TIFF",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed(s, "format", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Recency window for the "Date Added" filter.
///
/// The window is anchored at the evaluation instant and reaches back one
/// calendar unit; see `folio_search::evaluate::cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    LastWeek,
    LastMonth,
    LastYear,
}

impl DateRange {
    pub const ALL: [Self; 3] = [Self::LastWeek, Self::LastMonth, Self::LastYear];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastWeek => "last-week",
            Self::LastMonth => "last-month",
            Self::LastYear => "last-year",
        }
    }

    /// Selector label, e.g. "Last Week".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
            Self::LastYear => "Last Year",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `last_week` is accepted as an alias of `last-week`.
        let normalized = s.replace('_', "-");
        parse_closed(&normalized, "date range", &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// FilterKey
// ---------------------------------------------------------------------------

/// Identifies one filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Category,
    Format,
    DateRange,
}

impl FilterKey {
    pub const ALL: [Self; 3] = [Self::Category, Self::Format, Self::DateRange];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Format => "format",
            Self::DateRange => "date_range",
        }
    }

    /// Prefix used on active-filter chips ("Category: Nature").
    #[must_use]
    pub const fn chip_prefix(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Format => "Format",
            Self::DateRange => "Date",
        }
    }

    /// Label of the leading "no filter" option in the selector.
    #[must_use]
    pub const fn all_label(self) -> &'static str {
        match self {
            Self::Category => "All Categories",
            Self::Format => "All Formats",
            Self::DateRange => "All Time",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" | "date-range" => Ok(Self::DateRange),
            other => parse_closed(other, "filter key", &Self::ALL, Self::as_str),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
