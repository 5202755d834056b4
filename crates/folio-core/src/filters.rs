//! Active filter selection and typed filter values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, DateRange, FilterKey, Format};

/// The three categorical/date constraints. `None` means "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FilterSelection {
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub format: Option<Format>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl FilterSelection {
    /// Whether any field holds a value.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.category.is_some() || self.format.is_some() || self.date_range.is_some()
    }

    /// Current value of one field.
    #[must_use]
    pub const fn get(&self, key: FilterKey) -> Option<FilterValue> {
        match key {
            FilterKey::Category => match self.category {
                Some(category) => Some(FilterValue::Category(category)),
                None => None,
            },
            FilterKey::Format => match self.format {
                Some(format) => Some(FilterValue::Format(format)),
                None => None,
            },
            FilterKey::DateRange => match self.date_range {
                Some(range) => Some(FilterValue::DateRange(range)),
                None => None,
            },
        }
    }

    /// Replace the field `value` belongs to, leaving the others untouched.
    pub const fn set(&mut self, value: FilterValue) {
        match value {
            FilterValue::Category(category) => self.category = Some(category),
            FilterValue::Format(format) => self.format = Some(format),
            FilterValue::DateRange(range) => self.date_range = Some(range),
        }
    }

    /// Set one field back to "no filter".
    pub const fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::Category => self.category = None,
            FilterKey::Format => self.format = None,
            FilterKey::DateRange => self.date_range = None,
        }
    }

    /// Non-empty fields in display order (category, format, date range).
    #[must_use]
    pub fn active(&self) -> Vec<FilterValue> {
        FilterKey::ALL
            .iter()
            .filter_map(|key| self.get(*key))
            .collect()
    }
}

/// A concrete value for exactly one filter dimension.
///
/// The variant identifies the field, so a value can never be written to the
/// wrong dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    Category(Category),
    Format(Format),
    DateRange(DateRange),
}

impl FilterValue {
    #[must_use]
    pub const fn key(self) -> FilterKey {
        match self {
            Self::Category(_) => FilterKey::Category,
            Self::Format(_) => FilterKey::Format,
            Self::DateRange(_) => FilterKey::DateRange,
        }
    }

    /// Wire spelling of the value (`Nature`, `PNG`, `last-week`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::Format(format) => format.as_str(),
            Self::DateRange(range) => range.as_str(),
        }
    }

    /// Selector label (`Nature`, `PNG`, `Last Week`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category(category) => category.as_str(),
            Self::Format(format) => format.as_str(),
            Self::DateRange(range) => range.label(),
        }
    }

    /// Parse a raw value for `key`, e.g. from a CLI argument.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::errors::CoreError::Validation)
    /// when `raw` is not one of the values of that dimension.
    pub fn parse(key: FilterKey, raw: &str) -> Result<Self, crate::errors::CoreError> {
        Ok(match key {
            FilterKey::Category => Self::Category(raw.parse()?),
            FilterKey::Format => Self::Format(raw.parse()?),
            FilterKey::DateRange => Self::DateRange(raw.parse()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_inactive() {
        let selection = FilterSelection::default();
        assert!(!selection.is_active());
        assert!(selection.active().is_empty());
    }

    #[test]
    fn set_touches_one_field() {
        let mut selection = FilterSelection {
            category: Some(Category::Nature),
            format: None,
            date_range: Some(DateRange::LastYear),
        };
        selection.set(FilterValue::Format(Format::Png));
        assert_eq!(
            selection,
            FilterSelection {
                category: Some(Category::Nature),
                format: Some(Format::Png),
                date_range: Some(DateRange::LastYear),
            }
        );
    }

    #[test]
    fn clear_touches_one_field() {
        let mut selection = FilterSelection {
            category: Some(Category::Nature),
            format: Some(Format::Png),
            date_range: None,
        };
        selection.clear(FilterKey::Category);
        assert_eq!(selection.category, None);
        assert_eq!(selection.format, Some(Format::Png));
    }

    #[test]
    fn active_follows_display_order() {
        let selection = FilterSelection {
            category: Some(Category::Abstract),
            format: Some(Format::Tiff),
            date_range: Some(DateRange::LastWeek),
        };
        let keys = selection
            .active()
            .into_iter()
            .map(FilterValue::key)
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![FilterKey::Category, FilterKey::Format, FilterKey::DateRange]
        );
    }

    #[test]
    fn parse_routes_by_key() {
        assert_eq!(
            FilterValue::parse(FilterKey::DateRange, "last-month").unwrap(),
            FilterValue::DateRange(DateRange::LastMonth)
        );
        assert!(FilterValue::parse(FilterKey::Category, "PNG").is_err());
    }

    #[test]
    fn filter_value_serializes_tagged() {
        let json = serde_json::to_value(FilterValue::Format(Format::Svg)).unwrap();
        assert_eq!(json, serde_json::json!({ "key": "format", "value": "SVG" }));
    }
}
