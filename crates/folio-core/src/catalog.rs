//! The immutable research catalog.
//!
//! A [`Catalog`] is built once at startup (from the built-in sample library or
//! a JSON file) and only exposes read access afterwards. Construction checks
//! the item invariants: ids are positive and unique, titles are non-empty.

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDate, TimeZone, Utc};

use crate::entities::ResearchItem;
use crate::enums::{Category, Format};
use crate::errors::CoreError;

/// Number of items in the built-in sample library.
pub const SAMPLE_SIZE: u32 = 16;

const SAMPLE_SIZES: [&str; 4] = ["1920x1080", "3840x2160", "800x600", "1200x800"];

/// Fixed, validated collection of research items in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ResearchItem>,
}

impl Catalog {
    /// Build a catalog, checking id and title invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a zero id, a duplicate id, or an
    /// empty title.
    pub fn new(items: Vec<ResearchItem>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CoreError::Validation(format!(
                    "research item '{}' has id 0; ids must be positive",
                    item.title
                )));
            }
            if !seen.insert(item.id) {
                return Err(CoreError::Validation(format!(
                    "duplicate research item id {}",
                    item.id
                )));
            }
            if item.title.is_empty() {
                return Err(CoreError::Validation(format!(
                    "research item {} has an empty title",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    /// The built-in 16-item library.
    ///
    /// Category, format and size all cycle with `index % 4`; dates fall on
    /// `2023-(index % 12 + 1)-(index % 28 + 1)` at midnight UTC.
    #[must_use]
    pub fn sample() -> Self {
        let items = (0..SAMPLE_SIZE)
            .map(|index| {
                let cycle = (index % 4) as usize;
                ResearchItem {
                    id: index + 1,
                    title: format!("Research Image {}", index + 1),
                    category: Category::ALL[cycle],
                    format: Format::ALL[cycle],
                    size: SAMPLE_SIZES[cycle].to_string(),
                    date: sample_date(index),
                }
            })
            .collect();
        Self { items }
    }

    /// Parse a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] for malformed JSON or unknown enum values,
    /// and [`CoreError::Validation`] when the items break catalog invariants.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let items: Vec<ResearchItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Read and parse a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_json_str`].
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    #[must_use]
    pub fn items(&self) -> &[ResearchItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResearchItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&ResearchItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ResearchItem;
    type IntoIter = std::slice::Iter<'a, ResearchItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn sample_date(index: u32) -> chrono::DateTime<Utc> {
    NaiveDate::from_ymd_opt(2023, index % 12 + 1, index % 28 + 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_default()
}
