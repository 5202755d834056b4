use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Format};

/// A research item: one image in the visual research library.
///
/// Items are owned by the [`Catalog`](crate::catalog::Catalog) and never
/// mutated after it is built.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchItem {
    /// Positive, unique within a catalog.
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub format: Format,
    /// Dimension string such as `1920x1080`. Not interpreted.
    pub size: String,
    /// When the item was added. Only used by the date-range filter.
    pub date: DateTime<Utc>,
}
