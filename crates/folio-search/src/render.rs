//! Result renderer.
//!
//! Turns the current result state into a view model: a grid of tiles, the
//! empty-state message with its recovery action, or nothing yet.

use std::fmt::Write as _;

use folio_core::entities::ResearchItem;
use folio_core::enums::Category;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No research items match your criteria.";

/// The derived result set. `Pending` until the first evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
    #[default]
    Pending,
    Ready(Vec<ResearchItem>),
}

impl ResultState {
    #[must_use]
    pub fn items(&self) -> Option<&[ResearchItem]> {
        match self {
            Self::Pending => None,
            Self::Ready(items) => Some(items),
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Number of matches, `None` while pending.
    #[must_use]
    pub fn count(&self) -> Option<usize> {
        self.items().map(<[ResearchItem]>::len)
    }
}

/// Tile overlay actions. Stubs with no external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileAction {
    Download,
    OpenExternal,
}

/// The single action offered by the empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAction {
    /// Clears the search term and every filter.
    ClearFilters,
}

impl EmptyAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClearFilters => "Clear Filters",
        }
    }
}

/// One fixed-aspect grid tile and its hover/focus overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub id: u32,
    pub title: String,
    pub category: Category,
    /// `"{format} • {size}"`
    pub meta: String,
    pub actions: [TileAction; 2],
}

impl Tile {
    #[must_use]
    pub fn from_item(item: &ResearchItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            category: item.category,
            meta: format!("{} • {}", item.format, item.size),
            actions: [TileAction::Download, TileAction::OpenExternal],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultView {
    Pending,
    Grid { tiles: Vec<Tile> },
    Empty { message: &'static str, action: EmptyAction },
}

impl ResultView {
    /// Plain-text rendering for terminal hosts.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Pending => String::from("(loading)"),
            Self::Grid { tiles } => {
                let mut out = String::new();
                for tile in tiles {
                    let _ = writeln!(
                        out,
                        "#{:<3} {:<20} {:<12} {}",
                        tile.id,
                        tile.title,
                        tile.category.as_str(),
                        tile.meta
                    );
                }
                let _ = write!(out, "{} item(s)", tiles.len());
                out
            }
            Self::Empty { message, action } => format!("{message}\n[{}]", action.label()),
        }
    }
}

#[must_use]
pub fn render(state: &ResultState) -> ResultView {
    match state {
        ResultState::Pending => ResultView::Pending,
        ResultState::Ready(items) if items.is_empty() => ResultView::Empty {
            message: EMPTY_MESSAGE,
            action: EmptyAction::ClearFilters,
        },
        ResultState::Ready(items) => ResultView::Grid {
            tiles: items.iter().map(Tile::from_item).collect(),
        },
    }
}
