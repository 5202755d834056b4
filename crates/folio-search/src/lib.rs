//! # folio-search
//!
//! Faceted search-and-filter engine for the Folio research library.
//!
//! Data flows one way:
//! - filter adapters (live [`FilterSheet`](adapters::FilterSheet), staged
//!   [`FilterPanel`](adapters::FilterPanel), active-filter chips) write to the
//!   single [`FilterStore`](store::FilterStore)
//! - every store mutation triggers a full [`evaluate`](evaluate::evaluate) pass
//!   over the catalog
//! - the result set is turned into a [`ResultView`](render::ResultView)
//!
//! [`ResearchPage`](page::ResearchPage) wires the pieces together for one page
//! session. Everything is synchronous and single-threaded.

pub mod adapters;
pub mod clock;
pub mod evaluate;
pub mod page;
pub mod render;
pub mod store;
