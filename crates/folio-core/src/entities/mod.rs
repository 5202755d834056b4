//! Entity structs for Folio domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and catalog schema validation.

mod research;

pub use research::ResearchItem;
