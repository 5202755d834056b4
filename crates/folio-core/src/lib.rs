//! # folio-core
//!
//! Core types, closed enumerations, and error types for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - The [`ResearchItem`](entities::ResearchItem) entity
//! - Closed enumerations for category, format, and date range
//! - The active filter selection and typed filter values
//! - The immutable, validated [`Catalog`](catalog::Catalog)
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
