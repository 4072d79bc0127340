//! Core data-access layer for repertory.
//!
//! - [`store`]: the record store contract and the tagged value model items are made of.
//! - [`music`]: typed entities, per-entity accessors and the profile aggregator.
//! - [`output`]: JSON presentation for terminals and HTTP bodies.

pub mod music;
pub mod output;
pub mod store;
