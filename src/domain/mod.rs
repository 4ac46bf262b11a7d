//! Domain layer containing the fortune catalog and upload entities.
//!
//! # Architecture
//!
//! - [`entities`] - Fortune and upload data structures
//! - [`catalog`] - The fixed fortune list and random selection
//! - [`repositories`] - Upload storage trait
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod catalog;
pub mod entities;
pub mod repositories;
