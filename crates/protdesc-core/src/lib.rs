//! # protdesc Core Library
//!
//! Sequence-derived descriptors for proteins and peptides: amino acid composition,
//! autocorrelation, CTD, pseudo amino acid composition and quasi-sequence-order.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Validated sequences, descriptor vectors, the built-in
//!   property, group and distance tables, and loaders for user-supplied tables.
//!
//! - **[`engine`]: The Descriptor Engines.** One task module per descriptor family. Every
//!   engine is a pure function of a sequence, its tables and its parameters.
//!
//! - **[`workflows`]: The Public API.** Combines engine outputs into one descriptor
//!   profile per sequence.

pub mod core;
pub mod engine;
pub mod workflows;
