//! # Workflows Module
//!
//! High-level entry points that combine the descriptor engines into complete per-sequence
//! results.
//!
//! ## Overview
//!
//! A workflow validates every parameter against the sequence before any engine runs, so a
//! call either returns the complete descriptor vector or an error; partial results are
//! never produced.
//!
//! - **Profile Workflow** ([`profile`]) - Any selection of descriptor families, computed in
//!   a fixed order and merged into one [`DescriptorVector`](crate::core::models::descriptors::DescriptorVector)

pub mod profile;
