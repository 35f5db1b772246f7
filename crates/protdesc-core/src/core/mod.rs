//! # Core Module
//!
//! Stateless building blocks shared by every descriptor engine.
//!
//! - **Sequence Representation** ([`models`]) - The amino acid alphabet, validated protein
//!   sequences and ordered descriptor vectors
//! - **Reference Data** ([`tables`]) - Property tables, CTD group tables and residue
//!   distance matrices, including the built-in literature scales
//! - **File I/O** ([`io`]) - Loading user-supplied tables from TOML, CSV and AAindex files
//! - **Numerics** ([`utils`]) - Rounding and summary statistics

pub mod io;
pub mod models;
pub mod tables;
pub mod utils;
