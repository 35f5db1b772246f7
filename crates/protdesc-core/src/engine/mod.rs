//! # Engine Module
//!
//! The descriptor engines. Each task module computes one family of descriptors as a pure
//! function of a validated sequence, its reference tables and explicit parameters; nothing
//! here holds state between calls.
//!
//! - **Configuration** ([`config`]) - Engine parameters and the profile configuration builder
//! - **Error Handling** ([`error`]) - The descriptor error taxonomy
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Descriptor Families** ([`tasks`]) - Composition, autocorrelation, CTD, pseudo amino
//!   acid composition, quasi-sequence-order and sub-sequence extraction

pub mod config;
pub mod error;
pub mod progress;
pub mod tasks;
