//! Test helpers shared across crates.
//!
//! This crate currently provides `figment::Jail` wrappers for isolating the
//! `FAB_*` environment variables read by factory configuration.

pub mod figment;
