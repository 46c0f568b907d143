//! Error types produced while recording, merging and applying rules.

mod constructors;
mod conversions;
mod types;

pub use types::FabError;
