//! Primary error enum for factory resolution and creation.

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while building a fixture.
///
/// Every variant aborts the current `create` call; no partially populated
/// target is ever returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FabError {
    /// A declaration does not match the rule syntax.
    #[error("invalid rule '{name}': {reason}")]
    InvalidRule {
        /// Name given to the offending declaration.
        name: String,
        /// Why the declaration was rejected.
        reason: String,
    },

    /// The same rule name was declared more than once in one block.
    #[error("duplicate call of {}", .names.join(", "))]
    DuplicateRule {
        /// Every repeated name, in first-occurrence order.
        names: Vec<String>,
    },

    /// Overrides named base rules in an order the base does not allow.
    #[error("unordered call of {}", .names.join(", "))]
    UnorderedCall {
        /// Every name left repeated after merging, in first-occurrence order.
        names: Vec<String>,
    },

    /// The target type has no attribute with this name.
    #[error("{target} has no attribute '{attribute}'")]
    UnknownAttribute {
        /// Name of the target type.
        target: &'static str,
        /// Attribute the factory tried to assign.
        attribute: String,
    },

    /// A produced value could not be converted into the attribute's type.
    #[error("cannot assign '{attribute}' on {target}: {source}")]
    Assignment {
        /// Name of the target type.
        target: &'static str,
        /// Attribute the factory tried to assign.
        attribute: String,
        /// Conversion failure reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },

    /// A created target could not be serialised for use in another factory.
    #[error("cannot serialise {target}: {source}")]
    Serialize {
        /// Name of the target type.
        target: &'static str,
        /// Serialisation failure reported by `serde_json`.
        #[source]
        source: serde_json::Error,
    },

    /// A fallible producer returned an error.
    #[error("rule '{rule}' failed: {source}")]
    Production {
        /// Rule whose producer failed.
        rule: String,
        /// Error raised by the producer.
        #[source]
        source: Arc<FabError>,
    },

    /// Factory configuration could not be loaded.
    #[error("failed to load factory configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}
