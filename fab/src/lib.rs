//! Declarative fixture factories for tests.
//!
//! A [`Factory`] owns a declarative block that records named attribute
//! rules. Calling [`Factory::create`] replays the block, layers it over any
//! parent factory, applies per-call overrides, evaluates every rule in order
//! and assigns the results onto a fresh target value.
//!
//! ```rust
//! use fab::{Fabricate, Factory, json};
//!
//! #[derive(Debug, Default, Fabricate)]
//! struct Dog {
//!     name: String,
//!     weight: u32,
//!     speed: String,
//! }
//!
//! let dogs = Factory::<Dog>::new(|dog| {
//!     dog.attr("name", || json!("schnuffi"))
//!         .attr("weight", || json!(10))
//!         .attr_with("speed", |attrs| {
//!             let heavy = attrs.get("weight").and_then(|w| w.as_u64()) > Some(25);
//!             json!(if heavy { "slow" } else { "fast" })
//!         });
//! });
//!
//! let fifi = dogs.create_with(|dog| {
//!     dog.attr("name", || json!("fifi")).attr("weight", || json!(100));
//! })?;
//! assert_eq!(fifi.name, "fifi");
//! assert_eq!(fifi.speed, "slow");
//! # Ok::<_, std::sync::Arc<fab::FabError>>(())
//! ```
//!
//! Layering is handled by the [`merge`] module: overriding rules replace
//! base rules in place, and new rules are slotted in without reordering the
//! ones they do not touch.

pub use fab_macros::Fabricate;
pub use serde_json::{self, Value, json};

use std::sync::Arc;

mod config;
mod error;
pub mod factory;
pub mod merge;
mod result_ext;
pub mod rule;

pub use config::FabConfig;
pub use error::FabError;
pub use factory::{Fabricate, Factory};
pub use merge::{merge_rules, strict_merge};
pub use result_ext::{FabAssignmentExt, FabResultExt};
pub use rule::{Accumulator, IntoProduced, Producer, Recorder, Rule, RuleSequence};

/// Result alias used throughout the crate.
///
/// Errors are shared behind an [`Arc`] so nested factories can wrap and
/// forward them without cloning.
pub type FabResult<T> = Result<T, Arc<FabError>>;
