//! Rules and the recorder that captures them from declarative blocks.
//!
//! A declarative block is any closure taking `&mut Recorder`. Each
//! declaration appends a [`Rule`] without running its producer; producers
//! only run once the final, merged sequence is evaluated by a factory.

mod accumulator;
mod producer;
mod recorder;
mod sequence;

pub use accumulator::Accumulator;
pub use producer::{IntoProduced, Producer};
pub use recorder::Recorder;
pub use sequence::RuleSequence;

pub(crate) use sequence::repeated_names;

use std::sync::Arc;

use serde_json::Value;
use unicode_ident::{is_xid_continue, is_xid_start};

use crate::{FabError, FabResult};

/// A named attribute-production instruction.
///
/// Cloning a rule shares its producer.
#[derive(Clone, Debug)]
pub struct Rule {
    name: String,
    producer: Producer,
}

impl Rule {
    /// Build a rule after checking that `name` is a valid attribute
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FabError::InvalidRule`] when `name` is empty or is not an
    /// identifier, using the same Unicode XID rules as Rust field names.
    ///
    /// # Examples
    ///
    /// ```
    /// use fab::{Producer, Rule, json};
    ///
    /// let rule = Rule::new("age", Producer::constant(|| json!(5)))?;
    /// assert_eq!(rule.name(), "age");
    /// assert!(Rule::new("two words", Producer::constant(|| json!(5))).is_err());
    /// # Ok::<_, std::sync::Arc<fab::FabError>>(())
    /// ```
    pub fn new(name: impl Into<String>, producer: Producer) -> FabResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, producer })
    }

    /// Attribute name this rule produces.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Producer that computes the attribute value.
    #[must_use]
    pub const fn producer(&self) -> &Producer {
        &self.producer
    }

    /// Run the producer against the attributes produced so far.
    ///
    /// # Errors
    ///
    /// Wraps a failing producer's error in [`FabError::Production`].
    pub fn produce(&self, attributes: &Accumulator) -> FabResult<Value> {
        self.producer
            .produce(attributes)
            .map_err(|source| Arc::new(FabError::production(self.name.as_str(), source)))
    }
}

fn validate_name(name: &str) -> FabResult<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(Arc::new(FabError::invalid_rule(
            name,
            "rule name must not be empty",
        )));
    };
    if !(is_xid_start(first) || first == '_') {
        return Err(Arc::new(FabError::invalid_rule(
            name,
            "rule name must start with a letter or underscore",
        )));
    }
    if let Some(bad) = chars.find(|ch| !is_xid_continue(*ch)) {
        return Err(Arc::new(FabError::invalid_rule(
            name,
            format!("unexpected character {bad:?} in rule name"),
        )));
    }
    Ok(())
}
