//! Records rule declarations issued by a declarative block.

use std::sync::Arc;

use crate::{FabError, FabResult};

use super::{Accumulator, IntoProduced, Producer, Rule};

/// Captures rule declarations in call order.
///
/// Declarations never run their producers. Methods return `&mut Self` so a
/// block can chain declarations; the first invalid declaration is kept and
/// reported by [`Recorder::finish`], and later declarations are ignored.
///
/// # Examples
///
/// ```
/// use fab::{Recorder, json};
///
/// let mut recorder = Recorder::new();
/// recorder
///     .attr("name", || json!("schnuffi"))
///     .attr("age", || json!(5));
/// let rules = recorder.finish()?;
/// let names: Vec<_> = rules.iter().map(|rule| rule.name()).collect();
/// assert_eq!(names, ["name", "age"]);
/// # Ok::<_, std::sync::Arc<fab::FabError>>(())
/// ```
#[derive(Debug, Default)]
pub struct Recorder {
    rules: Vec<Rule>,
    error: Option<Arc<FabError>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: Vec::new(),
            error: None,
        }
    }

    /// Record a rule named `name` with an explicit producer.
    pub fn declare(&mut self, name: &str, producer: Producer) -> &mut Self {
        if self.error.is_some() {
            return self;
        }
        match Rule::new(name, producer) {
            Ok(rule) => self.rules.push(rule),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Record a rule whose producer takes no arguments.
    pub fn attr<F, V>(&mut self, name: &str, produce: F) -> &mut Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoProduced,
    {
        self.declare(name, Producer::constant(produce))
    }

    /// Record a rule whose producer reads the attributes produced before it.
    pub fn attr_with<F, V>(&mut self, name: &str, produce: F) -> &mut Self
    where
        F: Fn(&Accumulator) -> V + Send + Sync + 'static,
        V: IntoProduced,
    {
        self.declare(name, Producer::derived(produce))
    }

    /// Number of rules recorded so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Consume the recorder and return the rules in call order.
    ///
    /// # Errors
    ///
    /// Returns the first [`FabError::InvalidRule`] raised by a declaration.
    pub fn finish(self) -> FabResult<Vec<Rule>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.rules),
        }
    }
}
