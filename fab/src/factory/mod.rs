//! Factories that resolve layered rule sequences and build targets.
//!
//! Resolution follows the parent chain: a factory's own sequence is its
//! parent's resolved sequence strictly merged with its own declarations.
//! Per-call overrides are merged over that result, then every rule is
//! evaluated in order and the values are assigned onto a fresh target.

mod target;

pub use target::{Fabricate, from_value};

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::merge::strict_merge;
use crate::rule::{Accumulator, Recorder, RuleSequence};
use crate::{FabConfig, FabError, FabResult};

type Block = dyn Fn(&mut Recorder) + Send + Sync;

/// Type-independent part of a factory: its block and ancestry.
struct Definition {
    block: Arc<Block>,
    parent: Option<Arc<Definition>>,
    cache: Option<OnceLock<RuleSequence>>,
}

impl Definition {
    fn new(block: Arc<Block>, parent: Option<Arc<Self>>, config: FabConfig) -> Self {
        Self {
            block,
            parent,
            cache: config.cache_resolution.then(OnceLock::new),
        }
    }

    /// Own sequence: the parent's resolved sequence with this block's rules
    /// merged over it.
    fn resolve(&self) -> FabResult<RuleSequence> {
        if let Some(cached) = self.cache.as_ref().and_then(OnceLock::get) {
            trace!(rules = ?cached.names(), "reusing resolved rule sequence");
            return Ok(cached.clone());
        }
        let own = RuleSequence::record(self.block.as_ref())?;
        let resolved = match &self.parent {
            None => own,
            Some(parent) => strict_merge(&parent.resolve()?, &own)?,
        };
        if let Some(cache) = &self.cache
            && cache.set(resolved.clone()).is_err()
        {
            trace!("resolved rule sequence was cached concurrently");
        }
        Ok(resolved)
    }

    fn depth(&self) -> usize {
        self.parent.as_ref().map_or(0, |parent| parent.depth() + 1)
    }
}

/// Reusable template for building `T` values.
///
/// A factory is immutable once built. Each call to [`Factory::create`]
/// replays the declarative blocks of the factory and all of its ancestors,
/// unless [`FabConfig::cache_resolution`] is enabled.
///
/// # Examples
///
/// ```
/// use fab::{Fabricate, Factory, json};
///
/// #[derive(Debug, Default, Fabricate)]
/// struct Dog {
///     name: String,
///     age: u32,
///     weight: u32,
/// }
///
/// let dogs = Factory::<Dog>::new(|dog| {
///     dog.attr("name", || json!("schnuffi"))
///         .attr("age", || json!(5))
///         .attr("weight", || json!(10));
/// });
/// let big_dogs = dogs.child(|dog| {
///     dog.attr("weight", || json!(100));
/// });
///
/// let hasso = big_dogs.create_with(|dog| {
///     dog.attr("name", || json!("hasso"));
/// })?;
/// assert_eq!((hasso.name.as_str(), hasso.age, hasso.weight), ("hasso", 5, 100));
/// # Ok::<_, std::sync::Arc<fab::FabError>>(())
/// ```
pub struct Factory<T> {
    definition: Arc<Definition>,
    config: FabConfig,
    target: PhantomData<fn() -> T>,
}

impl<T> Factory<T> {
    /// Create a factory without a parent.
    #[must_use]
    pub fn new<B>(block: B) -> Self
    where
        B: Fn(&mut Recorder) + Send + Sync + 'static,
    {
        Self::build(Arc::new(block), None, FabConfig::default())
    }

    /// Create a factory whose rules are layered over `parent`'s.
    ///
    /// The parent may build a different target type; only its rules are
    /// inherited. The child uses the parent's configuration.
    #[must_use]
    pub fn with_parent<U, B>(parent: &Factory<U>, block: B) -> Self
    where
        B: Fn(&mut Recorder) + Send + Sync + 'static,
    {
        Self::build(
            Arc::new(block),
            Some(Arc::clone(&parent.definition)),
            parent.config,
        )
    }

    /// Create a child factory for the same target with `self` as parent.
    #[must_use]
    pub fn child<B>(&self, block: B) -> Self
    where
        B: Fn(&mut Recorder) + Send + Sync + 'static,
    {
        Self::with_parent(self, block)
    }

    /// Return this factory with `config` applied.
    ///
    /// Ancestors keep the configuration they were built with.
    #[must_use]
    pub fn with_config(self, config: FabConfig) -> Self {
        Self::build(
            Arc::clone(&self.definition.block),
            self.definition.parent.clone(),
            config,
        )
    }

    fn build(block: Arc<Block>, parent: Option<Arc<Definition>>, config: FabConfig) -> Self {
        Self {
            definition: Arc::new(Definition::new(block, parent, config)),
            config,
            target: PhantomData,
        }
    }

    /// Configuration this factory was built with.
    #[must_use]
    pub const fn config(&self) -> FabConfig {
        self.config
    }

    /// Number of ancestors above this factory.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.definition.depth()
    }

    /// Resolve the factory's own rule sequence, including every ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`FabError::InvalidRule`] or [`FabError::DuplicateRule`] when
    /// a block is malformed and [`FabError::UnorderedCall`] when a child
    /// reorders its parent's rules.
    pub fn rules(&self) -> FabResult<RuleSequence> {
        self.definition.resolve()
    }

    /// Names of the resolved rule sequence, in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Factory::rules`].
    pub fn resolved_rule_names(&self) -> FabResult<Vec<String>> {
        Ok(self
            .rules()?
            .iter()
            .map(|rule| rule.name().to_owned())
            .collect())
    }

    /// Evaluate the resolved rules without building a target.
    ///
    /// # Errors
    ///
    /// Returns resolution errors and any error raised by a producer.
    pub fn attributes(&self) -> FabResult<Accumulator> {
        evaluate(&self.rules()?)
    }

    /// Evaluate the resolved rules with `overrides` merged over them.
    ///
    /// # Errors
    ///
    /// Returns resolution errors, [`FabError::DuplicateRule`] or
    /// [`FabError::UnorderedCall`] for malformed overrides, and any error
    /// raised by a producer.
    pub fn attributes_with<B>(&self, overrides: B) -> FabResult<Accumulator>
    where
        B: FnOnce(&mut Recorder),
    {
        let own = self.rules()?;
        let overriding = RuleSequence::record(overrides)?;
        evaluate(&strict_merge(&own, &overriding)?)
    }
}

impl<T: Fabricate> Factory<T> {
    /// Build a target from the factory's rules.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Factory::attributes`] and
    /// [`FabError::UnknownAttribute`] or [`FabError::Assignment`] when the
    /// target rejects an attribute.
    pub fn create(&self) -> FabResult<T> {
        assign(self.attributes()?)
    }

    /// Build a target with `overrides` layered over the factory's rules.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Factory::attributes_with`] and
    /// [`FabError::UnknownAttribute`] or [`FabError::Assignment`] when the
    /// target rejects an attribute.
    pub fn create_with<B>(&self, overrides: B) -> FabResult<T>
    where
        B: FnOnce(&mut Recorder),
    {
        assign(self.attributes_with(overrides)?)
    }

    /// Build `count` targets, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Factory::create`].
    pub fn create_batch(&self, count: usize) -> FabResult<Vec<T>> {
        (0..count).map(|_| self.create()).collect()
    }
}

impl<T: Fabricate + Serialize> Factory<T> {
    /// Build a target and serialise it, for use inside another factory's
    /// producer.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Factory::create`] and
    /// [`FabError::Serialize`] when the target cannot be serialised.
    pub fn create_value(&self) -> FabResult<Value> {
        to_value(&self.create()?)
    }

    /// Build a target with `overrides` and serialise it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`Factory::create_with`] and
    /// [`FabError::Serialize`] when the target cannot be serialised.
    pub fn create_value_with<B>(&self, overrides: B) -> FabResult<Value>
    where
        B: FnOnce(&mut Recorder),
    {
        to_value(&self.create_with(overrides)?)
    }
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            config: self.config,
            target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("target", &type_name::<T>())
            .field("depth", &self.depth())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn evaluate(sequence: &RuleSequence) -> FabResult<Accumulator> {
    let mut attributes = Accumulator::new();
    for rule in sequence {
        trace!(
            rule = rule.name(),
            arity = rule.producer().arity(),
            "evaluating rule"
        );
        let value = rule.produce(&attributes)?;
        attributes.insert(rule.name(), value);
    }
    Ok(attributes)
}

fn assign<T: Fabricate>(attributes: Accumulator) -> FabResult<T> {
    debug!(
        fixture = T::target_name(),
        attributes = ?attributes.names().collect::<Vec<_>>(),
        "assigning attributes"
    );
    let mut instance = T::default();
    for (name, value) in attributes {
        trace!(fixture = T::target_name(), attribute = %name, "assigning attribute");
        instance.assign(&name, value)?;
    }
    Ok(instance)
}

fn to_value<T: Fabricate + Serialize>(instance: &T) -> FabResult<Value> {
    serde_json::to_value(instance)
        .map_err(|e| Arc::new(FabError::serialize(T::target_name(), e)))
}
