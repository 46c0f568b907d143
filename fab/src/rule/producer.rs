//! Zero- and one-argument attribute producers.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::FabResult;

use super::Accumulator;

type ConstantFn = dyn Fn() -> FabResult<Value> + Send + Sync;
type DerivedFn = dyn Fn(&Accumulator) -> FabResult<Value> + Send + Sync;

/// Function that produces one attribute value.
///
/// The variant fixes the producer's arity: a [`Producer::Constant`] takes no
/// input, while a [`Producer::Derived`] receives the attributes produced
/// before it in the final rule order.
#[derive(Clone)]
pub enum Producer {
    /// Producer that ignores previously produced attributes.
    Constant(Arc<ConstantFn>),
    /// Producer that reads previously produced attributes.
    Derived(Arc<DerivedFn>),
}

impl Producer {
    /// Wrap a zero-argument closure.
    #[must_use]
    pub fn constant<F, V>(produce: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoProduced,
    {
        Self::Constant(Arc::new(move || produce().into_produced()))
    }

    /// Wrap a closure that reads the accumulator.
    #[must_use]
    pub fn derived<F, V>(produce: F) -> Self
    where
        F: Fn(&Accumulator) -> V + Send + Sync + 'static,
        V: IntoProduced,
    {
        Self::Derived(Arc::new(move |attributes: &Accumulator| {
            produce(attributes).into_produced()
        }))
    }

    /// Number of arguments the producer accepts.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Constant(_) => 0,
            Self::Derived(_) => 1,
        }
    }

    /// Invoke the producer, passing `attributes` only to derived producers.
    ///
    /// # Errors
    ///
    /// Returns whatever error a fallible producer raises.
    pub fn produce(&self, attributes: &Accumulator) -> FabResult<Value> {
        match self {
            Self::Constant(produce) => produce(),
            Self::Derived(produce) => produce(attributes),
        }
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(_) => f.write_str("Producer::Constant(<fn>)"),
            Self::Derived(_) => f.write_str("Producer::Derived(<fn>)"),
        }
    }
}

/// Values a producer closure may return.
///
/// Infallible producers return a [`Value`]; producers that call other
/// factories return a [`FabResult<Value>`] so failures propagate.
pub trait IntoProduced {
    /// Convert the closure output into the producer result.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a failed [`FabResult`].
    fn into_produced(self) -> FabResult<Value>;
}

impl IntoProduced for Value {
    fn into_produced(self) -> FabResult<Value> {
        Ok(self)
    }
}

impl IntoProduced for FabResult<Value> {
    fn into_produced(self) -> FabResult<Value> {
        self
    }
}
