//! Attribute values produced during one evaluation pass.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{FabAssignmentExt, FabResult};

/// Attribute values produced so far, in production order.
///
/// Derived producers receive the accumulator holding only the attributes
/// produced before them, so a rule can depend on the final value of any
/// earlier rule, including overridden ones.
///
/// # Examples
///
/// ```
/// use fab::{Accumulator, Factory, json};
///
/// let factory = Factory::<serde_json::Map<String, serde_json::Value>>::new(|r| {
///     r.attr("weight", || json!(30))
///         .attr_with("heavy", |attrs: &Accumulator| {
///             json!(attrs.get("weight").and_then(|w| w.as_u64()) > Some(25))
///         });
/// });
/// let attributes = factory.attributes()?;
/// assert_eq!(attributes.get("heavy"), Some(&json!(true)));
/// # Ok::<_, std::sync::Arc<fab::FabError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    values: Map<String, Value>,
}

impl Accumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Value produced for `name`, if it has been produced yet.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Deserialise the value produced for `name` into `T`.
    ///
    /// Returns `Ok(None)` when `name` has not been produced yet.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FabError::Assignment`] when the value does not
    /// convert into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> FabResult<Option<T>> {
        self.values
            .get(name)
            .cloned()
            .map(|value| serde_json::from_value(value).into_assignment("Accumulator", name))
            .transpose()
    }

    /// Whether `name` has been produced.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of produced attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been produced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attribute names in production order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in production order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Convert into a JSON object preserving production order.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub(crate) fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }
}

impl IntoIterator for Accumulator {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
