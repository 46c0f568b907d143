//! Target contract implemented by types a factory can populate.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{FabAssignmentExt, FabResult};

/// Types a [`crate::Factory`] can construct and populate by attribute name.
///
/// Usually derived with `#[derive(fab::Fabricate)]`, which matches each
/// named field and converts the produced [`Value`] with [`from_value`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use fab::{FabError, FabResult, Fabricate, Value};
///
/// #[derive(Default)]
/// struct Cat {
///     name: String,
/// }
///
/// impl Fabricate for Cat {
///     fn assign(&mut self, attribute: &str, value: Value) -> FabResult<()> {
///         match attribute {
///             "name" => {
///                 self.name = fab::factory::from_value("Cat", attribute, value)?;
///                 Ok(())
///             }
///             _ => Err(Arc::new(FabError::unknown_attribute("Cat", attribute))),
///         }
///     }
/// }
/// ```
pub trait Fabricate: Default {
    /// Type name used in diagnostics.
    #[must_use]
    fn target_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Set `attribute` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FabError::UnknownAttribute`] when the type has no such
    /// attribute and [`crate::FabError::Assignment`] when `value` does not
    /// convert into the attribute's type.
    fn assign(&mut self, attribute: &str, value: Value) -> FabResult<()>;
}

/// JSON objects accept every attribute, which makes them a convenient target
/// for inspecting what a factory produces.
impl Fabricate for Map<String, Value> {
    fn target_name() -> &'static str {
        "Map"
    }

    fn assign(&mut self, attribute: &str, value: Value) -> FabResult<()> {
        self.insert(attribute.to_owned(), value);
        Ok(())
    }
}

/// Convert a produced value into the type of `attribute` on `target`.
///
/// Called by derive-generated [`Fabricate::assign`] implementations.
///
/// # Errors
///
/// Returns [`crate::FabError::Assignment`] when deserialisation fails.
///
/// # Examples
///
/// ```
/// use fab::{FabError, factory::from_value, json};
///
/// let age: u32 = from_value("Dog", "age", json!(5))?;
/// assert_eq!(age, 5);
///
/// let err = from_value::<u32>("Dog", "age", json!("five")).unwrap_err();
/// assert!(matches!(&*err, FabError::Assignment { attribute, .. } if attribute == "age"));
/// # Ok::<_, std::sync::Arc<FabError>>(())
/// ```
pub fn from_value<T: DeserializeOwned>(
    target: &'static str,
    attribute: &str,
    value: Value,
) -> FabResult<T> {
    serde_json::from_value(value).into_assignment(target, attribute)
}
