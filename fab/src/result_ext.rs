//! Extensions for mapping errors to `FabResult` concisely.
//!
//! These helpers replace repetitive `.map_err(|e| Arc::new(FabError::…))`
//! chains when converting external error types into the crate's
//! `FabResult<T>` alias (`Result<T, Arc<FabError>>`).
//!
//! - Use [`FabResultExt::into_fab`] for error types that implement
//!   `Into<FabError>` (e.g., `figment::Error`).
//! - Use [`FabAssignmentExt::into_assignment`] for `serde_json::Error`
//!   values raised while converting a produced value into a field.
//!
//! # Examples
//!
//! ```
//! use fab::{FabConfig, FabResult, FabResultExt};
//!
//! fn load() -> FabResult<FabConfig> {
//!     figment::Figment::new().extract().into_fab()
//! }
//! ```

use std::sync::Arc;

use crate::{FabError, FabResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<FabError>`
/// into a `FabResult<T>`.
pub trait FabResultExt<T, E> {
    /// Convert `Result<T, E>` into `FabResult<T>` using `Into<FabError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<FabError>`.
    fn into_fab(self) -> FabResult<T>;
}

impl<T, E> FabResultExt<T, E> for Result<T, E>
where
    E: Into<FabError>,
{
    fn into_fab(self) -> FabResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension tailored to attribute conversion failures.
pub trait FabAssignmentExt<T> {
    /// Convert `Result<T, serde_json::Error>` into `FabResult<T>` as a
    /// [`FabError::Assignment`] for `attribute` on `target`.
    ///
    /// # Errors
    ///
    /// Returns a `FabError::Assignment` wrapped in `Arc` when the input is
    /// `Err`.
    fn into_assignment(self, target: &'static str, attribute: &str) -> FabResult<T>;
}

impl<T> FabAssignmentExt<T> for Result<T, serde_json::Error> {
    fn into_assignment(self, target: &'static str, attribute: &str) -> FabResult<T> {
        self.map_err(|e| Arc::new(FabError::assignment(target, attribute, e)))
    }
}
