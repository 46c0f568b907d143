//! Factory configuration loaded from defaults and environment variables.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::{FabResult, FabResultExt};

/// Settings shared by a factory and the children built from it.
///
/// # Examples
///
/// ```
/// use fab::{FabConfig, Factory, json};
///
/// let config = FabConfig::default().with_cache_resolution(true);
/// let factory = Factory::<serde_json::Map<String, serde_json::Value>>::new(|r| {
///     r.attr("name", || json!("mauzi"));
/// })
/// .with_config(config);
/// assert!(factory.config().cache_resolution);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FabConfig {
    /// Reuse a factory's resolved rule sequence after the first successful
    /// resolution instead of replaying every ancestor block on each call.
    ///
    /// Only enable this when declarative blocks are pure: a cached sequence
    /// never observes later changes in what a block would declare.
    pub cache_resolution: bool,
}

impl FabConfig {
    /// Prefix of the environment variables read by [`FabConfig::load`].
    pub const ENV_PREFIX: &'static str = "FAB_";

    /// Load configuration from defaults overlaid with `FAB_*` environment
    /// variables (for example `FAB_CACHE_RESOLUTION=true`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::FabError::Config`] when a variable cannot be parsed.
    pub fn load() -> FabResult<Self> {
        Self::figment().extract().into_fab()
    }

    /// The [`Figment`] used by [`FabConfig::load`], for callers that want to
    /// merge further providers.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Enable or disable resolution caching.
    #[must_use]
    pub const fn with_cache_resolution(mut self, enabled: bool) -> Self {
        self.cache_resolution = enabled;
        self
    }
}
