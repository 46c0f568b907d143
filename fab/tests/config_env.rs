//! Integration tests for loading [`fab::FabConfig`] from the environment.

use anyhow::{Result, ensure};
use fab::{FabConfig, FabError, Factory, json};
use rstest::rstest;
use test_helpers::figment::{figment_error, with_env};

#[rstest]
#[case::unset(&[], false)]
#[case::enabled(&[("FAB_CACHE_RESOLUTION", "true")], true)]
#[case::disabled(&[("FAB_CACHE_RESOLUTION", "false")], false)]
fn cache_resolution_follows_the_environment(
    #[case] vars: &[(&str, &str)],
    #[case] expected: bool,
) -> Result<()> {
    let config = with_env(vars, || FabConfig::load().map_err(figment_error))?;
    ensure!(
        config.cache_resolution == expected,
        "cache_resolution was {}",
        config.cache_resolution
    );
    Ok(())
}

#[test]
fn malformed_values_report_a_config_error() -> Result<()> {
    let outcome = with_env(&[("FAB_CACHE_RESOLUTION", "sometimes")], || {
        Ok(FabConfig::load())
    })?;
    let err = outcome.err().ok_or_else(|| anyhow::anyhow!("load should fail"))?;
    ensure!(matches!(&*err, FabError::Config(_)), "unexpected error: {err}");
    Ok(())
}

#[test]
fn loaded_configuration_applies_to_factories() -> Result<()> {
    let config = with_env(&[("FAB_CACHE_RESOLUTION", "true")], || {
        FabConfig::load().map_err(figment_error)
    })?;
    let cats = Factory::<serde_json::Map<String, serde_json::Value>>::new(|cat| {
        cat.attr("name", || json!("mauzi"));
    })
    .with_config(config);
    let child = cats.child(|_| {});
    ensure!(child.config().cache_resolution);
    ensure!(child.create().is_ok());
    Ok(())
}
