//! `figment::Jail` wrappers for tests that read `FAB_*` variables.
//!
//! Factory configuration is read from process-global environment
//! variables. Each helper runs its closure inside a jail so variables set
//! by one test never leak into another.

use anyhow::{Result, anyhow};

/// Run `f` inside a [`figment::Jail`] and hand back its output.
///
/// Jail failures are flattened into [`anyhow::Error`] so configuration
/// tests can use `?` directly.
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut produced = None;
    figment::Jail::try_with(|jail| {
        produced = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("configuration jail failed: {err}"))?;
    produced.ok_or_else(|| anyhow!("configuration jail produced no value"))
}

/// Run `f` with `vars` exported, for example
/// `[("FAB_CACHE_RESOLUTION", "true")]`.
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or `f` fails.
pub fn with_env<F, T>(vars: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce() -> figment::error::Result<T>,
{
    with_jail(|jail| {
        for (key, value) in vars {
            jail.set_env(key, value);
        }
        f()
    })
}

/// Render a factory error as a [`figment::Error`] so `FabConfig::load`
/// results can be returned from a jail closure.
#[expect(
    clippy::needless_pass_by_value,
    reason = "taken by value so it can be passed to `map_err` directly"
)]
pub fn figment_error<E: std::fmt::Display>(err: E) -> figment::Error {
    figment::Error::from(format!("factory configuration failed: {err}"))
}

#[cfg(test)]
mod tests {
    //! Unit tests for the jail wrappers.

    use super::*;

    #[test]
    fn exported_variables_are_visible_inside_the_jail() -> Result<()> {
        let value = with_env(&[("FAB_CACHE_RESOLUTION", "true")], || {
            Ok(std::env::var("FAB_CACHE_RESOLUTION").ok())
        })?;
        anyhow::ensure!(value.as_deref() == Some("true"));
        Ok(())
    }

    #[test]
    fn closure_failures_carry_the_rendered_error() {
        let err = with_env(&[], || -> figment::error::Result<()> {
            Err(figment_error("cache_resolution must be a boolean"))
        })
        .expect_err("closure fails");
        assert!(
            err.to_string()
                .contains("factory configuration failed: cache_resolution must be a boolean"),
            "unexpected error: {err}"
        );
    }
}
