//! Constructors for `FabError`.

use std::sync::Arc;

use super::FabError;

impl FabError {
    /// Construct an [`FabError::InvalidRule`] for the declaration `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fab::FabError;
    /// let err = FabError::invalid_rule("", "rule name must not be empty");
    /// assert_eq!(err.to_string(), "invalid rule '': rule name must not be empty");
    /// ```
    #[must_use]
    pub fn invalid_rule(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Construct a [`FabError::DuplicateRule`] listing `names`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fab::FabError;
    /// let err = FabError::duplicate_rule(["name", "age"]);
    /// assert_eq!(err.to_string(), "duplicate call of name, age");
    /// ```
    #[must_use]
    pub fn duplicate_rule<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::DuplicateRule {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Construct a [`FabError::UnorderedCall`] listing `names`.
    #[must_use]
    pub fn unordered_call<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnorderedCall {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Construct a [`FabError::UnknownAttribute`].
    #[must_use]
    pub fn unknown_attribute(target: &'static str, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            target,
            attribute: attribute.into(),
        }
    }

    /// Construct a [`FabError::Assignment`] from a `serde_json` conversion
    /// failure.
    #[must_use]
    pub fn assignment(
        target: &'static str,
        attribute: impl Into<String>,
        source: serde_json::Error,
    ) -> Self {
        Self::Assignment {
            target,
            attribute: attribute.into(),
            source,
        }
    }

    /// Construct a [`FabError::Serialize`] for `target`.
    #[must_use]
    pub const fn serialize(target: &'static str, source: serde_json::Error) -> Self {
        Self::Serialize { target, source }
    }

    /// Wrap a producer failure with the name of the rule that raised it.
    #[must_use]
    pub fn production(rule: impl Into<String>, source: Arc<Self>) -> Self {
        Self::Production {
            rule: rule.into(),
            source,
        }
    }

    /// Construct a [`FabError::Config`] from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fab::FabError;
    /// let err = FabError::config(figment::Error::from("boom"));
    /// assert!(matches!(err, FabError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: figment::Error) -> Self {
        Self::Config(Box::new(source))
    }

    /// Rule names reported by [`FabError::DuplicateRule`] and
    /// [`FabError::UnorderedCall`].
    ///
    /// Producer failures are unwrapped so the names of a nested factory's
    /// error remain reachable. Returns `None` for every other variant.
    #[must_use]
    pub fn rule_names(&self) -> Option<&[String]> {
        match self {
            Self::DuplicateRule { names } | Self::UnorderedCall { names } => {
                Some(names.as_slice())
            }
            Self::Production { source, .. } => source.rule_names(),
            _ => None,
        }
    }
}
