//! Validated rule sequences built from declarative blocks.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use crate::{FabError, FabResult};

use super::{Recorder, Rule};

/// Ordered rules in which every name occurs once.
#[derive(Clone, Debug, Default)]
pub struct RuleSequence {
    rules: Vec<Rule>,
}

impl RuleSequence {
    /// Run `block` against a fresh [`Recorder`] and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`FabError::InvalidRule`] for a malformed declaration and
    /// [`FabError::DuplicateRule`] naming every rule declared more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use fab::{FabError, RuleSequence, json};
    ///
    /// let err = RuleSequence::record(|dog| {
    ///     dog.attr("name", || json!("schnuffi"))
    ///         .attr("name", || json!("fifi"));
    /// })
    /// .unwrap_err();
    /// assert!(matches!(&*err, FabError::DuplicateRule { names } if names == &["name"]));
    /// ```
    pub fn record<B>(block: B) -> FabResult<Self>
    where
        B: FnOnce(&mut Recorder),
    {
        let mut recorder = Recorder::new();
        block(&mut recorder);
        let rules = recorder.finish()?;
        let duplicates = repeated_names(&rules);
        if !duplicates.is_empty() {
            return Err(Arc::new(FabError::duplicate_rule(duplicates)));
        }
        let sequence = Self { rules };
        debug!(rules = ?sequence.names(), "recorded rule sequence");
        Ok(sequence)
    }

    /// Validate an already merged rule list.
    ///
    /// # Errors
    ///
    /// Returns [`FabError::UnorderedCall`] naming every repeated rule.
    pub(crate) fn from_merged(rules: Vec<Rule>) -> FabResult<Self> {
        let repeated = repeated_names(&rules);
        if repeated.is_empty() {
            Ok(Self { rules })
        } else {
            Err(Arc::new(FabError::unordered_call(repeated)))
        }
    }

    /// Rules in order.
    #[must_use]
    pub const fn rules(&self) -> &[Rule] {
        self.rules.as_slice()
    }

    /// Rule names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Number of rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sequence holds no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSequence {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Names that occur more than once in `rules`, in first-occurrence order.
pub(crate) fn repeated_names(rules: &[Rule]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rule in rules {
        *counts.entry(rule.name()).or_default() += 1;
    }
    let mut reported = HashSet::new();
    rules
        .iter()
        .map(Rule::name)
        .filter(|name| counts.get(name).is_some_and(|count| *count > 1) && reported.insert(*name))
        .map(str::to_owned)
        .collect()
}
