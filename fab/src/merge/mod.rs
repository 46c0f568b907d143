//! Order-preserving merge of rule sequences.
//!
//! A merge combines a **base** sequence with an **overrides** sequence:
//!
//! - base rules without an override keep their relative position;
//! - a base rule with an override is replaced in place by the override;
//! - override rules unknown to the base are inserted just before the next
//!   replaced base rule, or appended when no replacement follows them.
//!
//! ```text
//! base:      name  age  weight  speed
//! overrides: colour  weight  name
//! merged:    colour  weight  name  age  weight  speed
//! ```
//!
//! The scan never moves a base rule, so overrides that name base rules in a
//! different order than the base leave a repeated name behind (`weight`
//! above).
//! [`strict_merge`] reports that as [`crate::FabError::UnorderedCall`]
//! instead of guessing which position the caller meant.

use tracing::debug;

use crate::FabResult;
use crate::rule::{Rule, RuleSequence};

/// Merge `overrides` onto `base` without validating the result.
///
/// Scans `base` left to right with a cursor into `overrides`. For each base
/// rule, the first unconsumed override with the same name replaces it, and
/// every unconsumed override before that match is emitted first. Overrides
/// left after the scan are appended in order.
///
/// # Examples
///
/// ```
/// use fab::{RuleSequence, json, merge_rules};
///
/// let base = RuleSequence::record(|r| {
///     r.attr("name", || json!("schnuffi"))
///         .attr("age", || json!(5))
///         .attr("weight", || json!(10));
/// })?;
/// let overrides = RuleSequence::record(|r| {
///     r.attr("colour", || json!("brown"))
///         .attr("weight", || json!(100));
/// })?;
/// let merged = merge_rules(base.rules(), overrides.rules());
/// let names: Vec<_> = merged.iter().map(|rule| rule.name()).collect();
/// assert_eq!(names, ["name", "age", "colour", "weight"]);
/// # Ok::<_, std::sync::Arc<fab::FabError>>(())
/// ```
#[must_use]
pub fn merge_rules(base: &[Rule], overrides: &[Rule]) -> Vec<Rule> {
    let mut merged = Vec::with_capacity(base.len() + overrides.len());
    let mut pending = overrides;
    for rule in base {
        let Some(index) = pending
            .iter()
            .position(|candidate| candidate.name() == rule.name())
        else {
            merged.push(rule.clone());
            continue;
        };
        let (extras, rest) = pending.split_at(index);
        merged.extend_from_slice(extras);
        if let Some((replacement, remaining)) = rest.split_first() {
            merged.push(replacement.clone());
            pending = remaining;
        }
    }
    merged.extend_from_slice(pending);
    merged
}

/// Merge `overrides` onto `base` and reject repeated names.
///
/// # Errors
///
/// Returns [`crate::FabError::UnorderedCall`] naming every rule that occurs
/// more than once after [`merge_rules`].
///
/// # Examples
///
/// ```
/// use fab::{FabError, RuleSequence, json, strict_merge};
///
/// let base = RuleSequence::record(|r| {
///     r.attr("name", || json!("schnuffi")).attr("age", || json!(5));
/// })?;
/// let swapped = RuleSequence::record(|r| {
///     r.attr("age", || json!(6)).attr("name", || json!("fifi"));
/// })?;
/// let err = strict_merge(&base, &swapped).unwrap_err();
/// assert_eq!(err.to_string(), "unordered call of age");
/// # Ok::<_, std::sync::Arc<fab::FabError>>(())
/// ```
pub fn strict_merge(base: &RuleSequence, overrides: &RuleSequence) -> FabResult<RuleSequence> {
    let merged = RuleSequence::from_merged(merge_rules(base.rules(), overrides.rules()))?;
    debug!(
        base = ?base.names(),
        overrides = ?overrides.names(),
        merged = ?merged.names(),
        "merged rule sequences"
    );
    Ok(merged)
}
