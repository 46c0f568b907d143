//! End-to-end scenarios for building dogs and cats from layered factories.
//!
//! Covers per-call overrides, inheritance through a child factory, nested
//! factories and the errors raised for malformed override blocks.

mod common;

use std::sync::Arc;

use anyhow::{Result, anyhow, ensure};
use common::{Cat, Dog, Pace, Speed, big_dog_factory, cat_factory, dog_factory};
use fab::{Accumulator, FabError, json};
use rstest::rstest;

#[rstest]
fn base_factory_builds_schnuffi() -> Result<()> {
    let dog = dog_factory().create().map_err(|e| anyhow!(e))?;
    ensure!(
        dog == Dog {
            name: "schnuffi".into(),
            age: 5,
            weight: 10,
            speed: Speed::Pace(Pace::Fast),
            cat: None,
        },
        "unexpected dog: {dog:?}"
    );
    Ok(())
}

#[rstest]
fn overrides_feed_later_derived_rules() -> Result<()> {
    let fifi = dog_factory()
        .create_with(|dog| {
            dog.attr("name", || json!("fifi"))
                .attr("weight", || json!(100));
        })
        .map_err(|e| anyhow!(e))?;
    ensure!(fifi.name == "fifi");
    ensure!(fifi.age == 5);
    ensure!(fifi.weight == 100);
    ensure!(fifi.speed == Speed::Pace(Pace::Slow), "speed was {:?}", fifi.speed);
    Ok(())
}

#[rstest]
fn child_factory_rules_win_over_the_parent() -> Result<()> {
    let hasso = big_dog_factory()
        .create_with(|dog| {
            dog.attr("name", || json!("hasso"));
        })
        .map_err(|e| anyhow!(e))?;
    ensure!(
        hasso
            == Dog {
                name: "hasso".into(),
                age: 5,
                weight: 100,
                speed: Speed::Exact(1000),
                cat: None,
            },
        "unexpected dog: {hasso:?}"
    );
    Ok(())
}

#[rstest]
fn duplicate_declarations_name_the_rule() {
    let err = dog_factory()
        .create_with(|dog| {
            dog.attr("name", || json!("fifi"))
                .attr("name", || json!("hasso"));
        })
        .expect_err("name declared twice");
    assert!(matches!(&*err, FabError::DuplicateRule { names } if names == &["name"]));
}

#[rstest]
fn nested_factories_build_companions() -> Result<()> {
    let cats = cat_factory();
    let dog = dog_factory()
        .create_with(move |dog| {
            let cats = cats.clone();
            dog.attr("cat", move || {
                cats.create_value_with(|cat| {
                    cat.attr("name", || json!("miez"));
                })
            });
        })
        .map_err(|e| anyhow!(e))?;
    ensure!(
        dog.cat
            == Some(Cat {
                name: "miez".into(),
                food: "fish".into(),
            }),
        "unexpected cat: {:?}",
        dog.cat
    );
    Ok(())
}

#[rstest]
fn derived_producers_see_only_earlier_rules() -> Result<()> {
    let attributes = dog_factory()
        .attributes_with(|dog| {
            dog.attr_with("seen", |attrs: &Accumulator| {
                json!(attrs.names().collect::<Vec<_>>())
            });
        })
        .map_err(|e| anyhow!(e))?;
    ensure!(
        attributes.get("seen") == Some(&json!(["name", "age", "weight", "speed"])),
        "seen {:?}",
        attributes.get("seen")
    );
    Ok(())
}

#[rstest]
fn overridden_rules_keep_their_base_position() -> Result<()> {
    let attributes = dog_factory()
        .attributes_with(|dog| {
            dog.attr("colour", || json!("brown"))
                .attr("weight", || json!(30));
        })
        .map_err(|e| anyhow!(e))?;
    let names: Vec<&str> = attributes.names().collect();
    ensure!(
        names == ["name", "age", "colour", "weight", "speed"],
        "order was {names:?}"
    );
    Ok(())
}

#[rstest]
fn producer_failures_name_the_rule() {
    let err = dog_factory()
        .create_with(|dog| {
            dog.attr("age", || -> fab::FabResult<fab::Value> {
                Err(Arc::new(FabError::invalid_rule("age", "no birthday")))
            });
        })
        .expect_err("producer fails");
    assert!(matches!(&*err, FabError::Production { rule, .. } if rule == "age"));
}

#[rstest]
fn unordered_overrides_are_rejected() {
    let err = dog_factory()
        .create_with(|dog| {
            dog.attr("weight", || json!(1)).attr("age", || json!(1));
        })
        .expect_err("weight precedes age in the base");
    assert_eq!(err.rule_names(), Some(&["weight".to_owned()][..]));
}
