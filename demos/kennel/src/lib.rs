//! Library facade for the `kennel` demo: dog and cat fixtures built from
//! layered factories.
//!
//! [`dog_factory`] declares the baseline dog, [`big_dog_factory`] makes it
//! heavy and fast, and [`big_dog_with_cat_factory`] gives it a companion
//! built by [`cat_factory`].

use fab::{Accumulator, FabResult, Fabricate, Factory, Value, json};
use serde::{Deserialize, Serialize};

/// A dog's speed: a named pace or an exact figure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Speed {
    /// `"slow"` or `"fast"`.
    Pace(String),
    /// Exact speed in metres per minute.
    Exact(u32),
}

impl Default for Speed {
    fn default() -> Self {
        Self::Pace(String::from("fast"))
    }
}

/// A cat living in the kennel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Fabricate)]
pub struct Cat {
    /// Cat's name.
    pub name: String,
    /// Favourite food.
    pub food: String,
}

/// A dog living in the kennel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Fabricate)]
pub struct Dog {
    /// Dog's name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: u32,
    /// Derived from the weight unless declared.
    pub speed: Speed,
    /// Companion cat, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<Cat>,
}

/// Dogs heavier than this are slow.
pub const HEAVY_DOG_KG: u64 = 25;

fn pace(attrs: &Accumulator) -> Value {
    let heavy = attrs
        .get("weight")
        .and_then(Value::as_u64)
        .is_some_and(|weight| weight > HEAVY_DOG_KG);
    json!(if heavy { "slow" } else { "fast" })
}

/// Baseline dog: schnuffi, five years old, ten kilograms.
#[must_use]
pub fn dog_factory() -> Factory<Dog> {
    Factory::new(|dog| {
        dog.attr("name", || json!("schnuffi"))
            .attr("age", || json!(5))
            .attr("weight", || json!(10))
            .attr_with("speed", pace);
    })
}

/// Heavy dog with a fixed speed.
#[must_use]
pub fn big_dog_factory() -> Factory<Dog> {
    dog_factory().child(|dog| {
        dog.attr("weight", || json!(100)).attr("speed", || json!(1000));
    })
}

/// Baseline cat: mauzi, who likes fish.
#[must_use]
pub fn cat_factory() -> Factory<Cat> {
    Factory::new(|cat| {
        cat.attr("name", || json!("mauzi")).attr("food", || json!("fish"));
    })
}

/// Heavy dog accompanied by miez.
#[must_use]
pub fn big_dog_with_cat_factory() -> Factory<Dog> {
    let cats = cat_factory();
    big_dog_factory().child(move |dog| {
        let cats = cats.clone();
        dog.attr("cat", move || {
            cats.create_value_with(|cat| {
                cat.attr("name", || json!("miez"));
            })
        });
    })
}

/// Build the kennel's residents.
///
/// # Errors
///
/// Returns the first error raised while resolving or building a dog.
pub fn residents() -> FabResult<Vec<Dog>> {
    let fifi = dog_factory().create_with(|dog| {
        dog.attr("name", || json!("fifi"))
            .attr("weight", || json!(100));
    })?;
    let hasso = big_dog_factory().create_with(|dog| {
        dog.attr("name", || json!("hasso"));
    })?;
    let companion = big_dog_with_cat_factory().create()?;
    Ok(vec![fifi, hasso, companion])
}
