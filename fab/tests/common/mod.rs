//! Target types and factories shared by the integration tests.

use fab::{Accumulator, Fabricate, Factory, json};
use serde::{Deserialize, Serialize};

/// How quickly a dog moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    /// Heavy dogs.
    Slow,
    /// Light dogs.
    Fast,
}

/// Either a named pace or an exact figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Speed {
    /// Symbolic pace.
    Pace(Pace),
    /// Exact speed.
    Exact(u32),
}

impl Default for Speed {
    fn default() -> Self {
        Self::Pace(Pace::Fast)
    }
}

/// Cat fixture target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Fabricate)]
pub struct Cat {
    /// Cat's name.
    pub name: String,
    /// Favourite food.
    pub food: String,
}

/// Dog fixture target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Fabricate)]
pub struct Dog {
    /// Dog's name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: u32,
    /// Speed derived from the weight unless overridden.
    pub speed: Speed,
    /// Companion cat.
    pub cat: Option<Cat>,
}

/// `fast` for light dogs and `slow` above 25 kg.
pub fn speed_from_weight(attrs: &Accumulator) -> fab::Value {
    let heavy = attrs.get("weight").and_then(fab::Value::as_u64) > Some(25);
    json!(if heavy { "slow" } else { "fast" })
}

/// The schnuffi base factory.
pub fn dog_factory() -> Factory<Dog> {
    Factory::new(|dog| {
        dog.attr("name", || json!("schnuffi"))
            .attr("age", || json!(5))
            .attr("weight", || json!(10))
            .attr_with("speed", speed_from_weight);
    })
}

/// Heavy dogs with a fixed speed, layered over [`dog_factory`].
pub fn big_dog_factory() -> Factory<Dog> {
    dog_factory().child(|dog| {
        dog.attr("weight", || json!(100)).attr("speed", || json!(1000));
    })
}

/// The mauzi cat factory.
pub fn cat_factory() -> Factory<Cat> {
    Factory::new(|cat| {
        cat.attr("name", || json!("mauzi")).attr("food", || json!("fish"));
    })
}
