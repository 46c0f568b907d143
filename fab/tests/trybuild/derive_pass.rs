//! Trybuild fixture exercising the derive on a struct with nested and
//! skipped fields.

use fab::{Fabricate, Factory, json};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Collar {
    colour: String,
}

#[derive(Debug, Default, Fabricate)]
struct Dog {
    name: String,
    r#type: String,
    collar: Option<Collar>,
    #[fab(skip)]
    visits: Vec<u32>,
}

#[derive(Default, Fabricate)]
struct Empty {}

fn main() {
    let dogs = Factory::<Dog>::new(|dog| {
        dog.attr("name", || json!("rex"))
            .attr("type", || json!("terrier"))
            .attr("collar", || json!({"colour": "red"}));
    });
    let dog: fab::FabResult<Dog> = dogs.create();
    let _ = dog.map(|dog| (dog.name, dog.r#type, dog.collar.map(|c| c.colour), dog.visits));
    assert_eq!(<Dog as Fabricate>::target_name(), "Dog");
    let _: fab::FabResult<Empty> = Factory::<Empty>::new(|_| {}).create();
}
