//! Trybuild fixture verifying `#[fab(crate = "...")]` resolves generated
//! paths through a renamed import.

use fab as fixtures;
use fixtures::{Fabricate, Factory, json};

#[derive(Debug, Default, Fabricate)]
#[fab(crate = "fixtures")]
struct Cat {
    name: String,
}

fn main() {
    let cats = Factory::<Cat>::new(|cat| {
        cat.attr("name", || json!("mauzi"));
    });
    let _: fixtures::FabResult<Cat> = cats.create();
}
