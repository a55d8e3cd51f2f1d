//! Builds an element from JSON props and prints it back out as JSON.

use wrapcraft::prelude::*;

struct Runtime;
struct Container;
struct Chart;

fn main() -> anyhow::Result<()> {
    let create_element = create_element_factory(Runtime, &|_: &Runtime| {
        Ok::<_, anyhow::Error>(Container)
    })?;

    let props = Props::try_from(serde_json::json!({
        "title": "Requests per second",
        "series": [12, 18, 9],
        "Component": "not a component",
    }))?;
    let element = create_element(ComponentRef::new(Chart), Some(props));

    println!("{}", serde_json::to_string_pretty(&element)?);
    Ok(())
}
