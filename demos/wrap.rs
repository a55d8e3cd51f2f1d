//! Binds two factories to two copies of a runtime and wraps the same component with each.
//!
//! Run with `RUST_LOG=wrapcraft=trace` to see the factory's logging.

use tracing_subscriber::EnvFilter;
use wrapcraft::prelude::*;

struct Runtime {
    name: &'static str,
    version: u32,
}

#[derive(Debug)]
enum Container {
    Suspense,
    Legacy,
}

fn container_for(runtime: &Runtime) -> anyhow::Result<Container> {
    match runtime.version {
        0..=15 => anyhow::bail!("{} {} is too old", runtime.name, runtime.version),
        16 => Ok(Container::Legacy),
        _ => Ok(Container::Suspense),
    }
}

struct Greeting;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let greeting = ComponentRef::new(Greeting);

    for runtime in [
        Runtime { name: "runtime", version: 18 },
        Runtime { name: "runtime-compat", version: 16 },
        Runtime { name: "runtime-ancient", version: 14 },
    ] {
        let factory = match ElementFactory::new(runtime, &container_for) {
            Ok(factory) => factory,
            Err(err) => {
                tracing::warn!("skipping runtime: {err}");
                continue;
            }
        };
        let element = factory.create_element(greeting.clone(), props!(name: "world"));
        println!("{}: {:?} {:?}", factory.library().name, element.container(), element.props());
    }

    Ok(())
}
