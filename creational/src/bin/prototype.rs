//! Clones registered prototypes through the factory.

use anyhow::Result;
use creational::prototype::PrototypeFactory;

fn main() -> Result<()> {
    creational::logging::init(0);
    let factory = PrototypeFactory::new();
    creational::demo::prototype_walkthrough(&factory, &mut std::io::stdout().lock())
}
