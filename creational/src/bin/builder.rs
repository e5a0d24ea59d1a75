//! Builds products through a director and by hand.

use anyhow::Result;

fn main() -> Result<()> {
    creational::logging::init(0);
    creational::demo::builder_walkthrough(&mut std::io::stdout().lock())
}
