use generics_common::{Backpack, Slot};
use generics_core::config::Demos;

use super::DemoError;

pub fn run(_config: &Demos) -> Result<(), DemoError> {
    let mut backpack: Slot<String> = Slot::new();
    fill(&mut backpack, "hi");

    let object = Backpack::get(&backpack)?;
    println!("{}", object);

    // The same container holding a different type.
    let mut numbers: Slot<i32> = Slot::new();
    fill(&mut numbers, 5);
    fill(&mut numbers, 6);
    println!("{}", numbers.get()?);

    Ok(())
}

fn fill<B, T>(backpack: &mut B, obj: impl Into<T>)
where
    B: Backpack<T>,
{
    backpack.add(obj.into());
}
