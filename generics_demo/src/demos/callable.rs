use generics_common::{identity, Call, GenericCall, Identity};
use generics_core::config::Demos;

use super::DemoError;

pub fn run(_config: &Demos) -> Result<(), DemoError> {
    let backpack = identity::<&str>;
    println!("{}", Call::call(&backpack, "hi"));

    let backpack2 = Identity;
    let object2 = GenericCall::call(&backpack2, 5);
    let object3 = GenericCall::call(&backpack2, "hi");
    println!("{}", object3);
    println!("{}", object2);

    Ok(())
}
