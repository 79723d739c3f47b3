use generics_common::{pad_left, Padding};
use generics_core::config::Demos;

use super::DemoError;

pub fn run(config: &Demos) -> Result<(), DemoError> {
    println!("{:?}", pad_left(config.padding, "Hello world"));
    println!("{:?}", pad_left(Padding::Text("-> ".into()), "Hello world"));
    Ok(())
}
