use generics_common::scale;
use generics_core::config::Demos;

use super::DemoError;

pub fn run(config: &Demos) -> Result<(), DemoError> {
    let a = scale!(10.0; 1.0, 2.0, 3.0, 4.0);
    println!("{:?}", a);

    let b = scale(config.scale_factor, &config.scale_values);
    println!("{:?}", b);

    Ok(())
}
