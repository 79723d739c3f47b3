use generics_common::{map, parse_int, transform};
use generics_core::config::Demos;
use generics_tracing::trace_span;

use super::DemoError;

pub fn run(config: &Demos) -> Result<(), DemoError> {
    let _span = trace_span!("demos::map").entered();

    let lengths = map(&config.numbers, String::len);
    println!("{:?}", lengths);

    let parsed = parse_all(&config.numbers)?;
    println!("{:?}", parsed);

    Ok(())
}

fn parse_all(numbers: &[String]) -> Result<Vec<i64>, DemoError> {
    let parsed = transform(numbers, |n| parse_int(n))?;
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use generics_core::config::Demos;

    use super::{parse_all, run};
    use crate::demos::DemoError;

    #[test]
    fn parse_numbers() {
        let numbers = ["1".to_owned(), "2".to_owned(), "3".to_owned()];
        assert_eq!(parse_all(&numbers).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn invalid_number_fails_demo() {
        let config = Demos {
            numbers: vec!["1".to_owned(), "two".to_owned()],
            ..Default::default()
        };

        assert!(matches!(run(&config), Err(DemoError::ParseInt(_))));
    }
}
