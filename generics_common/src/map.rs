use std::num::ParseIntError;

use generics_tracing::trace_span;

/// Returns `value` unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Applies `f` to every element of `items`, preserving order and length.
pub fn map<I, F, Out>(items: I, f: F) -> Vec<Out>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Out,
{
    items.into_iter().map(f).collect()
}

/// Applies the fallible `f` to every element of `items`, preserving order and
/// length.
///
/// Stops at the first element for which `f` fails and returns that error
/// unchanged. `f` is not called for any element after the failing one and no
/// partial output is returned.
pub fn transform<I, F, Out, E>(items: I, mut f: F) -> Result<Vec<Out>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Out, E>,
{
    let _span = trace_span!("map::transform").entered();

    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        match f(item) {
            Ok(value) => out.push(value),
            Err(err) => {
                tracing::debug!("transform failed at index {}", index);
                return Err(err);
            }
        }
    }

    Ok(out)
}

/// Multiplies every value by `factor`.
///
/// See [`scale!`](crate::scale!) for the variadic form.
pub fn scale(factor: f64, values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| factor * v).collect()
}

/// Variadic form of [`scale`].
///
/// ```
/// use generics_common::scale;
///
/// assert_eq!(scale!(10.0; 1.0, 2.0, 3.0, 4.0), [10.0, 20.0, 30.0, 40.0]);
/// assert!(scale!(3.0).is_empty());
/// ```
#[macro_export]
macro_rules! scale {
    ($factor:expr) => {
        $crate::map::scale($factor, &[])
    };
    ($factor:expr; $($value:expr),* $(,)?) => {
        $crate::map::scale($factor, &[$($value),*])
    };
}

/// Parses a base-10 integer.
pub fn parse_int(s: &str) -> Result<i64, ParseIntError> {
    s.trim().parse()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{identity, map, parse_int, scale, transform};

    #[test]
    fn identity_returns_argument() {
        assert_eq!(identity(5), 5);
        assert_eq!(identity("hi"), "hi");

        let value = vec![1, 2, 3];
        let ptr = value.as_ptr();
        let value = identity(value);
        assert_eq!(value.as_ptr(), ptr);
    }

    #[test]
    fn map_preserves_order_and_length() {
        let input = ["1", "22", "333"];
        let output = map(input, str::len);

        assert_eq!(output.len(), input.len());
        for (index, len) in output.iter().enumerate() {
            assert_eq!(*len, input[index].len());
        }
    }

    #[test]
    fn transform_parses() {
        let parsed = transform(["1", "2", "3"], parse_int).unwrap();
        assert_eq!(parsed, [1, 2, 3]);
    }

    #[test]
    fn transform_empty_never_calls() {
        let calls = Cell::new(0);
        let output: Result<Vec<i64>, ()> = transform(Vec::<&str>::new(), |_| {
            calls.set(calls.get() + 1);
            Ok(0)
        });

        assert_eq!(output.unwrap(), Vec::<i64>::new());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn transform_fails_fast() {
        let calls = Cell::new(0);
        let output = transform(["1", "x", "3", "y"], |s| {
            calls.set(calls.get() + 1);
            parse_int(s)
        });

        assert!(output.is_err());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn transform_returns_first_error_unchanged() {
        let output: Result<Vec<u32>, &str> = transform([1, 2, 3, 4], |v| match v {
            2 => Err("two"),
            4 => Err("four"),
            v => Ok(v),
        });

        assert_eq!(output, Err("two"));
    }

    #[test]
    fn scale_values() {
        assert_eq!(scale(10.0, &[1.0, 2.0, 3.0, 4.0]), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(scale(-0.5, &[4.0, -2.0]), [-2.0, 1.0]);
        assert!(scale(10.0, &[]).is_empty());
    }

    #[test]
    fn scale_macro() {
        assert_eq!(crate::scale!(10.0; 1.0, 2.0, 3.0, 4.0), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(crate::scale!(2.0; 1.5,), [3.0]);
        assert!(crate::scale!(2.0).is_empty());
    }

    #[test]
    fn scale_follows_float_semantics() {
        let out = scale(f64::INFINITY, &[0.0, 1.0]);
        assert!(out[0].is_nan());
        assert_eq!(out[1], f64::INFINITY);
    }
}
