use std::borrow::Cow;

/// Padding prepended by [`pad_left`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Padding<'a> {
    /// The given number of spaces.
    Spaces(usize),
    /// A literal prefix.
    Text(Cow<'a, str>),
}

impl From<usize> for Padding<'_> {
    fn from(value: usize) -> Self {
        Self::Spaces(value)
    }
}

impl<'a> From<&'a str> for Padding<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for Padding<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

pub fn pad_left<'a, P>(padding: P, input: &str) -> String
where
    P: Into<Padding<'a>>,
{
    match padding.into() {
        Padding::Spaces(n) => {
            let mut buf = String::with_capacity(n + input.len());
            buf.extend(std::iter::repeat(' ').take(n));
            buf.push_str(input);
            buf
        }
        Padding::Text(prefix) => {
            let mut buf = String::with_capacity(prefix.len() + input.len());
            buf.push_str(&prefix);
            buf.push_str(input);
            buf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pad_left, Padding};

    #[test]
    fn pad_spaces() {
        assert_eq!(pad_left(4usize, "Hello"), "    Hello");
        assert_eq!(pad_left(0usize, "Hello"), "Hello");
    }

    #[test]
    fn pad_text() {
        assert_eq!(pad_left("> ", "Hello"), "> Hello");
        assert_eq!(pad_left(String::from("--"), ""), "--");
        assert_eq!(pad_left(Padding::Text("".into()), "x"), "x");
    }
}
