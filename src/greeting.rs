use std::io::Write;

use anyhow::{Context, Result};

/// Name used when the caller supplies none
pub const DEFAULT_NAME: &str = "World";

/// The name to greet
///
/// The name starts out as [`DEFAULT_NAME`] and is only ever replaced
/// wholesale by a caller-supplied value, never partially mutated. Any value
/// is accepted verbatim, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    name: String,
}

impl Greeting {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Build a greeting from the user-supplied arguments (argument 0
    /// already stripped). The first argument wins, the rest are ignored;
    /// no arguments yields the default greeting.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        match args.into_iter().next() {
            Some(name) => Self::new(name),
            None => Self::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The greeting line body, without the trailing newline
    pub fn message(&self) -> String {
        format!("Hello {}!", self.name)
    }

    /// Write the greeting line, newline included, to the given sink
    pub fn write_line(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{}", self.message()).context("failed to write greeting")
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_greets_world() {
        assert_eq!(Greeting::default().message(), "Hello World!");
    }

    #[test]
    fn name_is_used_verbatim() {
        assert_eq!(Greeting::new("Alice").message(), "Hello Alice!");
        assert_eq!(Greeting::new("").message(), "Hello !");
        assert_eq!(Greeting::new("a\tb\n").message(), "Hello a\tb\n!");
    }

    #[test]
    fn first_argument_wins() {
        let greeting = Greeting::from_args(["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(greeting.name(), "Alice");
    }

    #[test]
    fn no_arguments_falls_back_to_default() {
        let greeting = Greeting::from_args(std::iter::empty());
        assert_eq!(greeting, Greeting::default());
    }

    #[test]
    fn write_line_appends_newline() {
        let mut buf = Vec::new();
        Greeting::new("Alice").write_line(&mut buf).unwrap();
        assert_eq!(buf, b"Hello Alice!\n");
    }
}
