/// Name greeted by the `hello` binary.
pub const DEFAULT_NAME: &str = "World";

const PREFIX: &str = "Hello, ";
const SUFFIX: &str = "!";

/// Builds the greeting for `name`.
///
/// Any text is accepted, including the empty string. The result is always
/// `"Hello, "`, followed by `name`, followed by `"!"`.
pub fn greet(name: &str) -> String {
    let mut greeting = String::with_capacity(PREFIX.len() + name.len() + SUFFIX.len());
    greeting.push_str(PREFIX);
    greeting.push_str(name);
    greeting.push_str(SUFFIX);
    greeting
}
