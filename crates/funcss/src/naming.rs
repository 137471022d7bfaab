//! Class-name construction shared by the CSS and accessor compilers.
//!
//! Both compiled artifacts build their class names through [`render_class_name`],
//! which is what keeps an accessor's output pointing at a selector that actually
//! exists in the emitted stylesheet.
//!
//! - [`strip`]: removes the reserved `@` and `:` characters from a token
//! - [`render_class_name`]: joins tokens into one class name with [`SEPARATOR`]
//! - [`camel_case`]: derives accessor keys from hyphenated declaration names
//!
//! ## Example
//!
//! ```rust
//! use funcss::naming::{camel_case, render_class_name};
//!
//! let class = render_class_name([Some("background-color"), Some("red"), Some(":hover")]);
//! assert_eq!(class, "background-color--red--hover");
//! assert_eq!(camel_case("background-color"), "backgroundColor");
//! ```

/// Separator placed between the tokens of a class name.
pub const SEPARATOR: &str = "--";

/// Characters that mark variant tokens and never appear in a class name.
const RESERVED: [char; 2] = ['@', ':'];

/// Returns `token` with every `@` and `:` removed.
pub fn strip(token: &str) -> String {
    token.chars().filter(|c| !RESERVED.contains(c)).collect()
}

/// Renders a class name from an ordered list of tokens.
///
/// Absent and empty tokens are skipped; the rest are stripped of reserved
/// characters and joined with `--`.
pub fn render_class_name<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut class = String::new();
    for token in tokens.into_iter().flatten() {
        if token.is_empty() {
            continue;
        }
        if !class.is_empty() {
            class.push_str(SEPARATOR);
        }
        class.extend(token.chars().filter(|c| !RESERVED.contains(c)));
    }
    class
}

/// Converts a hyphenated name into camelCase.
///
/// Every `-` is dropped and the character following it is upper-cased, so
/// `padding-top` becomes `paddingTop` and `-webkit-appearance` becomes
/// `WebkitAppearance`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_reserved_characters() {
        assert_eq!(strip("@narrow"), "narrow");
        assert_eq!(strip(":hover"), "hover");
        assert_eq!(strip("::placeholder"), "placeholder");
        assert_eq!(strip("a@b:c"), "abc");
    }

    #[test]
    fn strip_leaves_other_characters() {
        assert_eq!(strip("background-color"), "background-color");
        assert_eq!(strip("#ff4b5b"), "#ff4b5b");
        assert_eq!(strip(""), "");
    }

    #[test]
    fn render_joins_with_separator() {
        let class = render_class_name([Some("margin"), Some("sm")]);
        assert_eq!(class, "margin--sm");
    }

    #[test]
    fn render_skips_absent_and_empty_tokens() {
        let class = render_class_name([Some("margin"), None, Some("sm"), Some(""), None]);
        assert_eq!(class, "margin--sm");
    }

    #[test]
    fn render_strips_each_token() {
        let class = render_class_name([Some("color"), Some("red"), Some("@wide"), Some("::after")]);
        assert_eq!(class, "color--red--wide--after");
        assert!(!class.contains('@'));
        assert!(!class.contains(':'));
    }

    #[test]
    fn render_of_nothing_is_empty() {
        assert_eq!(render_class_name(std::iter::empty::<Option<&str>>()), "");
        assert_eq!(render_class_name([None, Some("")]), "");
    }

    #[test]
    fn camel_case_basic() {
        assert_eq!(camel_case("padding-top"), "paddingTop");
        assert_eq!(camel_case("background-color"), "backgroundColor");
        assert_eq!(camel_case("border-top-left-radius"), "borderTopLeftRadius");
    }

    #[test]
    fn camel_case_without_hyphen_is_unchanged() {
        assert_eq!(camel_case("color"), "color");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn camel_case_edge_hyphens() {
        assert_eq!(camel_case("-webkit-appearance"), "WebkitAppearance");
        assert_eq!(camel_case("trailing-"), "trailing");
    }
}
