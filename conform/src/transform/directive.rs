//! Directives - the named steps of an annotation
//!
//! A directive is one comma-separated item of an annotation such as
//! `trim,lower,truncate=32`. Built-in names map to the functions in
//! [`super::text`] and [`super::escape`]; anything else is resolved against the
//! extension [`Registry`] when applied.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::{escape, text};
use crate::registry::Registry;

static TRUNCATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^truncate=([0-9]+)$").expect("Invalid truncate regex"));

/// All directives understood by the interpreter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `trim`: remove leading and trailing whitespace
    Trim,
    /// `ltrim`: remove leading spaces
    LeftTrim,
    /// `rtrim`: remove trailing spaces
    RightTrim,
    /// `lower`
    Lower,
    /// `upper`
    Upper,
    /// `title`: uppercase the first letter of every word
    Title,
    /// `ucfirst`: uppercase the first character
    UpperFirst,
    /// `camel`: `camelCase`
    Camel,
    /// `snake`: `snake_case`
    Snake,
    /// `slug`: `slug-case`
    Slug,
    /// `name`: human name formatting
    Name,
    /// `email`: lowercase the domain part
    Email,
    /// `num`: keep digits only
    Digits,
    /// `!num`: strip digits
    StripDigits,
    /// `alpha`: keep letters only
    Alpha,
    /// `!alpha`: strip letters
    StripAlpha,
    /// `!html`: HTML escaping
    EscapeHtml,
    /// `!js`: JavaScript string escaping
    EscapeJs,
    /// `truncate=<N>`: cut to N characters and end the chain
    Truncate(usize),
    /// Any other name, looked up in the registry
    Custom(String),
}

/// Outcome of applying one directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Feed the value to the next directive
    Continue(String),
    /// The value is final, skip the remaining directives
    Stop(String),
}

impl Directive {
    /// Parse a single directive name. Never fails: unknown names become
    /// [`Directive::Custom`].
    pub fn parse(name: &str) -> Self {
        match name {
            "trim" => Self::Trim,
            "ltrim" => Self::LeftTrim,
            "rtrim" => Self::RightTrim,
            "lower" => Self::Lower,
            "upper" => Self::Upper,
            "title" => Self::Title,
            "ucfirst" => Self::UpperFirst,
            "camel" => Self::Camel,
            "snake" => Self::Snake,
            "slug" => Self::Slug,
            "name" => Self::Name,
            "email" => Self::Email,
            "num" => Self::Digits,
            "!num" => Self::StripDigits,
            "alpha" => Self::Alpha,
            "!alpha" => Self::StripAlpha,
            "!html" => Self::EscapeHtml,
            "!js" => Self::EscapeJs,
            _ => Self::parse_truncate(name).unwrap_or_else(|| Self::Custom(name.to_string())),
        }
    }

    /// `truncate=<N>` with N fitting a signed 32-bit integer
    fn parse_truncate(name: &str) -> Option<Self> {
        let captures = TRUNCATE.captures(name)?;
        let limit: i32 = captures[1].parse().ok()?;
        usize::try_from(limit).ok().map(Self::Truncate)
    }

    /// Whether this directive is resolved through the registry
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Apply this directive to a value
    pub fn apply(&self, input: &str, registry: &Registry) -> Step {
        let output = match self {
            Self::Trim => text::trim(input),
            Self::LeftTrim => text::ltrim(input),
            Self::RightTrim => text::rtrim(input),
            Self::Lower => text::lower(input),
            Self::Upper => text::upper(input),
            Self::Title => text::title(input),
            Self::UpperFirst => text::ucfirst(input),
            Self::Camel => text::camel(input),
            Self::Snake => text::snake(input),
            Self::Slug => text::slug(input),
            Self::Name => text::name(input),
            Self::Email => text::email(input),
            Self::Digits => text::only_digits(input),
            Self::StripDigits => text::strip_digits(input),
            Self::Alpha => text::only_alpha(input),
            Self::StripAlpha => text::strip_alpha(input),
            Self::EscapeHtml => escape::html(input),
            Self::EscapeJs => escape::js(input),
            Self::Truncate(limit) => {
                // truncation ends the whole chain
                return match text::truncate(input, *limit) {
                    Some(cut) => Step::Stop(cut),
                    None => Step::Continue(input.to_string()),
                };
            }
            Self::Custom(name) => match registry.get(name) {
                Some(transform) => transform(input),
                None => {
                    log::debug!("No transform registered for directive '{}'", name);
                    input.to_string()
                }
            },
        };
        Step::Continue(output)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Self::Trim => "trim",
            Self::LeftTrim => "ltrim",
            Self::RightTrim => "rtrim",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Title => "title",
            Self::UpperFirst => "ucfirst",
            Self::Camel => "camel",
            Self::Snake => "snake",
            Self::Slug => "slug",
            Self::Name => "name",
            Self::Email => "email",
            Self::Digits => "num",
            Self::StripDigits => "!num",
            Self::Alpha => "alpha",
            Self::StripAlpha => "!alpha",
            Self::EscapeHtml => "!html",
            Self::EscapeJs => "!js",
            Self::Truncate(limit) => return write!(f, "truncate={}", limit),
            Self::Custom(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

/// Get a description of all built-in directives
pub fn directives_description() -> String {
    r#"Built-in directives (apply left to right, comma-separated):

| Directive | Description |
|-----------|-------------|
| trim | Remove leading/trailing whitespace |
| ltrim | Remove leading spaces |
| rtrim | Remove trailing spaces |
| lower | Lowercase |
| upper | Uppercase |
| title | Uppercase the first letter of every word |
| ucfirst | Uppercase the first character |
| camel | camelCase |
| snake | snake_case |
| slug | slug-case |
| name | Format a human name ("  jean--LUC " -> "Jean-Luc") |
| email | Lowercase the domain part of an e-mail address |
| num | Keep digits only |
| !num | Strip digits |
| alpha | Keep letters only |
| !alpha | Strip letters |
| !html | Escape for HTML |
| !js | Escape for JavaScript strings |
| truncate=N | Keep the first N characters and stop the chain |

Any other name is looked up among registered transforms and is ignored
when none is registered.

Example annotation:
  trim,name
  trim,email
  trim,snake,truncate=32"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtins() {
        assert_eq!(Directive::parse("trim"), Directive::Trim);
        assert_eq!(Directive::parse("!num"), Directive::StripDigits);
        assert_eq!(Directive::parse("!js"), Directive::EscapeJs);
        assert_eq!(Directive::parse("ucfirst"), Directive::UpperFirst);
    }

    #[test]
    fn test_parse_truncate() {
        assert_eq!(Directive::parse("truncate=10"), Directive::Truncate(10));
        assert_eq!(Directive::parse("truncate=0"), Directive::Truncate(0));
        // not the truncate grammar
        assert!(Directive::parse("truncate=").is_custom());
        assert!(Directive::parse("truncate=-1").is_custom());
        assert!(Directive::parse("truncate= 5").is_custom());
        // does not fit a 32-bit integer
        assert!(Directive::parse("truncate=99999999999").is_custom());
    }

    #[test]
    fn test_parse_custom() {
        assert_eq!(Directive::parse("Trim"), Directive::Custom("Trim".to_string()));
        assert_eq!(Directive::parse(""), Directive::Custom(String::new()));
    }

    #[test]
    fn test_display_round_trips_names() {
        for name in ["trim", "!alpha", "truncate=12", "my_ext", "ucfirst"] {
            assert_eq!(Directive::parse(name).to_string(), name);
        }
    }

    #[test]
    fn test_truncate_step() {
        let registry = Registry::new();
        let truncate = Directive::Truncate(5);
        assert_eq!(truncate.apply("hello world", &registry), Step::Stop("hello".to_string()));
        assert_eq!(truncate.apply("hey", &registry), Step::Continue("hey".to_string()));
    }

    #[test]
    fn test_custom_step() {
        let registry = Registry::new();
        let custom = Directive::parse("shout");
        assert_eq!(custom.apply("hey", &registry), Step::Continue("hey".to_string()));

        registry.register("shout", |s: &str| format!("{}!", s.to_uppercase()));
        assert_eq!(custom.apply("hey", &registry), Step::Continue("HEY!".to_string()));
    }

    #[test]
    fn test_description_lists_builtins() {
        let description = directives_description();
        for name in ["trim", "camel", "!html", "truncate=N", "email"] {
            assert!(description.contains(name), "missing {}", name);
        }
    }
}
