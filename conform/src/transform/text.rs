//! Built-in text transforms.
//!
//! Every function here is pure: it takes the current value and returns the
//! replacement. They are dispatched by [`super::Directive::apply`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::words::split_words;

/// Anything that is not a letter, hyphen, ASCII whitespace or apostrophe.
static NAME_DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\pL\-\t\n\x0C\r ']").expect("Invalid name filter regex")
});
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]{2,}").expect("Invalid whitespace regex"));
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").expect("Invalid hyphen regex"));
static APOSTROPHE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'{2,}").expect("Invalid apostrophe regex"));
static SPACED_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" *- *").expect("Invalid spaced hyphen regex"));
/// A letter, optionally followed by letters/spaces/hyphens/apostrophes ending in a letter.
static NAME_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\pL(?:[\pL\t\n\x0B\x0C\r \-']*\pL)*").expect("Invalid name token regex")
});
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\pL").expect("Invalid letter regex"));
static NON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\PL").expect("Invalid non-letter regex"));

pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Remove leading ASCII spaces only.
pub fn ltrim(s: &str) -> String {
    s.trim_start_matches(' ').to_string()
}

/// Remove trailing ASCII spaces only.
pub fn rtrim(s: &str) -> String {
    s.trim_end_matches(' ').to_string()
}

/// Lowercase one character at a time, so a final `Σ` becomes `σ`.
pub fn lower(s: &str) -> String {
    s.chars().map(lower_char).collect()
}

/// Uppercase one character at a time, so `ß` stays `ß`.
pub fn upper(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

/// Simple case mapping: characters without a single-character uppercase
/// form are kept.
fn upper_char(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Uppercase the first letter of every word, leaving the rest untouched.
///
/// A word starts after any character that is not a letter, a digit or an
/// underscore, so "o'neil jean-luc" becomes "O'Neil Jean-Luc".
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.push(upper_char(c));
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// Uppercase the first character if it is lowercase.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            std::iter::once(upper_char(first)).chain(chars).collect()
        }
        _ => s.to_string(),
    }
}

/// `firstWordLowerRestCapitalized`
pub fn camel(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i == 0 {
            out.push_str(&lower(word));
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `lower_words_joined_with_underscores`
pub fn snake(s: &str) -> String {
    join_lower(s, "_")
}

/// `lower-words-joined-with-hyphens`
pub fn slug(s: &str) -> String {
    join_lower(s, "-")
}

fn join_lower(s: &str, separator: &str) -> String {
    split_words(s)
        .into_iter()
        .map(lower)
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(upper_char(first))
            .chain(chars.map(lower_char))
            .collect(),
        None => String::new(),
    }
}

/// Format a human name.
///
/// Keeps letters, hyphens, whitespace and apostrophes, collapses repeated
/// separators, glues hyphens to their neighbours and title-cases the first
/// name-shaped token. Input without any letter yields an empty string.
pub fn name(s: &str) -> String {
    let lowered = lower(s);
    let filtered = NAME_DISALLOWED.replace_all(&lowered, "");
    let filtered = WHITESPACE_RUN.replace_all(&filtered, " ");
    let filtered = HYPHEN_RUN.replace_all(&filtered, "-");
    let filtered = APOSTROPHE_RUN.replace_all(&filtered, "'");
    let filtered = SPACED_HYPHEN.replace_all(&filtered, "-");

    NAME_TOKEN
        .find(&filtered)
        .map(|token| title(token.as_str()))
        .unwrap_or_default()
}

/// Lowercase the domain part of an address, splitting on the last `@`.
///
/// The local part is case sensitive (RFC 5321) and is kept as is. Input
/// without `@` is returned unchanged. Surrounding whitespace is kept too, so
/// annotate with `trim,email` to clean up form input.
pub fn email(s: &str) -> String {
    match s.rfind('@') {
        Some(at) => format!("{}@{}", &s[..at], lower(&s[at + 1..])),
        None => s.to_string(),
    }
}

/// Keep ASCII digits only.
pub fn only_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Remove ASCII digits.
pub fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Keep Unicode letters only.
pub fn only_alpha(s: &str) -> String {
    NON_LETTER.replace_all(s, "").into_owned()
}

/// Remove Unicode letters.
pub fn strip_alpha(s: &str) -> String {
    LETTER.replace_all(s, "").into_owned()
}

/// First `limit` characters if `s` has at least `limit` characters.
///
/// Counts Unicode scalar values, not bytes. `None` means the value is shorter
/// than the limit and stays as is.
pub fn truncate(s: &str, limit: usize) -> Option<String> {
    if s.chars().count() >= limit {
        Some(s.chars().take(limit).collect())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   padded value   ",
        "Hello World",
        "  jean--LUC  o''neil!! 42 ",
        "HTTPServer userID",
        "First-Last_name",
        "John.Doe@Example.COM",
        "ÉMILE zola 1840",
        "tabs\tand\nnewlines",
        "x",
    ];

    type Transform = fn(&str) -> String;

    const IDEMPOTENT: &[(&str, Transform)] = &[
        ("trim", trim),
        ("ltrim", ltrim),
        ("rtrim", rtrim),
        ("lower", lower),
        ("upper", upper),
        ("title", title),
        ("ucfirst", ucfirst),
        ("camel", camel),
        ("snake", snake),
        ("slug", slug),
        ("name", name),
        ("email", email),
        ("num", only_digits),
        ("!num", strip_digits),
        ("alpha", only_alpha),
        ("!alpha", strip_alpha),
    ];

    #[test]
    fn test_idempotence() {
        for (label, transform) in IDEMPOTENT {
            for sample in SAMPLES {
                let once = transform(sample);
                assert_eq!(transform(&once), once, "{} is not idempotent on {:?}", label, sample);
            }
        }
    }

    #[test]
    fn test_trim_variants() {
        assert_eq!(trim("  a b  "), "a b");
        assert_eq!(trim("\t a \n"), "a");
        assert_eq!(ltrim("  a b  "), "a b  ");
        assert_eq!(rtrim("  a b  "), "  a b");
        // ltrim/rtrim only strip spaces
        assert_eq!(ltrim("\t a"), "\t a");
    }

    #[test]
    fn test_trim_property() {
        for sample in SAMPLES {
            let trimmed = trim(sample);
            assert!(!trimmed.starts_with(' ') && !trimmed.ends_with(' '));
            assert!(sample.contains(trimmed.as_str()));
        }
    }

    #[test]
    fn test_case() {
        assert_eq!(lower("HeLLo"), "hello");
        assert_eq!(upper("HeLLo"), "HELLO");
        assert_eq!(title("hello big world"), "Hello Big World");
        assert_eq!(title("o'neil jean-luc"), "O'Neil Jean-Luc");
        assert_eq!(title("snake_case stays"), "Snake_case Stays");
    }

    #[test]
    fn test_simple_case_mapping() {
        assert_eq!(upper("straße"), "STRAßE");
        assert_eq!(lower("ΟΔΟΣ"), "οδοσ");
        assert_eq!(lower("İSTANBUL"), "istanbul");
        assert_eq!(title("ßa ßb"), "ßa ßb");
        assert_eq!(ucfirst("ßig"), "ßig");
        assert_eq!(snake("GroßeΣTraße"), "große_σ_traße");
    }

    #[test]
    fn test_ucfirst() {
        assert_eq!(ucfirst("hello world"), "Hello world");
        assert_eq!(ucfirst("Hello"), "Hello");
        assert_eq!(ucfirst("1abc"), "1abc");
        assert_eq!(ucfirst(""), "");
        assert_eq!(ucfirst("élan"), "Élan");
    }

    #[test]
    fn test_camel_snake_slug() {
        assert_eq!(camel("hello world"), "helloWorld");
        assert_eq!(camel("First-Last"), "firstLast");
        assert_eq!(camel("first_last"), "firstLast");
        // initialisms match greedily: "HTTPS" + "erver"
        assert_eq!(camel("HTTPServer"), "httpsErver");
        assert_eq!(snake("HTTPServer"), "https_erver");
        assert_eq!(snake("FirstLast"), "first_last");
        assert_eq!(snake("First Last"), "first_last");
        assert_eq!(snake("userID"), "user_id");
        assert_eq!(snake("parseURLString"), "parse_url_string");
        assert_eq!(slug("First Last"), "first-last");
        assert_eq!(slug("XMLHttpRequest"), "xml-http-request");
    }

    #[test]
    fn test_camel_snake_slug_share_words() {
        for sample in SAMPLES {
            let snake_out = snake(sample);
            let words: Vec<&str> = snake_out.split('_').filter(|w| !w.is_empty()).collect();
            assert_eq!(slug(sample), words.join("-"), "{:?}", sample);

            let expected_camel: String = words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_string() } else { capitalize(w) })
                .collect();
            assert_eq!(camel(sample), expected_camel, "{:?}", sample);
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(name("  jean--LUC  o''neil!! 42 "), "Jean-Luc O'Neil");
        assert_eq!(name("mary - jane"), "Mary-Jane");
        assert_eq!(name("ÉMILE zola"), "Émile Zola");
        assert_eq!(name("DR. JOHN SMITH"), "Dr John Smith");
    }

    #[test]
    fn test_name_without_letters_is_empty() {
        assert_eq!(name("12345"), "");
        assert_eq!(name("  -- ' "), "");
    }

    #[test]
    fn test_email() {
        assert_eq!(email("John.Doe@Example.COM"), "John.Doe@example.com");
        assert_eq!(email("Weird@Local@HOST.org"), "Weird@Local@host.org");
        assert_eq!(email("no-at-sign.COM"), "no-at-sign.COM");
        assert_eq!(email("Trailing@"), "Trailing@");
        assert_eq!(email(" Spaced@HOST.org "), " Spaced@host.org ");
    }

    #[test]
    fn test_email_property() {
        for input in ["A@B", "MiXeD.Local@DoMaIn.Org", "x@y@Z", "@ONLY"] {
            let at = input.rfind('@').unwrap();
            let out = email(input);
            assert_eq!(&out[..at], &input[..at]);
            assert_eq!(out[at + 1..], input[at + 1..].to_lowercase());
        }
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(only_digits("+33 (0)6-12"), "330612");
        assert_eq!(strip_digits("r2d2 c3po"), "rd cpo");
        assert_eq!(only_alpha("Zoë 42!"), "Zoë");
        assert_eq!(strip_alpha("Zoë 42!"), " 42!");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 5).as_deref(), Some("hello"));
        assert_eq!(truncate("hello", 5).as_deref(), Some("hello"));
        assert_eq!(truncate("hey", 5), None);
        assert_eq!(truncate("héllo wörld", 7).as_deref(), Some("héllo w"));
        assert_eq!(truncate("anything", 0).as_deref(), Some(""));
    }
}
