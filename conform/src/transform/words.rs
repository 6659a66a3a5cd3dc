//! Word segmentation shared by the `camel`, `snake` and `slug` directives.
//!
//! Input is split on runs of non-alphanumeric characters, then each run is
//! split again at every uppercase letter. Known initialisms ("HTTP", "ID",
//! "URL", ...) are kept together instead of being broken into letters.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Initialisms recognized during segmentation (2 to 5 characters, ASCII).
static INITIALISMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
        "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UI",
        "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML",
    ]
    .into_iter()
    .collect()
});

const SHORTEST_INITIALISM: usize = 2;
const LONGEST_INITIALISM: usize = 5;

/// Returns true if `token` is a recognized initialism.
pub fn is_initialism(token: &str) -> bool {
    INITIALISMS.contains(token)
}

/// Split `input` into words.
///
/// ```ignore
/// assert_eq!(split_words("parseURLString"), ["parse", "URL", "String"]);
/// assert_eq!(split_words("first-name  last_name"), ["first", "name", "last", "name"]);
/// ```
pub fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for chunk in input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|chunk| !chunk.is_empty())
    {
        split_chunk(chunk, &mut words);
    }
    words
}

fn split_chunk<'a>(chunk: &'a str, words: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if c.is_uppercase() {
            if let Some(len) = initialism_at(&chunk[pos..]) {
                if pos > start {
                    words.push(&chunk[start..pos]);
                }
                words.push(&chunk[pos..pos + len]);
                start = pos + len;
                // initialisms are ASCII, one byte per char
                i += len;
                continue;
            }
            if pos > start {
                words.push(&chunk[start..pos]);
                start = pos;
            }
        }
        i += 1;
    }

    if start < chunk.len() {
        words.push(&chunk[start..]);
    }
}

/// Byte length of the longest initialism at the start of `rest`, if any.
///
/// The match is greedy and ignores what follows it, so "HTTPServer" yields
/// "HTTPS" and "UIDelegate" yields "UID".
fn initialism_at(rest: &str) -> Option<usize> {
    let mut longest = None;
    for len in SHORTEST_INITIALISM..=LONGEST_INITIALISM {
        let Some(candidate) = rest.get(..len) else {
            break;
        };
        if is_initialism(candidate) {
            longest = Some(len);
        }
    }
    longest
}
